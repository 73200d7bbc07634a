//! Submission state shared by the create and edit screens.

use crate::form::{AnimalForm, ErrorMessages, Field};
use crate::types::Animal;

pub const INCOMPLETE: &str = "Please complete all fields correctly";

/// An `AnimalForm` plus the `sending` gate and the form-level error line.
#[derive(Debug, Clone)]
pub struct FormView {
    form: AnimalForm,
    messages: ErrorMessages,
    sending: bool,
    error: Option<String>,
}

impl FormView {
    pub fn new(messages: ErrorMessages) -> Self {
        Self {
            form: AnimalForm::new(),
            messages,
            sending: false,
            error: None,
        }
    }

    pub fn form(&self) -> &AnimalForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut AnimalForm {
        &mut self.form
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn field_error(&self, field: Field) -> Option<String> {
        self.form.error_message(field, &self.messages)
    }

    /// Gate a submission. Returns the values to send, or `None` when a
    /// request is already in flight or the form is invalid. An invalid form
    /// gets every field touched and the generic error line.
    pub fn begin_submit(&mut self) -> Option<Animal> {
        if self.sending {
            return None;
        }
        if !self.form.is_valid() {
            self.form.mark_all_touched();
            self.error = Some(INCOMPLETE.to_string());
            return None;
        }
        self.sending = true;
        self.error = None;
        Some(self.form.values())
    }

    /// The request failed: allow another attempt and keep the values.
    pub fn submit_failed(&mut self, message: impl Into<String>) {
        self.sending = false;
        self.error = Some(message.into());
    }
}
