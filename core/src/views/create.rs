//! New-record form.

use crate::form::{ErrorMessages, Field};
use crate::gateway::{Call, Outcome};
use crate::router::Route;
use crate::views::{Confirmable, Confirmation, Effect, FormView};

pub const CREATED: &str = "Animal created";
pub const CREATE_FAILED: &str = "Error creating the animal. Please try again.";
pub const DISCARD_PROMPT: &str = "Are you sure you want to cancel? The data will not be saved.";

#[derive(Debug)]
pub struct CreateView {
    form: FormView,
}

impl Default for CreateView {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateView {
    pub fn new() -> Self {
        Self {
            form: FormView::new(ErrorMessages::CREATE),
        }
    }

    pub fn form(&self) -> &FormView {
        &self.form
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn submit(&mut self) -> Vec<Effect> {
        match self.form.begin_submit() {
            Some(animal) => vec![Effect::Call(Call::Create(animal))],
            None => Vec::new(),
        }
    }

    pub fn cancel(&self) -> Vec<Effect> {
        vec![Effect::Confirm(Confirmation {
            prompt: DISCARD_PROMPT.to_string(),
            action: Confirmable::Discard,
        })]
    }

    pub fn confirmed(&mut self, action: Confirmable, accepted: bool) -> Vec<Effect> {
        match action {
            Confirmable::Discard if accepted => vec![Effect::Navigate(Route::List)],
            _ => Vec::new(),
        }
    }

    pub fn on_outcome(&mut self, outcome: Outcome) -> Vec<Effect> {
        match outcome {
            Outcome::Created(Ok(animal)) => {
                tracing::debug!(id = ?animal.id, "animal created");
                vec![Effect::Alert(CREATED.to_string()), Effect::Navigate(Route::List)]
            }
            Outcome::Created(Err(err)) => {
                tracing::warn!(%err, "failed to create animal");
                self.form.submit_failed(CREATE_FAILED);
                Vec::new()
            }
            other => {
                tracing::debug!(?other, "create view ignoring outcome");
                Vec::new()
            }
        }
    }
}
