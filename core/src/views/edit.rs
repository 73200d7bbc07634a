//! Edit form, pre-filled from the stored record.

use crate::form::{ErrorMessages, Field};
use crate::gateway::{Call, Outcome};
use crate::router::Route;
use crate::views::{Confirmable, Confirmation, Effect, FormView, MISSING_ID};

pub const UPDATED: &str = "Animal updated";
pub const LOAD_FAILED: &str = "Could not load the animal. Check that it exists.";
pub const UPDATE_FAILED: &str = "Error updating the animal. Please try again.";
pub const DISCARD_PROMPT: &str =
    "Are you sure you want to cancel? The changes will not be saved.";

#[derive(Debug)]
pub struct EditView {
    /// View state, never a form field.
    id: Option<String>,
    loading: bool,
    form: FormView,
}

impl EditView {
    pub fn new(id: Option<String>) -> Self {
        Self {
            id,
            loading: true,
            form: FormView::new(ErrorMessages::EDIT),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn form(&self) -> &FormView {
        &self.form
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn enter(&mut self) -> Vec<Effect> {
        match &self.id {
            Some(id) => {
                self.loading = true;
                vec![Effect::Call(Call::GetById(id.clone()))]
            }
            None => {
                self.loading = false;
                self.form.set_error(MISSING_ID);
                Vec::new()
            }
        }
    }

    /// The payload is the current form values carrying the original id.
    pub fn submit(&mut self) -> Vec<Effect> {
        let Some(id) = self.id.clone() else {
            return Vec::new();
        };
        if self.loading {
            return Vec::new();
        }
        match self.form.begin_submit() {
            Some(values) => {
                let animal = values.with_id(id.as_str());
                vec![Effect::Call(Call::Update(id, animal))]
            }
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
            Outcome::Fetched(Ok(animal)) => {
                tracing::debug!(id = ?animal.id, "animal loaded for editing");
                self.form.form_mut().patch(&animal);
                self.loading = false;
                Vec::new()
            }
            Outcome::Fetched(Err(err)) => {
                tracing::warn!(%err, id = ?self.id, "failed to load animal for editing");
                self.form.set_error(LOAD_FAILED);
                self.loading = false;
                Vec::new()
            }
            Outcome::Updated(Ok(animal)) => {
                tracing::debug!(id = ?animal.id, "animal updated");
                vec![Effect::Alert(UPDATED.to_string()), Effect::Navigate(Route::List)]
            }
            Outcome::Updated(Err(err)) => {
                tracing::warn!(%err, id = ?self.id, "failed to update animal");
                self.form.submit_failed(UPDATE_FAILED);
                Vec::new()
            }
            other => {
                tracing::debug!(?other, "edit view ignoring outcome");
                Vec::new()
            }
        }
    }
}
