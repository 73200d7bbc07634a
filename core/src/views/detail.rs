//! A single record, with edit, delete and back actions.

use crate::gateway::{Call, Outcome};
use crate::router::Route;
use crate::types::Animal;
use crate::views::{Confirmable, Confirmation, Effect, LoadState, MISSING_ID};

pub const LOAD_FAILED: &str = "Could not load the animal. Check that the id is correct.";

#[derive(Debug)]
pub struct DetailView {
    id: Option<String>,
    state: LoadState<Animal>,
    /// Set when a delete fails; the record stays on screen.
    delete_error: Option<String>,
    deleting: bool,
}

impl DetailView {
    pub fn new(id: Option<String>) -> Self {
        Self {
            id,
            state: LoadState::Loading,
            delete_error: None,
            deleting: false,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn state(&self) -> &LoadState<Animal> {
        &self.state
    }

    pub fn animal(&self) -> Option<&Animal> {
        self.state.loaded()
    }

    pub fn delete_error(&self) -> Option<&str> {
        self.delete_error.as_deref()
    }

    pub fn enter(&mut self) -> Vec<Effect> {
        match &self.id {
            Some(id) => {
                self.state = LoadState::Loading;
                vec![Effect::Call(Call::GetById(id.clone()))]
            }
            None => {
                self.state = LoadState::Failed(MISSING_ID.to_string());
                Vec::new()
            }
        }
    }

    pub fn edit(&self) -> Vec<Effect> {
        match self.animal().and_then(|a| a.id.clone()) {
            Some(id) => vec![Effect::Navigate(Route::edit(id))],
            None => Vec::new(),
        }
    }

    pub fn back(&self) -> Vec<Effect> {
        vec![Effect::Navigate(Route::List)]
    }

    pub fn request_delete(&self) -> Vec<Effect> {
        if self.deleting {
            return Vec::new();
        }
        let Some(animal) = self.animal() else {
            return Vec::new();
        };
        let Some(id) = animal.id.clone() else {
            return Vec::new();
        };
        vec![Effect::Confirm(Confirmation {
            prompt: format!("Are you sure you want to delete {}?", animal.nombre),
            action: Confirmable::Delete {
                id,
                nombre: animal.nombre.clone(),
            },
        })]
    }

    pub fn confirmed(&mut self, action: Confirmable, accepted: bool) -> Vec<Effect> {
        match action {
            Confirmable::Delete { id, .. } if accepted && !self.deleting => {
                self.deleting = true;
                self.delete_error = None;
                vec![Effect::Call(Call::DeleteById(id))]
            }
            _ => Vec::new(),
        }
    }

    pub fn on_outcome(&mut self, outcome: Outcome) -> Vec<Effect> {
        match outcome {
            Outcome::Fetched(Ok(animal)) => {
                tracing::debug!(id = ?animal.id, "animal loaded");
                self.state = LoadState::Loaded(animal);
                Vec::new()
            }
            Outcome::Fetched(Err(err)) => {
                tracing::warn!(%err, id = ?self.id, "failed to load animal");
                self.state = LoadState::Failed(LOAD_FAILED.to_string());
                Vec::new()
            }
            Outcome::Deleted(result) => {
                self.deleting = false;
                let nombre = self
                    .animal()
                    .map(|a| a.nombre.clone())
                    .unwrap_or_default();
                match result {
                    Ok(_) => vec![
                        Effect::Alert(format!("{nombre} has been deleted")),
                        Effect::Navigate(Route::List),
                    ],
                    Err(err) => {
                        tracing::warn!(%err, %nombre, "failed to delete animal");
                        self.delete_error =
                            Some(format!("Could not delete {nombre}. Please try again."));
                        Vec::new()
                    }
                }
            }
            other => {
                tracing::debug!(?other, "detail view ignoring outcome");
                Vec::new()
            }
        }
    }
}
