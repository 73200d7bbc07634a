//! The collection screen: every record as a card, plus delete.

use std::time::Duration;

use crate::gateway::{Call, Outcome};
use crate::notice::{Ticket, Tickets, TransientMessage};
use crate::router::Route;
use crate::types::Animal;
use crate::views::{Card, CardIntent, Confirmable, Confirmation, Effect, LoadState};

pub const LOAD_FAILED: &str = "Error loading the animals. Please try again.";

#[derive(Debug)]
pub struct ListView {
    state: LoadState<Vec<Animal>>,
    success: TransientMessage,
    error: TransientMessage,
    tickets: Tickets,
    notice_window: Duration,
    /// Name of the record whose delete is in flight.
    deleting: Option<String>,
}

impl ListView {
    pub fn new(notice_window: Duration) -> Self {
        Self {
            state: LoadState::Loading,
            success: TransientMessage::default(),
            error: TransientMessage::default(),
            tickets: Tickets::default(),
            notice_window,
            deleting: None,
        }
    }

    pub fn enter(&mut self) -> Vec<Effect> {
        self.reload()
    }

    fn reload(&mut self) -> Vec<Effect> {
        self.state = LoadState::Loading;
        vec![Effect::Call(Call::ListAll)]
    }

    pub fn state(&self) -> &LoadState<Vec<Animal>> {
        &self.state
    }

    /// Records in server order; empty unless loaded.
    pub fn animales(&self) -> &[Animal] {
        self.state.loaded().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn cards(&self) -> impl Iterator<Item = Card<'_>> {
        self.animales().iter().map(Card::new)
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success.text()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.text()
    }

    pub fn create(&self) -> Vec<Effect> {
        vec![Effect::Navigate(Route::Create)]
    }

    pub fn on_card(&mut self, intent: CardIntent) -> Vec<Effect> {
        match intent {
            CardIntent::View(id) => vec![Effect::Navigate(Route::detail(id))],
            CardIntent::Edit(id) => vec![Effect::Navigate(Route::edit(id))],
            CardIntent::Delete { id, nombre } => self.request_delete(id, nombre),
        }
    }

    /// Deletes always go through a confirmation. One delete at a time.
    pub fn request_delete(&mut self, id: String, nombre: String) -> Vec<Effect> {
        if self.deleting.is_some() {
            return Vec::new();
        }
        vec![Effect::Confirm(Confirmation {
            prompt: format!("Are you sure you want to delete {nombre}?"),
            action: Confirmable::Delete { id, nombre },
        })]
    }

    pub fn confirmed(&mut self, action: Confirmable, accepted: bool) -> Vec<Effect> {
        match action {
            Confirmable::Delete { id, nombre } if accepted && self.deleting.is_none() => {
                self.deleting = Some(nombre);
                vec![Effect::Call(Call::DeleteById(id))]
            }
            _ => Vec::new(),
        }
    }

    pub fn on_outcome(&mut self, outcome: Outcome) -> Vec<Effect> {
        match outcome {
            Outcome::Listed(Ok(animales)) => {
                tracing::debug!(count = animales.len(), "animals loaded");
                self.state = LoadState::Loaded(animales);
                Vec::new()
            }
            Outcome::Listed(Err(err)) => {
                tracing::warn!(%err, "failed to load animals");
                self.state = LoadState::Failed(LOAD_FAILED.to_string());
                Vec::new()
            }
            Outcome::Deleted(result) => {
                let nombre = self.deleting.take().unwrap_or_default();
                let ticket = self.tickets.issue();
                let mut effects = match result {
                    Ok(_) => {
                        self.success
                            .show(ticket, format!("{nombre} has been deleted"));
                        self.reload()
                    }
                    Err(err) => {
                        tracing::warn!(%err, %nombre, "failed to delete animal");
                        self.error
                            .show(ticket, format!("Could not delete {nombre}. Please try again."));
                        Vec::new()
                    }
                };
                effects.push(Effect::ClearNoticeAfter {
                    ticket,
                    delay: self.notice_window,
                });
                effects
            }
            other => {
                tracing::debug!(?other, "list view ignoring outcome");
                Vec::new()
            }
        }
    }

    pub fn notice_expired(&mut self, ticket: Ticket) {
        self.success.expire(ticket);
        self.error.expire(ticket);
    }
}
