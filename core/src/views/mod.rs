//! Screen state machines.
//!
//! # Design
//! Views never perform I/O. Every handler takes an input (user intent,
//! gateway `Outcome`, confirmation answer, timer expiry) and returns the
//! `Effect`s the host must carry out. The host owns the gateway, the
//! confirmation prompt, the timers and navigation; a view only owns its own
//! display state. This keeps each screen a plain value that tests can drive
//! step by step.

pub mod card;
pub mod create;
pub mod detail;
pub mod edit;
pub mod form_view;
pub mod list;

use std::time::Duration;

use crate::gateway::{Call, Outcome};
use crate::notice::{Ticket, NOTICE_WINDOW};
use crate::router::Route;

pub use card::{Card, CardIntent};
pub use create::CreateView;
pub use detail::DetailView;
pub use edit::EditView;
pub use form_view::FormView;
pub use list::ListView;

pub const MISSING_ID: &str = "No valid id was provided";

/// Something the host must do on a view's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one gateway call and feed its `Outcome` back to the view.
    Call(Call),
    /// Ask the user; feed the answer back through `confirmed`.
    Confirm(Confirmation),
    Navigate(Route),
    /// One-shot notification that does not belong to any view's state.
    Alert(String),
    /// Report `ticket` back through `notice_expired` after `delay`.
    ClearNoticeAfter { ticket: Ticket, delay: Duration },
}

/// A yes/no question and the action it guards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub prompt: String,
    pub action: Confirmable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmable {
    Delete { id: String, nombre: String },
    /// Leave a form without saving.
    Discard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Tunables shared by all screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSettings {
    pub notice_window: Duration,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            notice_window: NOTICE_WINDOW,
        }
    }
}

/// The view mounted for a route.
#[derive(Debug)]
pub enum Screen {
    List(ListView),
    Detail(DetailView),
    Create(CreateView),
    Edit(EditView),
}

impl Screen {
    pub fn mount(route: &Route, settings: &ViewSettings) -> Screen {
        match route {
            Route::List => Screen::List(ListView::new(settings.notice_window)),
            Route::Create => Screen::Create(CreateView::new()),
            Route::Detail(id) => Screen::Detail(DetailView::new(id.clone())),
            Route::Edit(id) => Screen::Edit(EditView::new(id.clone())),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Screen::List(_) => Route::List,
            Screen::Create(_) => Route::Create,
            Screen::Detail(view) => Route::Detail(view.id().map(str::to_string)),
            Screen::Edit(view) => Route::Edit(view.id().map(str::to_string)),
        }
    }

    pub fn enter(&mut self) -> Vec<Effect> {
        match self {
            Screen::List(view) => view.enter(),
            Screen::Detail(view) => view.enter(),
            Screen::Create(_) => Vec::new(),
            Screen::Edit(view) => view.enter(),
        }
    }

    pub fn on_outcome(&mut self, outcome: Outcome) -> Vec<Effect> {
        match self {
            Screen::List(view) => view.on_outcome(outcome),
            Screen::Detail(view) => view.on_outcome(outcome),
            Screen::Create(view) => view.on_outcome(outcome),
            Screen::Edit(view) => view.on_outcome(outcome),
        }
    }

    pub fn confirmed(&mut self, action: Confirmable, accepted: bool) -> Vec<Effect> {
        match self {
            Screen::List(view) => view.confirmed(action, accepted),
            Screen::Detail(view) => view.confirmed(action, accepted),
            Screen::Create(view) => view.confirmed(action, accepted),
            Screen::Edit(view) => view.confirmed(action, accepted),
        }
    }

    pub fn notice_expired(&mut self, ticket: Ticket) {
        if let Screen::List(view) = self {
            view.notice_expired(ticket);
        }
    }
}
