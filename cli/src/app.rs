//! Host-side state: the mounted screen, its generation, and the pending
//! confirmation.
//!
//! # Design
//! `App` is synchronous. It turns input lines, gateway outcomes and timer
//! expiries into `Task`s that the runtime performs. Every navigation mounts
//! a fresh screen under a new generation; outcomes and timers carry the
//! generation that started them and are dropped when it is no longer
//! current, so a late response never touches a screen the user has left.

use std::time::Duration;

use animales_core::views::{Card, Confirmation, ListView};
use animales_core::{Call, Effect, Outcome, Route, Screen, Ticket, ViewSettings};

use crate::command::{self, Command, HELP};
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Generation(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    Call {
        generation: Generation,
        call: Call,
    },
    Timer {
        generation: Generation,
        ticket: Ticket,
        delay: Duration,
    },
    Print(String),
    Quit,
}

#[derive(Debug)]
pub struct App {
    screen: Screen,
    generation: Generation,
    settings: ViewSettings,
    pending: Option<Confirmation>,
}

impl App {
    pub fn new(route: &Route, settings: ViewSettings) -> Self {
        Self {
            screen: Screen::mount(route, &settings),
            generation: Generation(0),
            settings,
            pending: None,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn pending_confirmation(&self) -> Option<&Confirmation> {
        self.pending.as_ref()
    }

    /// Enter the initial screen.
    pub fn start(&mut self) -> Vec<Task> {
        let effects = self.screen.enter();
        self.apply(effects)
    }

    pub fn handle_line(&mut self, line: &str) -> Vec<Task> {
        if let Some(confirmation) = self.pending.take() {
            let accepted = command::parse_answer(line);
            tracing::debug!(accepted, prompt = %confirmation.prompt, "confirmation answered");
            let effects = self.screen.confirmed(confirmation.action, accepted);
            return self.apply(effects);
        }
        match command::parse(line) {
            Ok(command) => self.handle_command(command),
            Err(err) => vec![Task::Print(err.to_string())],
        }
    }

    pub fn handle_outcome(&mut self, generation: Generation, outcome: Outcome) -> Vec<Task> {
        if generation != self.generation {
            tracing::debug!(?generation, current = ?self.generation, "dropping stale outcome");
            return Vec::new();
        }
        let effects = self.screen.on_outcome(outcome);
        self.apply(effects)
    }

    pub fn handle_timer(&mut self, generation: Generation, ticket: Ticket) -> Vec<Task> {
        if generation != self.generation {
            return Vec::new();
        }
        self.screen.notice_expired(ticket);
        self.apply(Vec::new())
    }

    fn handle_command(&mut self, command: Command) -> Vec<Task> {
        let route = self.screen.route();
        let effects = match (&mut self.screen, command) {
            (_, Command::Help) => return vec![Task::Print(HELP.to_string())],
            (_, Command::Quit) => return vec![Task::Quit],
            (_, Command::Go(path)) => vec![Effect::Navigate(Route::parse(&path))],

            (Screen::Detail(view), Command::List) => view.back(),
            (_, Command::List) => vec![Effect::Navigate(Route::List)],
            (Screen::List(view), Command::New) => view.create(),
            (_, Command::New) => vec![Effect::Navigate(Route::Create)],

            (Screen::List(view), Command::Show(Some(reference))) => {
                match find_card(view, &reference).and_then(|c| c.view()) {
                    Some(intent) => view.on_card(intent),
                    None => return not_found(&reference),
                }
            }
            (Screen::List(view), Command::Edit(Some(reference))) => {
                match find_card(view, &reference).and_then(|c| c.edit()) {
                    Some(intent) => view.on_card(intent),
                    None => return not_found(&reference),
                }
            }
            (Screen::List(view), Command::Delete(Some(reference))) => {
                match find_card(view, &reference).and_then(|c| c.delete()) {
                    Some(intent) => view.on_card(intent),
                    None => return not_found(&reference),
                }
            }
            (Screen::Detail(view), Command::Edit(None)) => view.edit(),
            (Screen::Detail(view), Command::Delete(None)) => view.request_delete(),
            (_, Command::Show(Some(id))) => vec![Effect::Navigate(Route::detail(id))],
            (_, Command::Edit(Some(id))) => vec![Effect::Navigate(Route::edit(id))],

            (Screen::Create(view), Command::Set(field, value)) => {
                view.set(field, value);
                Vec::new()
            }
            (Screen::Edit(view), Command::Set(field, value)) => {
                view.set(field, value);
                Vec::new()
            }
            (Screen::Create(view), Command::Submit) => view.submit(),
            (Screen::Edit(view), Command::Submit) => view.submit(),
            (Screen::Create(view), Command::Cancel) => view.cancel(),
            (Screen::Edit(view), Command::Cancel) => view.cancel(),

            (_, command) => {
                return vec![Task::Print(format!(
                    "'{command:?}' does not apply on {route}"
                ))]
            }
        };
        self.apply(effects)
    }

    /// Perform view effects, then show the resulting screen (or prompt).
    fn apply(&mut self, effects: Vec<Effect>) -> Vec<Task> {
        let mut tasks = Vec::new();
        let mut queue = effects;
        while !queue.is_empty() {
            let mut next = Vec::new();
            for effect in queue {
                match effect {
                    Effect::Call(call) => tasks.push(Task::Call {
                        generation: self.generation,
                        call,
                    }),
                    Effect::ClearNoticeAfter { ticket, delay } => tasks.push(Task::Timer {
                        generation: self.generation,
                        ticket,
                        delay,
                    }),
                    Effect::Alert(text) => tasks.push(Task::Print(format!("** {text}"))),
                    Effect::Confirm(confirmation) => {
                        if self.pending.is_none() {
                            self.pending = Some(confirmation);
                        }
                    }
                    Effect::Navigate(route) => {
                        next.extend(self.navigate(&route));
                    }
                }
            }
            queue = next;
        }
        tasks.push(Task::Print(self.display()));
        tasks
    }

    fn navigate(&mut self, route: &Route) -> Vec<Effect> {
        tracing::debug!(%route, "navigating");
        self.generation = Generation(self.generation.0 + 1);
        self.pending = None;
        self.screen = Screen::mount(route, &self.settings);
        self.screen.enter()
    }

    fn display(&self) -> String {
        match &self.pending {
            Some(confirmation) => format!("{} [y/N]", confirmation.prompt),
            None => render::render(&self.screen),
        }
    }
}

/// Resolve a list reference: a 1-based position, else an id.
fn find_card<'a>(view: &'a ListView, reference: &str) -> Option<Card<'a>> {
    let by_position = reference
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| view.cards().nth(i));
    by_position.or_else(|| {
        view.cards()
            .find(|c| c.animal().id.as_deref() == Some(reference))
    })
}

fn not_found(reference: &str) -> Vec<Task> {
    vec![Task::Print(format!("no animal '{reference}' in the list"))]
}
