//! API client core and screen logic for the animales service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and models every screen of
//! the client as a state machine that returns `Effect`s instead of doing
//! I/O. The host supplies a `Transport`, runs the calls, asks the
//! confirmations and drives the timers.
//!
//! # Design
//! - `AnimalClient` is stateless; it holds only the collection URL.
//! - `Gateway` pairs it with a host `Transport` and is the only place a
//!   request is ever sent from.
//! - Screens (`views`) own their display state and nothing else; they are
//!   composed only through `Route` navigation.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod form;
pub mod gateway;
pub mod http;
pub mod notice;
pub mod router;
pub mod types;
pub mod views;

pub use client::AnimalClient;
pub use error::ApiError;
pub use form::{AnimalForm, ErrorMessages, Field, FieldError, Validator};
pub use gateway::{Call, Gateway, Outcome, Transport};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use notice::{Ticket, NOTICE_WINDOW};
pub use router::Route;
pub use types::Animal;
pub use views::{Confirmable, Confirmation, Effect, LoadState, Screen, ViewSettings};
