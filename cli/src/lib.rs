//! Terminal client for the animales API.
//!
//! # Design
//! The screens live in `animales-core` and never do I/O. This crate is the
//! host: it parses commands, prints screens, asks confirmations on the
//! prompt, runs gateway calls over reqwest and fires the notice timers.

pub mod app;
pub mod command;
pub mod config;
pub mod logging;
pub mod render;
pub mod runtime;
pub mod transport;

pub use app::App;
pub use config::Config;
pub use transport::ReqwestTransport;
