//! A query-bar translator.
//!
//! The library is the plugin: registration metadata, the `tr ` trigger,
//! configuration widgets, and per-query evaluation a launcher host calls
//! into. The `trq` binary is a one-shot reference host around it.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
pub mod state;

pub use domain::error::TrqError;
pub use interfaces::plugin::{QueryContext, QueryToken, TranslatorPlugin};
pub use state::PluginState;
