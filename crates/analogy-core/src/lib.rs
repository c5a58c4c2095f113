//! Analogy Core Library
//!
//! Domain model, prompt construction, the language-model provider client,
//! share-link helpers and the client form handler for the analogy generator.

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod prompt;
pub mod provider;
pub mod share;

pub use error::{AnalogyError, AnalogyResult};
