//! Financial advisor integration for FinSee.
//!
//! Free-form questions from the assistant screen go to a hosted chat model
//! behind the [`CompletionClient`] trait; [`GroqClient`] is the production
//! implementation.

pub mod client;
pub mod error;
pub mod persona;

pub use client::{CompletionClient, GroqClient};
pub use error::AdvisorError;
