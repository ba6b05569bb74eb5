//! Core crate for FinSee - shared types, errors, and configuration.

pub mod config;
pub mod error;
pub mod types;
