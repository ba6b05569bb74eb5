//! Per-screen dialogue management for FinSee.
//!
//! A [`DialogueSession`] consumes finalized transcripts and emits the
//! [`Effect`]s a shell must perform. The session is the only holder of
//! dialogue state; speech and intent stay stateless around it.

pub mod auth;
pub mod contacts;
pub mod session;
pub mod state;

pub use auth::{AuthOutcome, Authenticator, CodeAuthenticator, CodePrompt, DEFAULT_AUTH_CODE};
pub use contacts::{ContactBook, CONTACTS};
pub use session::{DialogueSession, Effect, BALANCE_ANNOUNCEMENT};
pub use state::{DialogueState, SessionPhase};
