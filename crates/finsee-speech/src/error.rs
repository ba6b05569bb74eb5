//! Speech adapter errors.

use finsee_core::error::FinseeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpeechError {
    /// The platform has no speech engine. Callers fall back to manual input.
    #[error("Speech recognition is not available on this platform")]
    CapabilityAbsent,

    /// The recognizer hit its engine-error restart budget.
    #[error("Recognition gave up after {0} restarts")]
    RestartsExhausted(u32),

    /// `start_listening` called while a session is already running.
    #[error("Already listening")]
    AlreadyListening,

    /// The synthesis worker is gone.
    #[error("Speech queue closed")]
    QueueClosed,

    /// The synthesis backend failed to render an utterance.
    #[error("Synthesis failed: {0}")]
    Synthesis(String),
}

impl From<SpeechError> for FinseeError {
    fn from(err: SpeechError) -> Self {
        FinseeError::Speech(err.to_string())
    }
}
