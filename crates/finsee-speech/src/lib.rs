//! Speech I/O adapters for FinSee.
//!
//! Recognition and synthesis engines live behind traits; the session and
//! queue types own the policy (restart budget, priority preemption) that
//! the engines themselves do not provide.

pub mod error;
pub mod recognizer;
pub mod synthesizer;
pub mod testing;

pub use error::SpeechError;
pub use recognizer::{
    RecognitionBackend, RecognitionError, RecognitionEvent, RecognizerSession, TranscriptStream,
};
pub use synthesizer::{SpeechQueue, SynthesisBackend};
