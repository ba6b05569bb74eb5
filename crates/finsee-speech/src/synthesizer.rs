//! Speech synthesis queue.
//!
//! A single worker owns the synthesis backend, so exactly one utterance is
//! audible at a time. Normal utterances queue FIFO behind whatever is
//! playing; a priority utterance cancels the in-flight one, drops the
//! queue, and plays immediately.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::SpeechError;

/// Platform text-to-speech engine. `speak` resolves when the utterance has
/// finished playing; dropping the future mid-flight silences it.
#[async_trait]
pub trait SynthesisBackend: Send + Sync {
    async fn speak(&self, text: &str) -> Result<(), SpeechError>;

    /// Stop whatever is currently playing.
    async fn cancel(&self);
}

enum Command {
    Speak(String),
    Priority(String),
}

/// Handle to the synthesis worker.
#[derive(Clone)]
pub struct SpeechQueue {
    tx: mpsc::Sender<Command>,
}

impl SpeechQueue {
    /// Spawn the worker that owns `backend`.
    pub fn new(backend: Arc<dyn SynthesisBackend>, buffer: usize) -> Self {
        let (tx, rx) = mpsc::channel(buffer);
        tokio::spawn(worker(backend, rx));
        Self { tx }
    }

    /// Queue an utterance behind whatever is playing.
    pub async fn speak(&self, text: impl Into<String>) -> Result<(), SpeechError> {
        self.tx
            .send(Command::Speak(text.into()))
            .await
            .map_err(|_| SpeechError::QueueClosed)
    }

    /// Cancel current speech and the queue, then speak immediately.
    pub async fn speak_priority(&self, text: impl Into<String>) -> Result<(), SpeechError> {
        self.tx
            .send(Command::Priority(text.into()))
            .await
            .map_err(|_| SpeechError::QueueClosed)
    }
}

async fn worker(backend: Arc<dyn SynthesisBackend>, mut rx: mpsc::Receiver<Command>) {
    let mut queue: VecDeque<String> = VecDeque::new();
    loop {
        let text = match queue.pop_front() {
            Some(text) => text,
            None => match rx.recv().await {
                Some(Command::Speak(text)) => text,
                Some(Command::Priority(text)) => text,
                None => return,
            },
        };

        tracing::debug!(text, "Speaking");
        let speak = backend.speak(&text);
        tokio::pin!(speak);
        loop {
            tokio::select! {
                result = &mut speak => {
                    if let Err(err) = result {
                        tracing::warn!(%err, "Utterance failed");
                    }
                    break;
                }
                command = rx.recv() => match command {
                    Some(Command::Speak(queued)) => queue.push_back(queued),
                    Some(Command::Priority(urgent)) => {
                        // Dropping `speak` silences the in-flight utterance.
                        backend.cancel().await;
                        queue.clear();
                        queue.push_front(urgent);
                        break;
                    }
                    None => return,
                },
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
