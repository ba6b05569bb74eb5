//! Recognition session: pumps engine events into a stream of finalized
//! transcripts.
//!
//! The session owns the restart policy. Engines end or fail constantly in
//! normal use (silence timeouts, transient device errors), so the pump
//! restarts the backend after a short delay. No-speech timeouts and clean
//! ends restart for free; real engine errors draw down a bounded restart
//! budget, and exhausting it closes the stream with a recorded error
//! instead of looping forever.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use finsee_core::config::SpeechConfig;
use finsee_core::types::Transcript;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::SpeechError;

/// Why the engine stopped recognizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionError {
    /// Silence timeout. Routine, restart is free.
    NoSpeech,
    /// Microphone permission denied.
    NotAllowed,
    /// Anything else the engine reports.
    Engine(String),
}

/// Event emitted by a recognition backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionEvent {
    /// Partial hypothesis, subject to revision. Never forwarded.
    Interim(String),
    /// Finalized utterance text.
    Final(String),
    Error(RecognitionError),
    /// The engine stopped cleanly.
    Ended,
}

/// Platform speech-to-text engine.
#[async_trait]
pub trait RecognitionBackend: Send + Sync {
    /// Begin a recognition run, yielding its event stream.
    ///
    /// Returns [`SpeechError::CapabilityAbsent`] when the platform has no
    /// speech engine.
    async fn start(&self) -> Result<mpsc::Receiver<RecognitionEvent>, SpeechError>;

    /// Ask the engine to stop the current run.
    async fn stop(&self);
}

/// Stream of finalized transcripts from a listening session.
pub type TranscriptStream = mpsc::Receiver<Transcript>;

/// A listening session over a recognition backend.
pub struct RecognizerSession {
    backend: Arc<dyn RecognitionBackend>,
    config: SpeechConfig,
    running: Arc<AtomicBool>,
    interim_count: Arc<AtomicU64>,
    last_error: Arc<Mutex<Option<SpeechError>>>,
    pump: Mutex<Option<JoinHandle<()>>>,
}

impl RecognizerSession {
    pub fn new(backend: Arc<dyn RecognitionBackend>, config: SpeechConfig) -> Self {
        Self {
            backend,
            config,
            running: Arc::new(AtomicBool::new(false)),
            interim_count: Arc::new(AtomicU64::new(0)),
            last_error: Arc::new(Mutex::new(None)),
            pump: Mutex::new(None),
        }
    }

    /// Start listening. The returned stream carries only finalized results.
    pub async fn start_listening(&self) -> Result<TranscriptStream, SpeechError> {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(SpeechError::AlreadyListening);
        }
        *self.last_error.lock().expect("error slot poisoned") = None;

        let first_run = match self.backend.start().await {
            Ok(events) => events,
            Err(err) => {
                self.running.store(false, Ordering::SeqCst);
                return Err(err);
            }
        };

        let (tx, rx) = mpsc::channel(self.config.transcript_buffer);
        let handle = tokio::spawn(pump(
            Arc::clone(&self.backend),
            tx,
            first_run,
            Arc::clone(&self.running),
            Arc::clone(&self.interim_count),
            Arc::clone(&self.last_error),
            Duration::from_millis(self.config.restart_delay_ms),
            self.config.max_restarts,
        ));
        *self.pump.lock().expect("pump slot poisoned") = Some(handle);
        tracing::info!("Recognition session started");
        Ok(rx)
    }

    /// Stop listening. Idempotent; after this resolves no further
    /// transcripts are delivered.
    pub async fn stop_listening(&self) {
        if !self.running.swap(false, Ordering::SeqCst) {
            return;
        }
        self.backend.stop().await;
        if let Some(handle) = self.pump.lock().expect("pump slot poisoned").take() {
            handle.abort();
        }
        tracing::info!("Recognition session stopped");
    }

    pub fn is_listening(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Number of interim hypotheses heard and discarded.
    pub fn interim_heard(&self) -> u64 {
        self.interim_count.load(Ordering::SeqCst)
    }

    /// The error that closed the stream, if any.
    pub fn last_error(&self) -> Option<SpeechError> {
        self.last_error
            .lock()
            .expect("error slot poisoned")
            .take()
    }
}

#[allow(clippy::too_many_arguments)]
async fn pump(
    backend: Arc<dyn RecognitionBackend>,
    tx: mpsc::Sender<Transcript>,
    mut events: mpsc::Receiver<RecognitionEvent>,
    running: Arc<AtomicBool>,
    interim_count: Arc<AtomicU64>,
    last_error: Arc<Mutex<Option<SpeechError>>>,
    restart_delay: Duration,
    max_restarts: u32,
) {
    let mut restarts_left = max_restarts;
    loop {
        while let Some(event) = events.recv().await {
            if !running.load(Ordering::SeqCst) {
                return;
            }
            match event {
                RecognitionEvent::Interim(text) => {
                    interim_count.fetch_add(1, Ordering::SeqCst);
                    tracing::trace!(text, "Interim result discarded");
                }
                RecognitionEvent::Final(text) => {
                    let transcript = Transcript::new(text);
                    if transcript.is_empty() {
                        continue;
                    }
                    tracing::debug!(text = transcript.as_str(), "Final transcript");
                    if tx.send(transcript).await.is_err() {
                        running.store(false, Ordering::SeqCst);
                        return;
                    }
                }
                RecognitionEvent::Error(RecognitionError::NoSpeech) => {
                    tracing::debug!("No speech detected, restarting");
                    break;
                }
                RecognitionEvent::Error(err) => {
                    if restarts_left == 0 {
                        tracing::error!(?err, max_restarts, "Recognition restart budget exhausted");
                        *last_error.lock().expect("error slot poisoned") =
                            Some(SpeechError::RestartsExhausted(max_restarts));
                        running.store(false, Ordering::SeqCst);
                        return;
                    }
                    restarts_left -= 1;
                    tracing::warn!(?err, restarts_left, "Recognition error, restarting");
                    break;
                }
                RecognitionEvent::Ended => {
                    tracing::debug!("Recognition run ended, restarting");
                    break;
                }
            }
        }

        if !running.load(Ordering::SeqCst) {
            return;
        }
        tokio::time::sleep(restart_delay).await;
        if !running.load(Ordering::SeqCst) {
            return;
        }

        events = match backend.start().await {
            Ok(events) => events,
            Err(err) => {
                tracing::error!(%err, "Recognition backend failed to restart");
                *last_error.lock().expect("error slot poisoned") = Some(err);
                running.store(false, Ordering::SeqCst);
                return;
            }
        };
    }
}

// =============================================================================
// Tests
// =============================================================================
