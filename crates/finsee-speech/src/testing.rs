//! In-memory backends for exercising the speech adapters without a real
//! engine. Used by this crate's tests and by downstream integration tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::SpeechError;
use crate::recognizer::{RecognitionBackend, RecognitionEvent};
use crate::synthesizer::SynthesisBackend;

/// Recognition backend that replays scripted runs.
///
/// Each `start` pops the next run and delivers its events. When the script
/// runs out, `start` yields a channel that stays open and silent, so the
/// pump parks instead of spinning through restarts.
pub struct ScriptedRecognition {
    runs: Mutex<VecDeque<Vec<RecognitionEvent>>>,
    parked: Mutex<Vec<mpsc::Sender<RecognitionEvent>>>,
}

impl ScriptedRecognition {
    pub fn new(runs: Vec<Vec<RecognitionEvent>>) -> Self {
        Self {
            runs: Mutex::new(runs.into()),
            parked: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl RecognitionBackend for ScriptedRecognition {
    async fn start(&self) -> Result<mpsc::Receiver<RecognitionEvent>, SpeechError> {
        let run = self.runs.lock().expect("runs poisoned").pop_front();
        match run {
            Some(events) => {
                let (tx, rx) = mpsc::channel(events.len().max(1));
                tokio::spawn(async move {
                    for event in events {
                        if tx.send(event).await.is_err() {
                            return;
                        }
                    }
                });
                Ok(rx)
            }
            None => {
                let (tx, rx) = mpsc::channel(1);
                self.parked.lock().expect("parked poisoned").push(tx);
                Ok(rx)
            }
        }
    }

    async fn stop(&self) {
        // Dropping the held senders closes any parked run.
        self.parked.lock().expect("parked poisoned").clear();
    }
}

/// Recognition backend for platforms without speech support.
pub struct UnsupportedRecognition;

#[async_trait]
impl RecognitionBackend for UnsupportedRecognition {
    async fn start(&self) -> Result<mpsc::Receiver<RecognitionEvent>, SpeechError> {
        Err(SpeechError::CapabilityAbsent)
    }

    async fn stop(&self) {}
}

/// Synthesis backend that records utterances instead of playing them.
///
/// `speak` takes `delay` of wall time per utterance; only utterances that
/// play to completion land in `completed`, so a preempted utterance is
/// visible as started-but-not-completed.
pub struct RecordingSynthesis {
    delay: Duration,
    started: Mutex<Vec<String>>,
    completed: Mutex<Vec<String>>,
    cancels: AtomicU32,
}

impl RecordingSynthesis {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            started: Mutex::new(Vec::new()),
            completed: Mutex::new(Vec::new()),
            cancels: AtomicU32::new(0),
        }
    }

    /// Utterances that began playing, in order.
    pub fn started(&self) -> Vec<String> {
        self.started.lock().expect("started poisoned").clone()
    }

    /// Utterances that played to completion, in order.
    pub fn completed(&self) -> Vec<String> {
        self.completed.lock().expect("completed poisoned").clone()
    }

    pub fn cancel_count(&self) -> u32 {
        self.cancels.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SynthesisBackend for RecordingSynthesis {
    async fn speak(&self, text: &str) -> Result<(), SpeechError> {
        self.started
            .lock()
            .expect("started poisoned")
            .push(text.to_string());
        tokio::time::sleep(self.delay).await;
        self.completed
            .lock()
            .expect("completed poisoned")
            .push(text.to_string());
        Ok(())
    }

    async fn cancel(&self) {
        self.cancels.fetch_add(1, Ordering::SeqCst);
    }
}
