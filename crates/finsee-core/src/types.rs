//! Shared domain types for the FinSee system.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A finalized speech-to-text result for one utterance.
///
/// Produced by the speech adapter when the recognition engine finalizes a
/// result. Interim (partial) results never become a `Transcript`. The original
/// casing is preserved for display; matching always goes through
/// [`Transcript::normalized`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript(String);

impl Transcript {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The transcript exactly as the engine produced it.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased, whitespace-trimmed form used for command matching.
    pub fn normalized(&self) -> String {
        self.0.trim().to_lowercase()
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Transcript {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Who produced a message in the on-screen conversation log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

/// One entry in the on-screen conversation log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub speaker: Speaker,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Append-only log of the conversation shown on a screen.
///
/// Display-only: never truncated, never persisted, discarded with the screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranscriptLog {
    messages: Vec<Message>,
}

impl TranscriptLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// The banking screens a dialogue session can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Home,
    BankTransfer,
    PayContacts,
    PayPhone,
    CheckBalance,
    ScanQr,
    Assistant,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Home => "home",
            Screen::BankTransfer => "bank-transfer",
            Screen::PayContacts => "pay-contacts",
            Screen::PayPhone => "pay-phone",
            Screen::CheckBalance => "check-balance",
            Screen::ScanQr => "scan-qr",
            Screen::Assistant => "assistant",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_normalized() {
        let t = Transcript::new("  Transfer 100 Dollars  ");
        assert_eq!(t.normalized(), "transfer 100 dollars");
        assert_eq!(t.as_str(), "  Transfer 100 Dollars  ");
    }

    #[test]
    fn test_transcript_empty() {
        assert!(Transcript::new("   ").is_empty());
        assert!(!Transcript::new("hi").is_empty());
    }

    #[test]
    fn test_message_constructors() {
        let m = Message::user("hello");
        assert_eq!(m.speaker, Speaker::User);
        let m = Message::assistant("hi there");
        assert_eq!(m.speaker, Speaker::Assistant);
        assert_eq!(m.text, "hi there");
    }

    #[test]
    fn test_transcript_log_append_only() {
        let mut log = TranscriptLog::new();
        assert!(log.is_empty());
        log.push(Message::user("one"));
        log.push(Message::assistant("two"));
        assert_eq!(log.len(), 2);
        assert_eq!(log.messages()[0].text, "one");
        assert_eq!(log.messages()[1].text, "two");
    }

    #[test]
    fn test_speaker_serde_lowercase() {
        let json = serde_json::to_string(&Speaker::User).unwrap();
        assert_eq!(json, "\"user\"");
        let json = serde_json::to_string(&Speaker::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
    }

    #[test]
    fn test_screen_display() {
        assert_eq!(Screen::BankTransfer.to_string(), "bank-transfer");
        assert_eq!(Screen::Home.to_string(), "home");
    }
}
