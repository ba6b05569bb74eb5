//! Authentication seam for confirmed payments.
//!
//! The dialogue session never authenticates by itself. When a transfer is
//! confirmed it emits a `RequestAuth` effect and the driver runs an
//! [`Authenticator`], feeding the outcome back into the session. The stock
//! implementation is a fixed-code check, a stand-in for a real credential
//! flow behind the same trait.

use async_trait::async_trait;

/// Demo authentication code accepted by [`CodeAuthenticator::new`].
pub const DEFAULT_AUTH_CODE: &str = "12345";

/// Result of an authentication attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The user proved their identity; the transaction may proceed.
    Success,
    /// The user abandoned authentication; fields are kept for another try.
    Cancelled,
}

/// Authenticates a confirmed payment of `amount`.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, amount: &str) -> AuthOutcome;
}

/// Source of authentication codes, typically a UI prompt.
///
/// Returning `None` means the user dismissed the prompt.
#[async_trait]
pub trait CodePrompt: Send + Sync {
    async fn request_code(&self, amount: &str) -> Option<String>;
}

/// Fixed-code authenticator. Wrong codes reprompt until the user gives the
/// right code or dismisses the prompt.
pub struct CodeAuthenticator<P> {
    prompt: P,
    expected: String,
}

impl<P: CodePrompt> CodeAuthenticator<P> {
    /// Authenticator accepting [`DEFAULT_AUTH_CODE`].
    pub fn new(prompt: P) -> Self {
        Self::with_code(prompt, DEFAULT_AUTH_CODE)
    }

    pub fn with_code(prompt: P, expected: impl Into<String>) -> Self {
        Self {
            prompt,
            expected: expected.into(),
        }
    }
}

#[async_trait]
impl<P: CodePrompt> Authenticator for CodeAuthenticator<P> {
    async fn authenticate(&self, amount: &str) -> AuthOutcome {
        loop {
            match self.prompt.request_code(amount).await {
                None => {
                    tracing::info!(amount, "Authentication dismissed");
                    return AuthOutcome::Cancelled;
                }
                Some(code) if code == self.expected => {
                    tracing::info!(amount, "Authentication succeeded");
                    return AuthOutcome::Success;
                }
                Some(_) => {
                    tracing::debug!(amount, "Wrong authentication code, reprompting");
                }
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
