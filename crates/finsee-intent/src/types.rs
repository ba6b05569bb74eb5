//! Intent and field types produced by the interpreter.

use std::fmt;

use finsee_core::types::Screen;
use serde::{Deserialize, Serialize};

/// A screen-local field that a voice command can populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Amount,
    Bank,
    AccountNumber,
    PhoneNumber,
    Contact,
}

impl Field {
    /// The name spoken back to the user, e.g. in missing-field prompts.
    pub fn spoken_name(&self) -> &'static str {
        match self {
            Field::Amount => "amount",
            Field::Bank => "bank",
            Field::AccountNumber => "account number",
            Field::PhoneNumber => "phone number",
            Field::Contact => "contact",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spoken_name())
    }
}

/// The interpreted goal of a single transcript.
///
/// Every transcript maps to exactly one variant; a transcript no rule matched
/// is `Unknown`, never a silent fall-through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Navigate to another screen.
    Navigate(Screen),
    /// Set a single screen-local field.
    SetField(Field, String),
    /// The full transfer statement: amount, bank, and account captured
    /// together. Never emitted partially - if any part fails to parse the
    /// whole statement is `Unknown`.
    SetTransfer {
        amount: String,
        bank: String,
        account: String,
    },
    /// Search the contact book by name.
    SearchContact(String),
    /// Select a contact by name.
    SelectContact(String),
    /// Confirm the pending action.
    Confirm,
    /// Cancel and reset the current screen.
    Cancel,
    /// Ask for the available commands.
    Help,
    /// Ask for the current state (balance, collected fields).
    Status,
    /// No rule matched.
    Unknown,
}
