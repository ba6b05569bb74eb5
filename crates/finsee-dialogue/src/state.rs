//! Dialogue state and the transaction phase machine.
//!
//! Enforces valid phase transitions for a payment session:
//! - Idle -> Collecting (first field captured or payment screen entered)
//! - Collecting -> AwaitingConfirmation (all required fields present)
//! - AwaitingConfirmation -> Collecting (a field is changed)
//! - AwaitingConfirmation -> Authenticating (user confirmed)
//! - Authenticating -> Complete (authentication succeeded)
//! - Authenticating -> Collecting (authentication cancelled, fields kept)
//! - Collecting/AwaitingConfirmation/Authenticating -> Idle (cancel)
//! - Complete -> Idle (session reset)

use std::fmt;

use finsee_core::types::Screen;
use finsee_intent::Field;

/// Phase of the payment session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    /// No transaction in progress.
    Idle,
    /// Gathering required fields for the active screen.
    Collecting,
    /// All fields present, waiting for the user to confirm.
    AwaitingConfirmation,
    /// Confirmation given, authentication in flight.
    Authenticating,
    /// Transaction finished.
    Complete,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionPhase::Idle => write!(f, "Idle"),
            SessionPhase::Collecting => write!(f, "Collecting"),
            SessionPhase::AwaitingConfirmation => write!(f, "AwaitingConfirmation"),
            SessionPhase::Authenticating => write!(f, "Authenticating"),
            SessionPhase::Complete => write!(f, "Complete"),
        }
    }
}

impl SessionPhase {
    /// Returns whether a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: &SessionPhase) -> bool {
        matches!(
            (self, target),
            (SessionPhase::Idle, SessionPhase::Collecting)
                | (SessionPhase::Collecting, SessionPhase::AwaitingConfirmation)
                | (SessionPhase::AwaitingConfirmation, SessionPhase::Collecting)
                | (SessionPhase::AwaitingConfirmation, SessionPhase::Authenticating)
                | (SessionPhase::Authenticating, SessionPhase::Complete)
                | (SessionPhase::Authenticating, SessionPhase::Collecting)
                // Cancel and reset transitions
                | (SessionPhase::Collecting, SessionPhase::Idle)
                | (SessionPhase::AwaitingConfirmation, SessionPhase::Idle)
                | (SessionPhase::Authenticating, SessionPhase::Idle)
                | (SessionPhase::Complete, SessionPhase::Idle)
        )
    }
}

/// Collected field values for the active screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueState {
    pub screen: Screen,
    pub amount: Option<String>,
    pub bank: Option<String>,
    pub account_number: Option<String>,
    pub phone_number: Option<String>,
    pub contact: Option<String>,
}

impl DialogueState {
    /// Empty state for a screen.
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            amount: None,
            bank: None,
            account_number: None,
            phone_number: None,
            contact: None,
        }
    }

    /// Fields a screen requires before it can confirm, in prompt order.
    pub fn required_fields(screen: Screen) -> &'static [Field] {
        match screen {
            Screen::BankTransfer => &[Field::Amount, Field::Bank, Field::AccountNumber],
            Screen::PayPhone => &[Field::PhoneNumber, Field::Amount],
            Screen::PayContacts => &[Field::Contact, Field::Amount],
            _ => &[],
        }
    }

    /// Required fields that are still empty, in prompt order.
    pub fn missing_fields(&self) -> Vec<Field> {
        Self::required_fields(self.screen)
            .iter()
            .copied()
            .filter(|field| self.get(*field).is_none())
            .collect()
    }

    /// Whether every required field for the screen is set.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        let slot = match field {
            Field::Amount => &self.amount,
            Field::Bank => &self.bank,
            Field::AccountNumber => &self.account_number,
            Field::PhoneNumber => &self.phone_number,
            Field::Contact => &self.contact,
        };
        slot.as_deref()
    }

    /// Set a field; a repeated command overwrites, other fields are kept.
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Amount => &mut self.amount,
            Field::Bank => &mut self.bank,
            Field::AccountNumber => &mut self.account_number,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Contact => &mut self.contact,
        };
        *slot = Some(value);
    }

    /// Clear every field, keeping the screen.
    pub fn clear_fields(&mut self) {
        let screen = self.screen;
        *self = Self::new(screen);
    }
}

// =============================================================================
// Tests
// =============================================================================
