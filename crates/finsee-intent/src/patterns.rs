//! Regex-based command grammars, compiled once and matched in a fixed order.
//!
//! `interpret` is a total function: every transcript resolves to exactly one
//! [`Intent`], with `Unknown` as the explicit no-rule-matched case. Rules are
//! checked in a deliberate order - cancel and help are global and win over
//! everything, screen-specific rules come next, confirm/status/back-navigation
//! close the list.

use finsee_core::types::{Screen, Transcript};
use regex::Regex;

use crate::banks::match_bank;
use crate::navigation::NavigationRegistry;
use crate::types::{Field, Intent};

/// Compiled grammar for all screens.
pub struct CommandGrammar {
    bank_threshold: f64,
    nav: NavigationRegistry,

    re_cancel: Regex,
    re_help: Regex,
    re_confirm: Regex,
    re_status: Regex,
    re_wake: Regex,
    re_go_home: Regex,
    re_balance: Regex,

    re_transfer_full: Regex,
    re_amount: Regex,
    re_bank: Regex,
    re_account: Regex,
    re_phone: Regex,
    re_search: Regex,
    re_select: Regex,
}

impl Default for CommandGrammar {
    fn default() -> Self {
        Self::new(0.84)
    }
}

impl CommandGrammar {
    /// Compile the grammar. `bank_threshold` is the minimum similarity for
    /// fuzzy bank matching (see [`crate::banks::match_bank`]).
    pub fn new(bank_threshold: f64) -> Self {
        // Patterns are fixed string literals; compilation cannot fail.
        let re = |p: &str| Regex::new(p).expect("invalid grammar regex");

        Self {
            bank_threshold,
            nav: NavigationRegistry::with_default_routes(),

            re_cancel: re(r"\b(?:cancel|stop)\b"),
            re_help: re(r"\bhelp\b"),
            re_confirm: re(r"\b(?:confirm|yes|correct)\b"),
            re_status: re(r"\bstatus\b"),
            re_wake: re(r"\b(?:hey bot|hay bot|hey board)\b"),
            re_go_home: re(r"\b(?:go back|go home|home)\b"),
            re_balance: re(r"\bbalance\b"),

            re_transfer_full: re(
                r"\b(?:transfer|send)\s+(?:rs\.?\s*)?(\d+(?:\.\d+)?)\s*(?:dollars?|rupees?|rs|bucks)?\s+to\s+(.+?)\s+account(?:\s+number)?\s+(\d[\d\s]*)$",
            ),
            re_amount: re(r"\bamount\s+(?:is\s+)?(?:rs\.?\s*|rupees\s+)?(\d+(?:\.\d+)?)\b"),
            re_bank: re(r"\bbank\s+(?:is\s+)?(.+)$"),
            re_account: re(r"\baccount(?:\s+number)?\s+(?:is\s+)?(\d[\d\s]*)\b"),
            re_phone: re(r"\b(?:phone|mobile)(?:\s+number)?\s+(?:is\s+)?(\+?\d[\d\s-]{4,})"),
            re_search: re(r"\bsearch\s+(?:for\s+)?(.+)$"),
            re_select: re(r"\bselect\s+(.+)$"),
        }
    }

    /// Navigation registry used for home-screen commands.
    pub fn navigation(&self) -> &NavigationRegistry {
        &self.nav
    }

    /// Map a finalized transcript to an intent for the given screen.
    pub fn interpret(&self, transcript: &Transcript, screen: Screen) -> Intent {
        let text = transcript.normalized();
        if text.is_empty() {
            return Intent::Unknown;
        }

        // Global escape hatches win over everything else.
        if self.re_cancel.is_match(&text) {
            return Intent::Cancel;
        }
        if self.re_help.is_match(&text) {
            return Intent::Help;
        }

        if let Some(intent) = self.interpret_screen(&text, screen) {
            return intent;
        }

        if self.re_confirm.is_match(&text) {
            return Intent::Confirm;
        }
        if self.re_status.is_match(&text) {
            return Intent::Status;
        }
        if screen != Screen::Home && self.re_go_home.is_match(&text) {
            return Intent::Navigate(Screen::Home);
        }

        Intent::Unknown
    }

    fn interpret_screen(&self, text: &str, screen: Screen) -> Option<Intent> {
        match screen {
            Screen::Home => {
                if self.re_wake.is_match(text) {
                    return Some(Intent::Navigate(Screen::Assistant));
                }
                self.nav
                    .resolve(text)
                    .map(|dest| Intent::Navigate(dest.screen))
            }
            Screen::BankTransfer => self.interpret_transfer(text),
            Screen::PayContacts => {
                if let Some(caps) = self.re_search.captures(text) {
                    return Some(Intent::SearchContact(caps[1].trim().to_string()));
                }
                if let Some(caps) = self.re_select.captures(text) {
                    return Some(Intent::SelectContact(caps[1].trim().to_string()));
                }
                self.capture_amount(text)
            }
            Screen::PayPhone => {
                if let Some(caps) = self.re_phone.captures(text) {
                    let digits: String = caps[1].chars().filter(|c| c.is_ascii_digit()).collect();
                    return Some(Intent::SetField(Field::PhoneNumber, digits));
                }
                self.capture_amount(text)
            }
            Screen::CheckBalance | Screen::Assistant => {
                if self.re_balance.is_match(text) {
                    return Some(Intent::Status);
                }
                None
            }
            Screen::ScanQr => None,
        }
    }

    fn interpret_transfer(&self, text: &str) -> Option<Intent> {
        // The full statement resolves wholly or not at all: a transfer
        // sentence with an unrecognizable bank must not degrade into a
        // partial field set.
        if let Some(caps) = self.re_transfer_full.captures(text) {
            let amount = caps[1].to_string();
            let account: String = caps[3].chars().filter(|c| c.is_ascii_digit()).collect();
            return match match_bank(&caps[2], self.bank_threshold) {
                Some(bank) => Some(Intent::SetTransfer {
                    amount,
                    bank: bank.to_string(),
                    account,
                }),
                None => {
                    tracing::debug!(fragment = &caps[2], "Bank not recognized in transfer statement");
                    Some(Intent::Unknown)
                }
            };
        }

        if let Some(intent) = self.capture_amount(text) {
            return Some(intent);
        }
        if let Some(caps) = self.re_bank.captures(text) {
            // Try the whole match first so "bank of america" is not split at
            // its own keyword, then the captured remainder ("bank chase").
            let resolved =
                match_bank(&caps[0], self.bank_threshold).or_else(|| match_bank(&caps[1], self.bank_threshold));
            return Some(match resolved {
                Some(bank) => Intent::SetField(Field::Bank, bank.to_string()),
                None => Intent::Unknown,
            });
        }
        if let Some(caps) = self.re_account.captures(text) {
            let digits: String = caps[1].chars().filter(|c| c.is_ascii_digit()).collect();
            return Some(Intent::SetField(Field::AccountNumber, digits));
        }
        None
    }

    fn capture_amount(&self, text: &str) -> Option<Intent> {
        self.re_amount
            .captures(text)
            .map(|caps| Intent::SetField(Field::Amount, caps[1].to_string()))
    }
}
