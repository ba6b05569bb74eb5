//! The dialogue session reducer.
//!
//! `DialogueSession::apply` maps one finalized transcript to a list of
//! [`Effect`]s the shell must perform (speak, navigate, start authentication).
//! The session owns all mutable dialogue state behind a mutex; a transcript
//! arriving while another is being applied is dropped rather than interleaved,
//! so a double "confirm" can never open two authentication flows.

use std::sync::Mutex;

use uuid::Uuid;

use finsee_core::types::{Message, Screen, Transcript, TranscriptLog};
use finsee_intent::{CommandGrammar, Field, Intent};

use crate::auth::AuthOutcome;
use crate::contacts::ContactBook;
use crate::state::{DialogueState, SessionPhase};

/// Fixed demo balance announcement.
pub const BALANCE_ANNOUNCEMENT: &str = "Your bank balance is 5000 rupees";

/// Side effect the shell must perform after applying a transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Queue an utterance.
    Speak(String),
    /// Interrupt current speech and speak immediately.
    SpeakPriority(String),
    /// Switch the visible screen.
    Navigate(Screen),
    /// Run the authenticator for a confirmed payment.
    RequestAuth { amount: String },
    /// The payment went through.
    TransactionComplete { amount: String },
    /// Forward a free-form query to the financial advisor.
    AskAdvisor(String),
}

struct Inner {
    state: DialogueState,
    phase: SessionPhase,
    log: TranscriptLog,
}

impl Inner {
    /// Validated phase change. An invalid request is a bug in the reducer;
    /// it is logged and the phase is left untouched.
    fn set_phase(&mut self, target: SessionPhase) {
        if self.phase == target {
            return;
        }
        if self.phase.can_transition_to(&target) {
            tracing::debug!("Session phase: {} -> {}", self.phase, target);
            self.phase = target;
        } else {
            tracing::warn!("Ignored invalid phase transition: {} -> {}", self.phase, target);
        }
    }

    fn speak(&mut self, effects: &mut Vec<Effect>, text: impl Into<String>) {
        let text = text.into();
        self.log.push(Message::assistant(&text));
        effects.push(Effect::Speak(text));
    }

    fn speak_priority(&mut self, effects: &mut Vec<Effect>, text: impl Into<String>) {
        let text = text.into();
        self.log.push(Message::assistant(&text));
        effects.push(Effect::SpeakPriority(text));
    }
}

/// Thread-safe dialogue session for one user.
pub struct DialogueSession {
    id: Uuid,
    grammar: CommandGrammar,
    contacts: ContactBook,
    inner: Mutex<Inner>,
}

impl Default for DialogueSession {
    fn default() -> Self {
        Self::new(CommandGrammar::default())
    }
}

impl DialogueSession {
    /// New session on the home screen.
    pub fn new(grammar: CommandGrammar) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(session = %id, "New dialogue session");
        Self {
            id,
            grammar,
            contacts: ContactBook::new(),
            inner: Mutex::new(Inner {
                state: DialogueState::new(Screen::Home),
                phase: SessionPhase::Idle,
                log: TranscriptLog::new(),
            }),
        }
    }

    /// Unique identifier for this session, for log correlation.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> SessionPhase {
        self.inner.lock().expect("session mutex poisoned").phase
    }

    pub fn state(&self) -> DialogueState {
        self.inner
            .lock()
            .expect("session mutex poisoned")
            .state
            .clone()
    }

    /// Conversation so far, user transcripts and spoken replies interleaved.
    pub fn history(&self) -> Vec<Message> {
        self.inner
            .lock()
            .expect("session mutex poisoned")
            .log
            .messages()
            .to_vec()
    }

    /// Spoken greeting for the current screen, for session start.
    pub fn welcome(&self) -> Vec<Effect> {
        let mut inner = self.inner.lock().expect("session mutex poisoned");
        let mut effects = Vec::new();
        let announcement = self.entry_announcement(inner.state.screen);
        inner.speak(&mut effects, announcement);
        effects
    }

    /// Force the session back to the home screen, clearing everything.
    pub fn reset(&self) {
        let mut inner = self.inner.lock().expect("session mutex poisoned");
        tracing::info!(session = %self.id, "Session reset to Home from {}", inner.phase);
        inner.state = DialogueState::new(Screen::Home);
        inner.phase = SessionPhase::Idle;
    }

    /// Apply one finalized transcript and return the effects to perform.
    ///
    /// Returns no effects when another transcript is mid-application; the
    /// late arrival is dropped, never queued.
    pub fn apply(&self, transcript: &Transcript) -> Vec<Effect> {
        let Ok(mut inner) = self.inner.try_lock() else {
            tracing::debug!(text = transcript.as_str(), "Transcript dropped, session busy");
            return Vec::new();
        };

        let intent = self.grammar.interpret(transcript, inner.state.screen);
        tracing::debug!(text = transcript.as_str(), ?intent, "Interpreted transcript");
        inner.log.push(Message::user(transcript.as_str()));

        let mut effects = Vec::new();
        match intent {
            Intent::Cancel => self.handle_cancel(&mut inner, &mut effects),
            Intent::Help => {
                let text = self.help_text(inner.state.screen);
                inner.speak(&mut effects, text);
            }
            Intent::Status => self.handle_status(&mut inner, &mut effects),
            Intent::Navigate(screen) => self.handle_navigate(&mut inner, &mut effects, screen),
            Intent::SetField(field, value) => {
                self.handle_set_field(&mut inner, &mut effects, field, value)
            }
            Intent::SetTransfer {
                amount,
                bank,
                account,
            } => {
                inner.state.set(Field::Amount, amount);
                inner.state.set(Field::Bank, bank);
                inner.state.set(Field::AccountNumber, account);
                inner.set_phase(SessionPhase::Collecting);
                inner.set_phase(SessionPhase::AwaitingConfirmation);
                let prompt = confirmation_prompt(&inner.state);
                inner.speak(&mut effects, prompt);
            }
            Intent::SearchContact(query) => self.handle_search(&mut inner, &mut effects, &query),
            Intent::SelectContact(name) => self.handle_select(&mut inner, &mut effects, &name),
            Intent::Confirm => self.handle_confirm(&mut inner, &mut effects),
            Intent::Unknown => {
                if inner.state.screen == Screen::Assistant && !transcript.is_empty() {
                    effects.push(Effect::AskAdvisor(transcript.as_str().trim().to_string()));
                } else {
                    inner.speak(
                        &mut effects,
                        "Sorry, I didn't catch that. Say help to hear the commands.",
                    );
                }
            }
        }
        effects
    }

    /// Feed back the result of an authentication the shell ran.
    pub fn resolve_auth(&self, outcome: AuthOutcome) -> Vec<Effect> {
        let mut inner = self.inner.lock().expect("session mutex poisoned");
        if inner.phase != SessionPhase::Authenticating {
            tracing::warn!("Auth outcome arrived in phase {}, ignored", inner.phase);
            return Vec::new();
        }

        let mut effects = Vec::new();
        match outcome {
            AuthOutcome::Success => {
                let amount = inner
                    .state
                    .get(Field::Amount)
                    .unwrap_or_default()
                    .to_string();
                inner.set_phase(SessionPhase::Complete);
                inner.speak_priority(&mut effects, format!("Payment of {amount} successful."));
                effects.push(Effect::TransactionComplete {
                    amount: amount.clone(),
                });
                effects.push(Effect::Navigate(Screen::Home));
            }
            AuthOutcome::Cancelled => {
                inner.set_phase(SessionPhase::Collecting);
                inner.speak(
                    &mut effects,
                    "Authentication cancelled. Your details are kept, say confirm to try again.",
                );
            }
        }
        effects
    }

    // =========================================================================
    // Intent handlers
    // =========================================================================

    fn handle_cancel(&self, inner: &mut Inner, effects: &mut Vec<Effect>) {
        if inner.phase == SessionPhase::Idle {
            inner.speak(effects, "Nothing to cancel.");
            return;
        }
        inner.state.clear_fields();
        inner.set_phase(SessionPhase::Idle);
        inner.speak(effects, "Transaction cancelled.");
    }

    fn handle_status(&self, inner: &mut Inner, effects: &mut Vec<Effect>) {
        match inner.state.screen {
            Screen::CheckBalance | Screen::Assistant => {
                inner.speak(effects, BALANCE_ANNOUNCEMENT);
            }
            _ => {
                let summary = status_summary(&inner.state);
                inner.speak(effects, summary);
            }
        }
    }

    fn handle_navigate(&self, inner: &mut Inner, effects: &mut Vec<Effect>, screen: Screen) {
        inner.set_phase(SessionPhase::Idle);
        inner.state = DialogueState::new(screen);
        if !DialogueState::required_fields(screen).is_empty() {
            inner.set_phase(SessionPhase::Collecting);
        }
        effects.push(Effect::Navigate(screen));
        let announcement = self.entry_announcement(screen);
        inner.speak(effects, announcement);
    }

    fn handle_set_field(
        &self,
        inner: &mut Inner,
        effects: &mut Vec<Effect>,
        field: Field,
        value: String,
    ) {
        if !DialogueState::required_fields(inner.state.screen).contains(&field) {
            inner.speak(
                effects,
                "Sorry, I didn't catch that. Say help to hear the commands.",
            );
            return;
        }

        inner.state.set(field, value.clone());
        inner.set_phase(SessionPhase::Collecting);
        inner.speak(effects, format!("{} set to {value}.", capitalize(field.spoken_name())));
        self.prompt_after_update(inner, effects);
    }

    fn handle_search(&self, inner: &mut Inner, effects: &mut Vec<Effect>, query: &str) {
        let matches = self.contacts.search(query);
        let text = match matches.as_slice() {
            [] => format!("No contact matching {query}."),
            [only] => format!("Found {only}. Say select {only} to choose."),
            many => format!("Found: {}. Say select and a name.", many.join(", ")),
        };
        inner.speak(effects, text);
    }

    fn handle_select(&self, inner: &mut Inner, effects: &mut Vec<Effect>, name: &str) {
        match self.contacts.find(name) {
            Some(contact) => {
                inner.state.set(Field::Contact, contact.to_string());
                inner.set_phase(SessionPhase::Collecting);
                inner.speak(effects, format!("Selected {contact}."));
                self.prompt_after_update(inner, effects);
            }
            None => {
                inner.speak(effects, format!("No contact named {name}."));
            }
        }
    }

    fn handle_confirm(&self, inner: &mut Inner, effects: &mut Vec<Effect>) {
        match inner.phase {
            SessionPhase::AwaitingConfirmation => {
                let amount = inner
                    .state
                    .get(Field::Amount)
                    .unwrap_or_default()
                    .to_string();
                inner.set_phase(SessionPhase::Authenticating);
                effects.push(Effect::RequestAuth { amount });
            }
            SessionPhase::Collecting => {
                // Confirm with missing fields never mutates state, repeating
                // it repeats the same enumeration.
                let prompt = missing_prompt(&inner.state.missing_fields());
                inner.speak(effects, prompt);
            }
            _ => {
                inner.speak(effects, "Nothing to confirm.");
            }
        }
    }

    /// After a field changes: move to confirmation when complete, otherwise
    /// prompt for the next missing field.
    fn prompt_after_update(&self, inner: &mut Inner, effects: &mut Vec<Effect>) {
        if inner.state.is_complete() {
            inner.set_phase(SessionPhase::AwaitingConfirmation);
            let prompt = confirmation_prompt(&inner.state);
            inner.speak(effects, prompt);
        } else if let Some(next) = inner.state.missing_fields().first().copied() {
            inner.speak(effects, format!("Now say the {}.", next.spoken_name()));
        }
    }

    // =========================================================================
    // Spoken text
    // =========================================================================

    fn entry_announcement(&self, screen: Screen) -> String {
        match screen {
            Screen::Home => format!(
                "Welcome to FinSee. Available services: {}. Say help to hear the commands.",
                self.grammar.navigation().spoken_service_list()
            ),
            Screen::CheckBalance => BALANCE_ANNOUNCEMENT.to_string(),
            Screen::Assistant => "How can I help you with your finances today?".to_string(),
            Screen::ScanQr => "Opening Scan QR code. Point the camera at a QR code.".to_string(),
            other => format!("Opening {}.", self.screen_name(other)),
        }
    }

    fn help_text(&self, screen: Screen) -> String {
        match screen {
            Screen::Home => format!(
                "You can say: {}.",
                self.grammar.navigation().spoken_service_list()
            ),
            Screen::BankTransfer => "Say transfer followed by an amount, bank, and account \
                number, or set them one by one. Say confirm to proceed or cancel to start over."
                .to_string(),
            Screen::PayPhone => "Say a phone number and an amount. Say confirm to proceed \
                or cancel to start over."
                .to_string(),
            Screen::PayContacts => "Say search followed by a name, select a contact, then say \
                an amount. Say confirm to proceed or cancel to start over."
                .to_string(),
            Screen::CheckBalance => "Say balance to hear your balance, or go home.".to_string(),
            Screen::Assistant => "Ask me anything about your finances, or say go home.".to_string(),
            Screen::ScanQr => "Point the camera at a QR code, or say go home.".to_string(),
        }
    }

    fn screen_name(&self, screen: Screen) -> &'static str {
        self.grammar
            .navigation()
            .destinations()
            .iter()
            .find(|d| d.screen == screen)
            .map(|d| d.spoken_name)
            .unwrap_or("Home")
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn confirmation_prompt(state: &DialogueState) -> String {
    let amount = state.get(Field::Amount).unwrap_or_default();
    match state.screen {
        Screen::PayPhone => format!(
            "Pay {amount} to phone number {}. Say confirm to proceed.",
            state.get(Field::PhoneNumber).unwrap_or_default()
        ),
        Screen::PayContacts => format!(
            "Pay {amount} to {}. Say confirm to proceed.",
            state.get(Field::Contact).unwrap_or_default()
        ),
        _ => format!(
            "Transfer {amount} to {} account {}. Say confirm to proceed.",
            state.get(Field::Bank).unwrap_or_default(),
            state.get(Field::AccountNumber).unwrap_or_default()
        ),
    }
}

fn missing_prompt(missing: &[Field]) -> String {
    let names: Vec<&str> = missing.iter().map(|f| f.spoken_name()).collect();
    match names.as_slice() {
        [] => "All details are set. Say confirm to proceed.".to_string(),
        [only] => format!("Missing {only}."),
        [init @ .., last] => format!("Missing {} and {last}.", init.join(", ")),
    }
}

fn status_summary(state: &DialogueState) -> String {
    let collected: Vec<String> = DialogueState::required_fields(state.screen)
        .iter()
        .filter_map(|f| state.get(*f).map(|v| format!("{} {v}", f.spoken_name())))
        .collect();
    if collected.is_empty() {
        "No details set yet.".to_string()
    } else {
        let missing = state.missing_fields();
        if missing.is_empty() {
            format!("Set: {}. Say confirm to proceed.", collected.join(", "))
        } else {
            format!("Set: {}. {}", collected.join(", "), missing_prompt(&missing))
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn session_on(screen: Screen) -> DialogueSession {
        let session = DialogueSession::default();
        session.apply(&Transcript::new(spoken_route(screen)));
        assert_eq!(session.state().screen, screen);
        session
    }

    fn spoken_route(screen: Screen) -> &'static str {
        match screen {
            Screen::BankTransfer => "bank transfer",
            Screen::PayPhone => "pay phone",
            Screen::PayContacts => "pay contacts",
            Screen::CheckBalance => "check balance",
            Screen::ScanQr => "scan qr",
            Screen::Assistant => "assistance",
            Screen::Home => unreachable!("session starts on Home"),
        }
    }

    fn speak_texts(effects: &[Effect]) -> Vec<&str> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Speak(t) | Effect::SpeakPriority(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_full_transfer_reaches_awaiting_confirmation() {
        let session = session_on(Screen::BankTransfer);
        let effects = session.apply(&Transcript::new(
            "transfer 100 dollars to chase account 12345",
        ));

        let state = session.state();
        assert_eq!(state.get(Field::Amount), Some("100"));
        assert_eq!(state.get(Field::Bank), Some("Chase"));
        assert_eq!(state.get(Field::AccountNumber), Some("12345"));
        assert_eq!(session.phase(), SessionPhase::AwaitingConfirmation);

        // Spoken confirmation prompt, but no authentication yet.
        let spoken = speak_texts(&effects).join(" ");
        assert!(spoken.contains("confirm"), "spoken: {spoken}");
        assert!(!effects
            .iter()
            .any(|e| matches!(e, Effect::RequestAuth { .. })));
    }

    #[test]
    fn test_fields_merge_one_by_one() {
        let session = session_on(Screen::BankTransfer);
        session.apply(&Transcript::new("amount 100"));
        session.apply(&Transcript::new("bank chase"));
        assert_eq!(session.phase(), SessionPhase::Collecting);

        session.apply(&Transcript::new("account number 12345"));
        let state = session.state();
        assert_eq!(state.get(Field::Amount), Some("100"));
        assert_eq!(state.get(Field::Bank), Some("Chase"));
        assert_eq!(state.get(Field::AccountNumber), Some("12345"));
        assert_eq!(session.phase(), SessionPhase::AwaitingConfirmation);
    }

    #[test]
    fn test_repeated_field_overwrites() {
        let session = session_on(Screen::BankTransfer);
        session.apply(&Transcript::new("amount 100"));
        session.apply(&Transcript::new("amount 250"));
        assert_eq!(session.state().get(Field::Amount), Some("250"));
    }

    #[test]
    fn test_confirm_with_missing_fields_is_idempotent() {
        let session = session_on(Screen::BankTransfer);
        session.apply(&Transcript::new("amount 100"));

        let first = session.apply(&Transcript::new("confirm"));
        let state_after_first = session.state();
        let second = session.apply(&Transcript::new("confirm"));

        assert_eq!(first, second);
        assert_eq!(session.state(), state_after_first);
        assert_eq!(session.phase(), SessionPhase::Collecting);

        // Names exactly the two missing fields.
        let spoken = speak_texts(&first).join(" ");
        assert_eq!(spoken, "Missing bank and account number.");
    }

    #[test]
    fn test_confirm_when_complete_requests_auth() {
        let session = session_on(Screen::BankTransfer);
        session.apply(&Transcript::new(
            "transfer 100 dollars to chase account 12345",
        ));
        let effects = session.apply(&Transcript::new("confirm"));

        assert_eq!(session.phase(), SessionPhase::Authenticating);
        assert!(effects.contains(&Effect::RequestAuth {
            amount: "100".into()
        }));
    }

    #[test]
    fn test_auth_success_completes_and_goes_home() {
        let session = session_on(Screen::BankTransfer);
        session.apply(&Transcript::new(
            "transfer 100 dollars to chase account 12345",
        ));
        session.apply(&Transcript::new("confirm"));

        let effects = session.resolve_auth(AuthOutcome::Success);
        assert_eq!(session.phase(), SessionPhase::Complete);
        assert!(effects.contains(&Effect::TransactionComplete {
            amount: "100".into()
        }));
        assert!(effects.contains(&Effect::Navigate(Screen::Home)));
        assert!(effects
            .iter()
            .any(|e| matches!(e, Effect::SpeakPriority(_))));
    }

    #[test]
    fn test_auth_cancel_keeps_fields() {
        let session = session_on(Screen::BankTransfer);
        session.apply(&Transcript::new(
            "transfer 100 dollars to chase account 12345",
        ));
        session.apply(&Transcript::new("confirm"));

        session.resolve_auth(AuthOutcome::Cancelled);
        assert_eq!(session.phase(), SessionPhase::Collecting);
        assert_eq!(session.state().get(Field::Bank), Some("Chase"));
    }

    #[test]
    fn test_auth_outcome_outside_authenticating_is_ignored() {
        let session = session_on(Screen::BankTransfer);
        let effects = session.resolve_auth(AuthOutcome::Success);
        assert!(effects.is_empty());
        assert_eq!(session.phase(), SessionPhase::Collecting);
    }

    #[test]
    fn test_cancel_clears_fields_from_any_phase() {
        let session = session_on(Screen::BankTransfer);
        session.apply(&Transcript::new(
            "transfer 100 dollars to chase account 12345",
        ));
        session.apply(&Transcript::new("confirm"));
        assert_eq!(session.phase(), SessionPhase::Authenticating);

        session.apply(&Transcript::new("cancel"));
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.state().get(Field::Amount).is_none());
        assert!(session.state().get(Field::Bank).is_none());
    }

    #[test]
    fn test_cancel_when_idle() {
        let session = DialogueSession::default();
        let effects = session.apply(&Transcript::new("cancel"));
        assert_eq!(speak_texts(&effects), vec!["Nothing to cancel."]);
    }

    #[test]
    fn test_navigation_resets_state() {
        let session = session_on(Screen::BankTransfer);
        session.apply(&Transcript::new("amount 100"));
        session.apply(&Transcript::new("go home"));

        assert_eq!(session.state().screen, Screen::Home);
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.state().get(Field::Amount).is_none());
    }

    #[test]
    fn test_pay_phone_flow() {
        let session = session_on(Screen::PayPhone);
        session.apply(&Transcript::new("phone number 98765 43210"));
        let effects = session.apply(&Transcript::new("amount 500"));

        assert_eq!(session.phase(), SessionPhase::AwaitingConfirmation);
        let spoken = speak_texts(&effects).join(" ");
        assert!(spoken.contains("9876543210"), "spoken: {spoken}");
    }

    #[test]
    fn test_contact_search_and_select_flow() {
        let session = session_on(Screen::PayContacts);
        let effects = session.apply(&Transcript::new("search for jane"));
        let spoken = speak_texts(&effects).join(" ");
        assert!(spoken.contains("Jane Smith"), "spoken: {spoken}");

        session.apply(&Transcript::new("select jane smith"));
        assert_eq!(session.state().get(Field::Contact), Some("Jane Smith"));

        session.apply(&Transcript::new("amount 75"));
        assert_eq!(session.phase(), SessionPhase::AwaitingConfirmation);
    }

    #[test]
    fn test_balance_on_check_balance_screen() {
        let session = session_on(Screen::CheckBalance);
        let effects = session.apply(&Transcript::new("balance"));
        assert_eq!(speak_texts(&effects), vec![BALANCE_ANNOUNCEMENT]);
    }

    #[test]
    fn test_assistant_forwards_free_form_to_advisor() {
        let session = session_on(Screen::Assistant);
        let effects = session.apply(&Transcript::new("How should I plan for retirement?"));
        assert_eq!(
            effects,
            vec![Effect::AskAdvisor(
                "How should I plan for retirement?".into()
            )]
        );
    }

    #[test]
    fn test_unknown_reprompts_without_state_change() {
        let session = session_on(Screen::BankTransfer);
        session.apply(&Transcript::new("amount 100"));
        let before = session.state();

        let effects = session.apply(&Transcript::new("what a lovely day"));
        assert_eq!(session.state(), before);
        let spoken = speak_texts(&effects).join(" ");
        assert!(spoken.contains("didn't catch"), "spoken: {spoken}");
    }

    #[test]
    fn test_wake_phrase_routes_to_assistant() {
        let session = DialogueSession::default();
        let effects = session.apply(&Transcript::new("hey bot"));
        assert!(effects.contains(&Effect::Navigate(Screen::Assistant)));
    }

    #[test]
    fn test_welcome_lists_services() {
        let session = DialogueSession::default();
        let effects = session.welcome();
        let spoken = speak_texts(&effects).join(" ");
        assert!(spoken.contains("Welcome to FinSee"));
        assert!(spoken.contains("Bank transfer"));
    }

    #[test]
    fn test_history_interleaves_user_and_assistant() {
        use finsee_core::types::Speaker;

        let session = DialogueSession::default();
        session.apply(&Transcript::new("check balance"));
        let history = session.history();

        assert!(history.len() >= 2);
        assert_eq!(history[0].speaker, Speaker::User);
        assert_eq!(history[0].text, "check balance");
        assert!(history.iter().any(|m| m.speaker == Speaker::Assistant));
    }

    #[test]
    fn test_reset_returns_home() {
        let session = session_on(Screen::BankTransfer);
        session.apply(&Transcript::new("amount 100"));
        session.reset();
        assert_eq!(session.state().screen, Screen::Home);
        assert_eq!(session.phase(), SessionPhase::Idle);
    }

    #[test]
    fn test_sessions_have_distinct_ids() {
        let a = DialogueSession::default();
        let b = DialogueSession::default();
        assert_ne!(a.id(), b.id());
        assert!(!a.id().is_nil());
    }

    #[test]
    fn test_missing_prompt_wording() {
        assert_eq!(missing_prompt(&[Field::Bank]), "Missing bank.");
        assert_eq!(
            missing_prompt(&[Field::Bank, Field::AccountNumber]),
            "Missing bank and account number."
        );
        assert_eq!(
            missing_prompt(&[Field::Amount, Field::Bank, Field::AccountNumber]),
            "Missing amount, bank and account number."
        );
    }
}
