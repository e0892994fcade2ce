//! Application state definitions

use super::forms::{ContactForm, FormLayout};
use super::reveal_state::RevealState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use uuid::Uuid;

/// Label shown on the submit button while idle
pub const SUBMIT_LABEL: &str = "Send forespørsel";
/// Label shown on the submit button while a submission is in flight
pub const BUSY_LABEL: &str = "Sender...";
/// Alert shown when the submission routine fails
pub const SUBMIT_FAILURE_MESSAGE: &str =
    "Beklager, noe gikk galt. Vennligst prøv igjen eller ring oss direkte.";

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Form,
    Success,
}

/// What the submission routine hands back on success
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
}

/// Submit control: label plus the disabled flag that guards re-entry
#[derive(Debug, Clone)]
pub struct SubmitButton {
    pub label: String,
    pub disabled: bool,
    original_label: Option<String>,
    /// When the busy state began, drives the spinner
    pub busy_since: Option<Instant>,
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self {
            label: SUBMIT_LABEL.to_string(),
            disabled: false,
            original_label: None,
            busy_since: None,
        }
    }
}

impl SubmitButton {
    /// Remember the current label, show the busy label and disable.
    /// Returns false if the button was already busy.
    pub fn begin_busy(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        let original = std::mem::replace(&mut self.label, BUSY_LABEL.to_string());
        self.original_label = Some(original);
        self.disabled = true;
        self.busy_since = Some(Instant::now());
        true
    }

    /// Re-enable with the label captured by `begin_busy`
    pub fn restore(&mut self) {
        if let Some(original) = self.original_label.take() {
            self.label = original;
        }
        self.disabled = false;
        self.busy_since = None;
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub form: ContactForm,
    pub submit_button: SubmitButton,
    /// Blocking alert; keys other than dismiss are swallowed while set
    pub alert: Option<String>,
    pub receipt: Option<SubmissionReceipt>,
    pub reveal: Option<RevealState>,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(layout: FormLayout) -> Self {
        Self {
            form: ContactForm::new(layout),
            ..Default::default()
        }
    }

    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    pub fn has_alert(&self) -> bool {
        self.alert.is_some()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Hide the form and start revealing the success panel
    pub fn show_success(&mut self, receipt: SubmissionReceipt) {
        self.current_view = View::Success;
        self.receipt = Some(receipt);
        self.reveal = Some(RevealState::new());
    }

    pub fn update_reveal(&mut self) {
        if let Some(reveal) = self.reveal.as_mut() {
            reveal.update();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod submit_button {
        use super::*;

        #[test]
        fn test_default_is_enabled_with_submit_label() {
            let button = SubmitButton::default();
            assert!(!button.disabled);
            assert!(button.busy_since.is_none());
            assert_eq!(button.label, SUBMIT_LABEL);
        }

        #[test]
        fn test_begin_busy_swaps_label_and_disables() {
            let mut button = SubmitButton::default();
            assert!(button.begin_busy());
            assert!(button.disabled);
            assert!(button.busy_since.is_some());
            assert_eq!(button.label, BUSY_LABEL);
        }

        #[test]
        fn test_begin_busy_refuses_reentry() {
            let mut button = SubmitButton::default();
            assert!(button.begin_busy());
            assert!(!button.begin_busy());
            button.restore();
            assert_eq!(button.label, SUBMIT_LABEL);
        }

        #[test]
        fn test_restore_brings_back_custom_label() {
            let mut button = SubmitButton {
                label: "Kontakt oss".to_string(),
                ..Default::default()
            };
            button.begin_busy();
            button.restore();
            assert_eq!(button.label, "Kontakt oss");
            assert!(!button.disabled);
        }
    }

    mod app_state {
        use super::*;

        #[test]
        fn test_default_view_is_form() {
            let state = AppState::default();
            assert_eq!(state.current_view, View::Form);
            assert!(!state.has_alert());
        }

        #[test]
        fn test_alert_lifecycle() {
            let mut state = AppState::default();
            state.show_alert(SUBMIT_FAILURE_MESSAGE);
            assert!(state.has_alert());
            state.dismiss_alert();
            assert!(!state.has_alert());
        }

        #[test]
        fn test_show_success_switches_view() {
            let mut state = AppState::default();
            let receipt = SubmissionReceipt {
                id: Uuid::new_v4(),
                received_at: Utc::now(),
            };
            state.show_success(receipt.clone());
            assert_eq!(state.current_view, View::Success);
            assert_eq!(state.receipt, Some(receipt));
            assert!(state.reveal.is_some());
        }
    }
}
