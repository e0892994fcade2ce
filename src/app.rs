//! Application state and core logic

use crate::config::ContactConfig;
use crate::state::{
    AppState, Form, SubmissionReceipt, View, SUBMIT_FAILURE_MESSAGE,
};
use crate::submission::{AnalyticsEvent, AnalyticsSink, SimulatedSubmitter, Submitter, TracingAnalytics};
use anyhow::{anyhow, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Outbound contact links shown in the contact bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outbound {
    Call,
    Email,
}

/// A submission that has been handed to the submitter and not yet resolved
struct PendingSubmission {
    attempt_id: Uuid,
    project_type: String,
    handle: JoinHandle<Result<SubmissionReceipt>>,
}

/// Main application struct. Owns the view state, every input handler and
/// the form's collaborators.
pub struct App {
    /// Current application state
    pub state: AppState,
    pub config: ContactConfig,
    submitter: Arc<dyn Submitter>,
    /// Analytics is best-effort and only present when registered
    analytics: Option<Arc<dyn AnalyticsSink>>,
    pending: Option<PendingSubmission>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create an App with the simulated submitter and, if enabled, tracing analytics
    pub fn new(config: ContactConfig) -> Self {
        let submitter = Arc::new(SimulatedSubmitter::new(config.submit_delay()));
        let analytics: Option<Arc<dyn AnalyticsSink>> = if config.analytics_enabled() {
            Some(Arc::new(TracingAnalytics))
        } else {
            None
        };
        Self::with_services(config, submitter, analytics)
    }

    /// Create an App with explicit collaborators
    pub fn with_services(
        config: ContactConfig,
        submitter: Arc<dyn Submitter>,
        analytics: Option<Arc<dyn AnalyticsSink>>,
    ) -> Self {
        Self {
            state: AppState::new(config.form_layout()),
            config,
            submitter,
            analytics,
            pending: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    /// Advance time-based state (reveal animation)
    pub fn tick(&mut self) {
        self.state.update_reveal();
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Alert is modal
        if self.state.has_alert() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_alert();
            }
            return Ok(());
        }

        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        self.state.status_message = None;

        match self.state.current_view {
            View::Form => self.handle_form_key(key).await,
            View::Success => self.handle_success_key(key),
        }
    }

    /// Handle keys in the form view
    async fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_submit_row = self.state.form.is_submit_row_active();

        match key.code {
            KeyCode::Esc if self.is_submitting() => self.abort_submission().await,
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Char('p') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.follow_outbound(Outbound::Call)
            }
            KeyCode::Char('e') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.follow_outbound(Outbound::Email)
            }
            KeyCode::Tab | KeyCode::Down => self.move_focus(true),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(false),
            KeyCode::Enter if on_submit_row => self.submit(),
            KeyCode::Enter if self.state.form.is_active_field_multiline() => {
                self.edit_active_field(|f| f.push_char('\n'))
            }
            KeyCode::Enter => self.move_focus(true),
            KeyCode::Left => self.edit_active_field(|f| f.cycle_choice(false)),
            KeyCode::Right => self.edit_active_field(|f| f.cycle_choice(true)),
            KeyCode::Backspace => self.edit_active_field(|f| f.pop_char()),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit_active_field(|f| f.push_char(c))
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle keys on the success panel
    fn handle_success_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('p') => self.follow_outbound(Outbound::Call),
            KeyCode::Char('e') => self.follow_outbound(Outbound::Email),
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {
                if let Some(reveal) = self.state.reveal.as_mut() {
                    reveal.skip();
                }
            }
        }
        Ok(())
    }

    /// Leave the active field (blur) and focus the next or previous one
    fn move_focus(&mut self, forward: bool) {
        if let Some(field) = self.state.form.get_active_field_mut() {
            if field.required {
                let valid = field.validate();
                tracing::trace!(field = field.name.as_str(), valid, "Field blurred");
            }
        }
        if forward {
            self.state.form.next_field();
        } else {
            self.state.form.prev_field();
        }
    }

    /// Apply an edit to the active field; revalidate only if it is already
    /// marked invalid
    fn edit_active_field(&mut self, edit: impl FnOnce(&mut crate::state::FormField) -> bool) {
        if let Some(field) = self.state.form.get_active_field_mut() {
            if edit(field) && field.required && field.is_invalid() {
                field.validate();
            }
        }
    }

    /// Start a submission attempt.
    ///
    /// Ignored while one is in flight. Field validity does not gate the attempt
    /// unless `validate_on_submit` is configured.
    pub fn submit(&mut self) {
        if self.state.submit_button.disabled {
            tracing::debug!("Submission already in flight, ignoring");
            return;
        }

        if self.config.validate_on_submit() && !self.state.form.validate_all() {
            let count = self.state.form.invalid_fields().count();
            tracing::debug!(count, "Submission blocked by invalid fields");
            self.state.status_message = Some(format!("{count} felt må rettes"));
            return;
        }

        if !self.state.submit_button.begin_busy() {
            return;
        }

        let record = self.state.form.capture();
        let attempt_id = Uuid::new_v4();
        let project_type = record.project_type.clone();
        tracing::info!(%attempt_id, project_type = %project_type, "Submitting contact form");

        let submitter = Arc::clone(&self.submitter);
        let timeout = self.config.submit_timeout();
        let handle = tokio::spawn(async move {
            let submission = submitter.submit(&record);
            match timeout {
                Some(limit) => tokio::time::timeout(limit, submission)
                    .await
                    .unwrap_or_else(|_| Err(anyhow!("submission timed out after {limit:?}"))),
                None => submission.await,
            }
        });

        self.pending = Some(PendingSubmission {
            attempt_id,
            project_type,
            handle,
        });
    }

    /// Complete the pending submission if its task has finished
    pub async fn poll_submission(&mut self) {
        let finished = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.handle.is_finished());
        if finished {
            if let Some(pending) = self.pending.take() {
                self.await_submission(pending).await;
            }
        }
    }

    async fn await_submission(&mut self, pending: PendingSubmission) {
        let PendingSubmission {
            attempt_id,
            project_type,
            handle,
        } = pending;
        let result = handle.await.map_err(anyhow::Error::from).and_then(|r| r);
        self.finish_submission(attempt_id, &project_type, result);
    }

    /// Abort the in-flight submission; it resolves as a failure
    async fn abort_submission(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.handle.abort();
            tracing::warn!(attempt_id = %pending.attempt_id, "Submission aborted");
            self.finish_submission(
                pending.attempt_id,
                &pending.project_type,
                Err(anyhow!("submission aborted by user")),
            );
        }
    }

    /// Render the outcome, then restore the submit button on every path
    fn finish_submission(
        &mut self,
        attempt_id: Uuid,
        project_type: &str,
        result: Result<SubmissionReceipt>,
    ) {
        match result {
            Ok(receipt) => {
                tracing::info!(%attempt_id, receipt_id = %receipt.id, "Contact form submitted");
                self.state.show_success(receipt);
                self.track(AnalyticsEvent::form_submission(project_type));
            }
            Err(err) => {
                tracing::error!(%attempt_id, "Form submission error: {err:#}");
                self.state.show_alert(SUBMIT_FAILURE_MESSAGE);
            }
        }
        self.state.submit_button.restore();
    }

    fn track(&self, event: AnalyticsEvent) {
        match &self.analytics {
            Some(sink) => sink.track(&event),
            None => tracing::trace!(event = event.name, "No analytics sink registered"),
        }
    }

    /// Track an outbound contact link and put its target on the clipboard
    fn follow_outbound(&mut self, outbound: Outbound) {
        let (href, event) = match outbound {
            Outbound::Call => {
                let href = self.config.tel_href();
                let event = AnalyticsEvent::click_to_call(&href);
                (href, event)
            }
            Outbound::Email => {
                let href = self.config.mailto_href();
                let event = AnalyticsEvent::click_to_email(&href);
                (href, event)
            }
        };
        self.track(event);

        let target = href.split_once(':').map(|(_, rest)| rest).unwrap_or(&href);
        self.state.status_message = Some(match copy_to_clipboard(target) {
            Ok(()) => format!("Kopiert: {target}"),
            Err(err) => {
                tracing::warn!("Clipboard unavailable: {err}");
                href.clone()
            }
        });
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
