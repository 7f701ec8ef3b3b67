//! Application logic: key handling and submission orchestration

use crate::config::TuiConfig;
use crate::service::{MockBackend, RegistrationService, ServiceError};
use crate::state::{
    options, AppState, FieldSlot, FileAttachment, FileField, FormAction, SubmissionResult,
    SubmissionState,
};
use crate::validation;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;

/// Shown when a submit attempt fails validation.
pub const VALIDATION_NOTICE: &str = "Please check the form for errors and try again.";
/// Fallback when a service failure carries no descriptive reason.
pub const GENERIC_FAILURE: &str = "An unknown error occurred";

/// Main application
pub struct App {
    pub state: AppState,
    #[allow(dead_code)]
    pub config: TuiConfig,
    service: Box<dyn RegistrationService>,
}

impl App {
    pub fn new() -> Result<Self> {
        let config = TuiConfig::load().unwrap_or_default();
        let mut state = AppState::new();
        if let Some(default_state) = &config.default_state {
            if options::INDIAN_STATES.contains(&default_state.as_str()) {
                state.form.state = default_state.clone();
            }
        }
        Ok(Self {
            state,
            config,
            service: Box::new(MockBackend::new()),
        })
    }

    /// Build an app around a specific backend (tests inject mocks here).
    #[cfg(test)]
    pub fn with_service(service: Box<dyn RegistrationService>) -> Self {
        Self {
            state: AppState::new(),
            config: TuiConfig::default(),
            service,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit
    }

    /// Route a form action through the reducer, re-validating live once
    /// the first submit attempt has failed.
    fn apply(&mut self, action: FormAction) {
        self.state.form.apply(action);
        if self.state.live_validation {
            self.state.errors = validation::validate(&self.state.form);
        }
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.should_quit = true;
            }
            // Submit from anywhere
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit().await;
            }
            // Section navigation
            KeyCode::PageDown => self.state.next_section(),
            KeyCode::PageUp => self.state.prev_section(),
            // Field navigation within the section
            KeyCode::Tab => self.state.next_field(),
            KeyCode::BackTab => self.state.prev_field(),
            KeyCode::Enter if self.state.active_slot() == FieldSlot::Submit => {
                self.submit().await;
            }
            _ => self.handle_field_key(key),
        }
        Ok(())
    }

    /// Editing keys for whichever control currently has focus.
    fn handle_field_key(&mut self, key: KeyEvent) {
        let plain_char = match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => Some(c),
            _ => None,
        };

        match self.state.active_slot() {
            FieldSlot::Text(field) | FieldSlot::Secret(field) => match key.code {
                KeyCode::Backspace => self.apply(FormAction::PopChar(field)),
                _ => {
                    if let Some(c) = plain_char {
                        self.apply(FormAction::PushChar(field, c));
                    }
                }
            },
            FieldSlot::Multiline(field) => match key.code {
                KeyCode::Backspace => self.apply(FormAction::PopChar(field)),
                KeyCode::Enter => self.apply(FormAction::PushChar(field, '\n')),
                _ => {
                    if let Some(c) = plain_char {
                        self.apply(FormAction::PushChar(field, c));
                    }
                }
            },
            FieldSlot::Select(field, choices) => match key.code {
                KeyCode::Down => self.cycle_select(field, choices, 1),
                KeyCode::Up => self.cycle_select(field, choices, -1),
                KeyCode::Delete => self.apply(FormAction::SetText(field, String::new())),
                _ => {}
            },
            FieldSlot::Options(field, choices) => match key.code {
                KeyCode::Down => {
                    self.state.option_cursor = (self.state.option_cursor + 1) % choices.len();
                }
                KeyCode::Up => {
                    self.state.option_cursor =
                        (self.state.option_cursor + choices.len() - 1) % choices.len();
                }
                KeyCode::Char(' ') | KeyCode::Enter => {
                    let option = choices[self.state.option_cursor.min(choices.len() - 1)];
                    self.apply(FormAction::ToggleOption(field, option.to_string()));
                }
                _ => {}
            },
            FieldSlot::Flag(field) => {
                if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                    self.apply(FormAction::ToggleFlag(field));
                }
            }
            FieldSlot::File(field) => match key.code {
                KeyCode::Backspace => {
                    self.state.file_input_mut(field).pop();
                }
                KeyCode::Enter => self.attach_file(field),
                KeyCode::Delete => {
                    self.state.file_input_mut(field).clear();
                    self.apply(FormAction::ClearFile(field));
                }
                _ => {
                    if let Some(c) = plain_char {
                        self.state.file_input_mut(field).push(c);
                    }
                }
            },
            FieldSlot::Submit => {}
        }
    }

    /// Step a single-choice field through its option list.
    fn cycle_select(&mut self, field: crate::state::TextField, choices: &[&str], step: i32) {
        let current = self
            .state
            .form
            .text(field)
            .to_string();
        let index = choices.iter().position(|&c| c == current);
        let next = match (index, step) {
            (Some(i), 1) => (i + 1) % choices.len(),
            (Some(i), _) => (i + choices.len() - 1) % choices.len(),
            (None, 1) => 0,
            (None, _) => choices.len() - 1,
        };
        self.apply(FormAction::SetText(field, choices[next].to_string()));
    }

    /// Stat the typed path and record it as an attachment.
    ///
    /// Only the name and size are kept; the file itself is never read.
    fn attach_file(&mut self, field: FileField) {
        let raw = self.state.file_input(field).trim().to_string();
        if raw.is_empty() {
            return;
        }
        let path = PathBuf::from(&raw);
        match std::fs::metadata(&path) {
            Ok(meta) if meta.is_file() => {
                let attachment = FileAttachment::new(path, meta.len());
                if !attachment.extension_allowed(field) {
                    self.state.status_message = Some(format!(
                        "Unsupported file type (allowed: {})",
                        field.accepted_extensions().join(", ")
                    ));
                    return;
                }
                self.state.status_message =
                    Some(format!("Attached {}", attachment.file_name));
                self.apply(FormAction::AttachFile(field, attachment));
            }
            _ => {
                self.state.status_message = Some(format!("File not found: {raw}"));
            }
        }
    }

    /// One submit attempt: validate, and only on a clean pass call the
    /// registration service. The busy flag rejects re-entrant submits
    /// while a call is in flight.
    pub async fn submit(&mut self) {
        if self.state.submission.is_busy() {
            return;
        }

        let errors = validation::validate(&self.state.form);

        if !validation::is_valid(&errors) {
            tracing::warn!(fields = errors.len(), "submit blocked by validation");
            self.state.errors = errors;
            // From here on every edit re-runs validation
            self.state.live_validation = true;
            self.state.status_message = Some(VALIDATION_NOTICE.to_string());
            return;
        }

        self.state.errors = errors;
        self.state.status_message = None;
        self.state.submission = SubmissionState::Submitting;
        tracing::info!(email = %self.state.form.email, "submitting registration");

        let application = self.state.form.to_application();
        let result = self.service.register(&application).await;
        self.state.submission = SubmissionState::Idle;

        self.state.last_result = Some(match result {
            Ok(receipt) => {
                tracing::info!(
                    reference_id = %receipt.reference_id,
                    submitted_at = %receipt.submitted_at,
                    "registration succeeded"
                );
                SubmissionResult::Success {
                    message: receipt.message,
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "registration failed");
                SubmissionResult::Failure {
                    reason: failure_reason(&err),
                }
            }
        });
    }
}

/// The banner text for a service failure, falling back to a generic
/// message when the error carries no reason.
fn failure_reason(err: &ServiceError) -> String {
    let reason = err.to_string();
    if reason.trim().is_empty() {
        GENERIC_FAILURE.to_string()
    } else {
        reason
    }
}
