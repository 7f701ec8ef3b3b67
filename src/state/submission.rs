//! Submission state machine types

/// Where the submission orchestrator currently is.
///
/// `Submitting` doubles as the busy flag: while the service call is in
/// flight the submit action is ignored and the button renders disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

impl SubmissionState {
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// Outcome of the most recent submit attempt.
///
/// Replaced wholesale on every attempt; the banner at the top of the form
/// renders whichever variant is current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success { message: String },
    Failure { reason: String },
}

impl SubmissionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success { message } => message,
            Self::Failure { reason } => reason,
        }
    }
}
