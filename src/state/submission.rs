use dioxus::logger::tracing::{info, warn};

use crate::shared::types::{SubmissionRequest, SubmissionResult};

pub const VALIDATION_MESSAGE: &str = "Please fill in both first name and last name";
pub const SUBMIT_FALLBACK_MESSAGE: &str = "An error occurred while submitting";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// State behind the name-submission form.
///
/// Fields stay editable in every phase except `Submitting`. A failed request
/// leaves any earlier result in place next to the new error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionForm {
    pub first_name: String,
    pub last_name: String,
    phase: SubmitPhase,
    error: Option<String>,
    result: Option<SubmissionResult>,
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&SubmissionResult> {
        self.result.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
            && !self.first_name.trim().is_empty()
            && !self.last_name.trim().is_empty()
    }

    /// Validates the fields and, if they pass, moves to `Submitting` and
    /// returns the trimmed request to send. Returns `None` when nothing
    /// should go on the wire.
    pub fn begin_submit(&mut self) -> Option<SubmissionRequest> {
        if self.is_submitting() {
            return None;
        }
        let first_name = self.first_name.trim();
        let last_name = self.last_name.trim();
        if first_name.is_empty() || last_name.is_empty() {
            self.phase = SubmitPhase::Idle;
            self.error = Some(VALIDATION_MESSAGE.to_string());
            return None;
        }
        let request = SubmissionRequest {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        };
        self.phase = SubmitPhase::Submitting;
        self.error = None;
        Some(request)
    }

    pub fn complete(&mut self, outcome: anyhow::Result<SubmissionResult>) {
        match outcome {
            Ok(result) => {
                info!(
                    "[submission] accepted for {} {}",
                    result.first_name, result.last_name
                );
                self.result = Some(result);
                self.phase = SubmitPhase::Succeeded;
            }
            Err(e) => {
                warn!("[submission] failed: {e:#}");
                let text = e.to_string();
                self.error = Some(if text.trim().is_empty() {
                    SUBMIT_FALLBACK_MESSAGE.to_string()
                } else {
                    text
                });
                self.phase = SubmitPhase::Failed;
            }
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
