//! Explicit form state machine for the submit/download flow.
//!
//! All mutable UI state (field values, busy phase, last CID, last error) is
//! held in one serializable [`FormState`] value so transitions can be unit
//! tested independent of any rendering or I/O. Callers drive it in pairs:
//! [`FormState::begin_submit`] then [`FormState::submit_succeeded`] or
//! [`FormState::submit_failed`], and likewise for downloads.
//!
//! At most one submission or download is in flight per form instance; the
//! [`Phase`] acts as the busy flag.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::submission::{MIN_ROLL_NO_LEN, Submission};

/// Which operation, if any, is currently in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Downloading,
}

/// Local errors raised by state transitions, before any network traffic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Roll number is shorter than the minimum; the server is never contacted.
    #[error("Roll number must be at least {min} characters.")]
    RollNumberTooShort { min: usize },

    /// One of the three fields is empty.
    #[error("Exam, roll number and date of birth are all required.")]
    MissingFields,

    /// A submission or download is already in flight, or no CID is available
    /// to download yet.
    #[error("The form is not ready for this action.")]
    NotReady,
}

/// Serializable snapshot of the result form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub exam: String,
    pub roll_no: String,
    pub dob: String,
    phase: Phase,
    cid: Option<String>,
    last_error: Option<String>,
}

impl FormState {
    /// Creates a form pre-filled with the given field values.
    pub fn new(exam: impl Into<String>, roll_no: impl Into<String>, dob: impl Into<String>) -> Self {
        Self {
            exam: exam.into(),
            roll_no: roll_no.into(),
            dob: dob.into(),
            ..Self::default()
        }
    }

    /// True when all three fields are filled and nothing is in flight.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.as_submission().is_complete() && self.phase == Phase::Idle
    }

    /// True when a CID is stored and nothing is in flight.
    #[must_use]
    pub fn can_download(&self) -> bool {
        self.cid.is_some() && self.phase == Phase::Idle
    }

    /// Starts a submission attempt.
    ///
    /// Clears any previous CID and error, validates the roll number length
    /// locally, and on success moves to [`Phase::Submitting`] and returns the
    /// submission to send. A validation failure is recorded in `last_error`
    /// and leaves the form idle and retryable.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::NotReady`] when busy, [`FormError::MissingFields`]
    /// when any field is empty, and [`FormError::RollNumberTooShort`] when the
    /// roll number has fewer than [`MIN_ROLL_NO_LEN`] characters.
    pub fn begin_submit(&mut self) -> Result<Submission, FormError> {
        if self.phase != Phase::Idle {
            return Err(FormError::NotReady);
        }
        self.last_error = None;
        self.cid = None;
        let submission = self.as_submission();
        if !submission.is_complete() {
            let err = FormError::MissingFields;
            self.last_error = Some(err.to_string());
            return Err(err);
        }
        if self.roll_no.chars().count() < MIN_ROLL_NO_LEN {
            let err = FormError::RollNumberTooShort {
                min: MIN_ROLL_NO_LEN,
            };
            self.last_error = Some(err.to_string());
            return Err(err);
        }
        self.phase = Phase::Submitting;
        Ok(submission)
    }

    /// Records a successful lookup: the CID is stored and download becomes
    /// available.
    pub fn submit_succeeded(&mut self, cid: impl Into<String>) {
        self.cid = Some(cid.into());
        self.last_error = None;
        self.phase = Phase::Idle;
    }

    /// Records a failed lookup. The form returns to idle so submit can be
    /// retried.
    pub fn submit_failed(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
        self.phase = Phase::Idle;
    }

    /// Starts a download attempt, returning the stored CID.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::NotReady`] when no CID is stored or an operation
    /// is already in flight.
    pub fn begin_download(&mut self) -> Result<String, FormError> {
        if !self.can_download() {
            return Err(FormError::NotReady);
        }
        self.phase = Phase::Downloading;
        // can_download guarantees presence
        Ok(self.cid.clone().unwrap_or_default())
    }

    /// Records a completed download. The CID stays available for repeat
    /// downloads.
    pub fn download_succeeded(&mut self) {
        self.last_error = None;
        self.phase = Phase::Idle;
    }

    /// Records a failed download. The stored CID is kept intact so the user
    /// may retry downloading without resubmitting the form.
    pub fn download_failed(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
        self.phase = Phase::Idle;
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The stored CID from the last successful submission, if any.
    #[must_use]
    pub fn cid(&self) -> Option<&str> {
        self.cid.as_deref()
    }

    /// The most recent error message, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn as_submission(&self) -> Submission {
        Submission::new(self.exam.clone(), self.roll_no.clone(), self.dob.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn filled_form() -> FormState {
        FormState::new("NEET-UG", "12345", "2005-01-01")
    }

    #[test]
    fn test_empty_form_cannot_submit() {
        let state = FormState::default();
        assert!(!state.can_submit());
        assert!(!state.can_download());
    }

    #[test]
    fn test_filled_form_can_submit() {
        assert!(filled_form().can_submit());
    }

    #[test]
    fn test_begin_submit_rejects_missing_fields() {
        let mut state = FormState::new("NEET-UG", "12345", "");
        assert_eq!(state.begin_submit(), Err(FormError::MissingFields));
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.last_error().is_some());
    }

    #[test]
    fn test_begin_submit_rejects_short_roll_number_locally() {
        let mut state = FormState::new("NEET-UG", "12", "2005-01-01");
        assert_eq!(
            state.begin_submit(),
            Err(FormError::RollNumberTooShort { min: 3 })
        );
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(
            state.last_error(),
            Some("Roll number must be at least 3 characters.")
        );
    }

    #[test]
    fn test_begin_submit_clears_previous_cid_and_error() {
        let mut state = filled_form();
        state.submit_failed("previous error");
        state.begin_submit().unwrap();
        state.submit_succeeded("cid-one");
        assert_eq!(state.cid(), Some("cid-one"));

        let submission = state.begin_submit().unwrap();
        assert_eq!(submission.roll_no, "12345");
        assert!(state.cid().is_none(), "old CID must be cleared on resubmit");
        assert!(state.last_error().is_none());
        assert_eq!(state.phase(), Phase::Submitting);
    }

    #[test]
    fn test_no_concurrent_submissions() {
        let mut state = filled_form();
        state.begin_submit().unwrap();
        assert!(!state.can_submit());
        assert_eq!(state.begin_submit(), Err(FormError::NotReady));
    }

    #[test]
    fn test_submit_success_enables_download() {
        let mut state = filled_form();
        state.begin_submit().unwrap();
        assert!(!state.can_download());
        state.submit_succeeded("bafy-test");
        assert!(state.can_download());
        assert_eq!(state.cid(), Some("bafy-test"));
        assert!(state.last_error().is_none());
    }

    #[test]
    fn test_submit_failure_is_retryable() {
        let mut state = filled_form();
        state.begin_submit().unwrap();
        state.submit_failed("Missing required fields.");
        assert_eq!(state.last_error(), Some("Missing required fields."));
        assert!(state.can_submit());
        assert!(!state.can_download());
    }

    #[test]
    fn test_download_failure_keeps_cid_for_retry() {
        let mut state = filled_form();
        state.begin_submit().unwrap();
        state.submit_succeeded("bafy-test");

        let cid = state.begin_download().unwrap();
        assert_eq!(cid, "bafy-test");
        state.download_failed("Failed to fetch file from IPFS gateway");

        assert_eq!(state.cid(), Some("bafy-test"));
        assert!(state.can_download(), "download must be retryable");
        assert!(state.last_error().is_some());
    }

    #[test]
    fn test_download_gated_while_in_flight() {
        let mut state = filled_form();
        state.submit_succeeded("bafy-test");
        state.begin_download().unwrap();
        assert_eq!(state.begin_download(), Err(FormError::NotReady));
        assert!(!state.can_submit());

        state.download_succeeded();
        assert!(state.can_download());
        assert!(state.can_submit());
    }

    #[test]
    fn test_download_without_cid_rejected() {
        let mut state = filled_form();
        assert_eq!(state.begin_download(), Err(FormError::NotReady));
    }

    #[test]
    fn test_state_round_trips_through_serde() {
        let mut state = filled_form();
        state.submit_succeeded("bafy-test");
        state.download_failed("gateway unavailable");

        let json = serde_json::to_string(&state).unwrap();
        let restored: FormState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
        assert_eq!(restored.cid(), Some("bafy-test"));
    }
}
