//! Wire types shared by the lookup endpoint and the client.
//!
//! A [`Submission`] is transient: it exists for the duration of one request
//! and is never persisted. Field names on the wire follow the endpoint
//! contract (`exam`, `rollNo`, `dob`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Minimum accepted roll number length. Shorter roll numbers are rejected
/// client-side before any request is made.
pub const MIN_ROLL_NO_LEN: usize = 3;

/// One result request: exam, roll number, and date of birth.
///
/// All fields default to empty strings when absent from the request body so
/// that a well-formed JSON object with missing keys deserializes cleanly and
/// is then rejected by [`Submission::is_complete`] (a 400), while a body that
/// is not JSON at all fails deserialization (a 500).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub exam: String,
    #[serde(default, rename = "rollNo")]
    pub roll_no: String,
    #[serde(default)]
    pub dob: String,
}

impl Submission {
    /// Creates a submission from its three fields.
    pub fn new(exam: impl Into<String>, roll_no: impl Into<String>, dob: impl Into<String>) -> Self {
        Self {
            exam: exam.into(),
            roll_no: roll_no.into(),
            dob: dob.into(),
        }
    }

    /// Returns true when all three fields are non-empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.exam.is_empty() && !self.roll_no.is_empty() && !self.dob.is_empty()
    }
}

/// Successful lookup response: the content identifier for the result file.
///
/// Held in client memory only until a new submission is made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    #[serde(default)]
    pub cid: String,
}

/// The exams the portal knows about.
///
/// The endpoint itself accepts any non-empty exam string; this enum backs the
/// CLI exam picker with the published list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exam {
    CbseClass10,
    CbseClass12,
    JeeMain,
    NeetUg,
    StateBoard,
}

impl Exam {
    /// The wire value sent to the lookup endpoint.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Exam::CbseClass10 => "CBSE-Class-10",
            Exam::CbseClass12 => "CBSE-Class-12",
            Exam::JeeMain => "JEE-Main",
            Exam::NeetUg => "NEET-UG",
            Exam::StateBoard => "State-Board",
        }
    }

    /// All known exams, in display order.
    #[must_use]
    pub fn all() -> &'static [Exam] {
        &[
            Exam::CbseClass10,
            Exam::CbseClass12,
            Exam::JeeMain,
            Exam::NeetUg,
            Exam::StateBoard,
        ]
    }
}

impl fmt::Display for Exam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Exam {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Exam::all()
            .iter()
            .copied()
            .find(|exam| exam.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let known: Vec<&str> = Exam::all().iter().map(|e| e.as_str()).collect();
                format!("unknown exam '{s}' (known: {})", known.join(", "))
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_complete_when_all_fields_present() {
        let submission = Submission::new("NEET-UG", "12345", "2005-01-01");
        assert!(submission.is_complete());
    }

    #[test]
    fn test_submission_incomplete_when_any_field_empty() {
        assert!(!Submission::new("", "12345", "2005-01-01").is_complete());
        assert!(!Submission::new("NEET-UG", "", "2005-01-01").is_complete());
        assert!(!Submission::new("NEET-UG", "12345", "").is_complete());
        assert!(!Submission::default().is_complete());
    }

    #[test]
    fn test_submission_uses_wire_field_names() {
        let submission = Submission::new("JEE-Main", "AB-12", "2004-06-15");
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["exam"], "JEE-Main");
        assert_eq!(json["rollNo"], "AB-12");
        assert_eq!(json["dob"], "2004-06-15");
    }

    #[test]
    fn test_submission_missing_keys_deserialize_to_empty() {
        let submission: Submission = serde_json::from_str(r#"{"exam":"NEET-UG"}"#).unwrap();
        assert_eq!(submission.exam, "NEET-UG");
        assert!(submission.roll_no.is_empty());
        assert!(submission.dob.is_empty());
        assert!(!submission.is_complete());
    }

    #[test]
    fn test_exam_round_trips_through_from_str() {
        for exam in Exam::all() {
            assert_eq!(Exam::from_str(exam.as_str()).unwrap(), *exam);
        }
    }

    #[test]
    fn test_exam_from_str_is_case_insensitive() {
        assert_eq!(Exam::from_str("neet-ug").unwrap(), Exam::NeetUg);
        assert_eq!(Exam::from_str("JEE-MAIN").unwrap(), Exam::JeeMain);
    }

    #[test]
    fn test_exam_from_str_rejects_unknown_exam() {
        let err = Exam::from_str("SAT").unwrap_err();
        assert!(err.contains("unknown exam"), "got: {err}");
        assert!(err.contains("NEET-UG"), "should list known exams: {err}");
    }
}
