//! Download filename derivation.
//!
//! The saved result file is named from the sanitized exam and roll number:
//! `{exam}-{roll}-result`. Both sanitizers are idempotent, so a name that has
//! already been cleaned passes through unchanged.

/// Lowercases the exam name and collapses whitespace runs to single hyphens.
///
/// `"JEE Main"` becomes `"jee-main"`.
#[must_use]
pub fn sanitize_exam(exam: &str) -> String {
    let mut out = String::with_capacity(exam.len());
    let mut prev_ws = false;
    for ch in exam.chars() {
        if ch.is_whitespace() {
            if !prev_ws {
                out.push('-');
                prev_ws = true;
            }
        } else {
            out.extend(ch.to_lowercase());
            prev_ws = false;
        }
    }
    out
}

/// Strips every character outside letters, digits, underscore, and hyphen.
///
/// `"AB-12/34"` becomes `"AB-1234"`. Case is preserved.
#[must_use]
pub fn sanitize_roll(roll: &str) -> String {
    roll.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
        .collect()
}

/// Builds the suggested filename for a downloaded result.
#[must_use]
pub fn result_filename(exam: &str, roll: &str) -> String {
    format!("{}-{}-result", sanitize_exam(exam), sanitize_roll(roll))
}
