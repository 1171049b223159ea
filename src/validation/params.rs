//! Coercion of raw form fields into the values the roster operates on.
//!
//! The page submits every field as text, and its numeric inputs only ever
//! send plain decimal notation. Numbers are read as decimal floats:
//! surrounding whitespace is ignored, an empty field counts as zero and
//! anything unparsable is NaN. Other notations such as hex literals are not
//! recognised. The roster operations then reject zero ids and non-positive
//! or non-finite frequencies without reporting an error.

use crate::models::user::UserId;

/// Largest integer a JSON number carries exactly (`2^53 - 1`)
pub const MAX_USER_ID: u64 = (1 << 53) - 1;

/// Convert a form field to a number. Empty means `0.0`, garbage means NaN.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Convert a form field or path segment to a user id.
///
/// Anything that is not a positive whole number that fits the id type maps
/// to `UserId(0)`, which never matches a record.
pub fn coerce_user_id(raw: &str) -> UserId {
    let n = coerce_number(raw);
    if n.is_finite() && n > 0.0 && n.fract() == 0.0 && n <= MAX_USER_ID as f64 {
        UserId(n as u64)
    } else {
        UserId(0)
    }
}

/// Whether the confirmation form was answered affirmatively
pub fn is_confirmed(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "yes" | "true" | "on" | "1"
    )
}
