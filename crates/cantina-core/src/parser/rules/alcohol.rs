//! Alcohol strength extraction.

use super::patterns::ALCOHOL_STRENGTH;

/// Extract the alcohol strength token, normalizing a decimal comma to a dot.
///
/// The percent sign is structurally required; "14.5 vol" without it does not
/// match. Real labels sometimes omit the sign, but relaxing the pattern would
/// change observed behavior and is deliberately not done here.
pub fn extract_alcohol(text: &str) -> Option<String> {
    ALCOHOL_STRENGTH
        .captures(text)
        .map(|caps| caps[1].replace(',', "."))
}
