//! Denomination code extraction.

use super::patterns::DENOMINATION;

/// Extract the denomination: first whole-word match among the closed set of
/// classification codes, normalized to uppercase.
pub fn extract_denomination(text: &str) -> Option<String> {
    DENOMINATION
        .captures(text)
        .map(|caps| caps[1].to_uppercase())
}
