//! Vintage year extraction.

use super::patterns::VINTAGE_YEAR;

/// Extract the vintage: first 4-digit token in [1900, 2030], document order.
pub fn extract_vintage(text: &str) -> Option<u16> {
    VINTAGE_YEAR
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
}
