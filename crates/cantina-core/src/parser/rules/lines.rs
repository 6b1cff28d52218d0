//! Name and producer candidates from label lines.

use super::patterns::{NUMERIC_LINE, UNIT_PREFIX};

/// Minimum length for a line to count as a potential name; anything shorter
/// is treated as stray OCR noise.
pub const MIN_NAME_LEN: usize = 4;

/// Lines that could plausibly be a wine name or producer, in label order.
///
/// Label layouts are not standardized, so position among surviving lines is
/// the heuristic: the first candidate is the name, the second the producer.
/// Dropped lines: empty after trimming, shorter than [`MIN_NAME_LEN`],
/// purely numeric, or opening with a unit/classification token.
pub fn name_candidates(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| line.chars().count() >= MIN_NAME_LEN)
        .filter(|line| !NUMERIC_LINE.is_match(line))
        .filter(|line| !UNIT_PREFIX.is_match(line))
        .collect()
}
