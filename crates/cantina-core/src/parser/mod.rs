//! Heuristic label parser.
//!
//! Turns noisy, unordered recognized text into a [`CandidateRecord`]. Pure
//! and total: parsing never fails, missing fields are structurally absent.

pub mod rules;

use tracing::debug;

use crate::record::{CandidateRecord, ConfidenceTier};

use rules::{
    extract_alcohol, extract_denomination, extract_region, extract_vintage, name_candidates,
};

/// Deterministic rule-based label parser.
///
/// Stateless with respect to call history; repeated calls on the same text
/// yield identical records.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelParser;

impl LabelParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse recognized text into a candidate record.
    ///
    /// Fields are extracted in independent passes over the same text, not
    /// sequentially. The worst case is an all-empty record with confidence
    /// [`ConfidenceTier::Low`].
    pub fn parse(&self, text: &str) -> CandidateRecord {
        let mut record = CandidateRecord::empty(text);

        if let Some(year) = extract_vintage(text) {
            record.vintage = Some(year);
            // A plausible vintage is the strongest single signal on a label.
            record.confidence = ConfidenceTier::Medium;
        }

        if let Some(region) = extract_region(text) {
            record.region = region.to_string();
        }

        record.denomination = extract_denomination(text);
        record.alcohol = extract_alcohol(text);

        let candidates = name_candidates(text);
        if let Some(name) = candidates.first() {
            record.name = (*name).to_string();
        }
        if let Some(producer) = candidates.get(1) {
            record.producer = (*producer).to_string();
        }

        debug!(
            "parsed label: name={:?} vintage={:?} region={:?} confidence={:?}",
            record.name, record.vintage, record.region, record.confidence
        );

        record
    }
}

/// Parse recognized text with the default parser.
pub fn parse(text: &str) -> CandidateRecord {
    LabelParser::new().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn barolo_label_scenario() {
        let text = "Barolo Riserva\nGiacomo Conterno\nDOCG\n2016\n14.5% vol";
        let record = parse(text);

        assert_eq!(record.name, "Barolo Riserva");
        assert_eq!(record.producer, "Giacomo Conterno");
        assert_eq!(record.vintage, Some(2016));
        assert_eq!(record.denomination, Some("DOCG".to_string()));
        assert_eq!(record.alcohol, Some("14.5".to_string()));
        assert_eq!(record.confidence, ConfidenceTier::Medium);
        assert_eq!(record.region, "");
        assert_eq!(record.raw_text, text);
    }

    #[test]
    fn out_of_range_year_keeps_confidence_low() {
        let record = parse("2031 random noise 12");
        assert_eq!(record.vintage, None);
        assert_eq!(record.confidence, ConfidenceTier::Low);
    }

    #[test]
    fn empty_input_yields_empty_record() {
        let record = parse("");
        assert_eq!(record, CandidateRecord::empty(""));
    }

    #[test]
    fn never_fails_on_non_alphabetic_input() {
        let record = parse("!!! ### 12 \u{0} ---");
        assert_eq!(record.vintage, None);
        assert_eq!(record.region, "");
        assert_eq!(record.confidence, ConfidenceTier::Low);
    }

    #[test]
    fn parse_is_deterministic() {
        let text = "Chianti Classico\nAntinori\nDOCG\n2019\n13,5% vol\nToscana";
        assert_eq!(parse(text), parse(text));
    }

    #[test]
    fn fields_are_contained_in_raw_text() {
        let text = "Chianti Classico\nAntinori\ndocg\n2019\n13,5% vol\nTOSCANA";
        let record = parse(text);

        assert!(text.contains(&record.name));
        assert!(text.contains(&record.producer));
        // Normalizations of substrings: uppercase code, comma to dot.
        assert_eq!(record.denomination.as_deref(), Some("DOCG"));
        assert_eq!(record.alcohol.as_deref(), Some("13.5"));
        assert_eq!(record.region, "Toscana");
        assert_eq!(record.vintage, Some(2019));
    }

    #[test]
    fn region_tie_break_follows_gazetteer_order() {
        let record = parse("imbottigliato in Veneto da cantina del Piemonte");
        assert_eq!(record.region, "Piemonte");
    }

    #[test]
    fn single_line_label_has_no_producer() {
        let record = parse("Barbaresco");
        assert_eq!(record.name, "Barbaresco");
        assert_eq!(record.producer, "");
    }
}
