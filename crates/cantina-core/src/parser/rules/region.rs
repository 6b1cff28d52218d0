//! Region extraction against a fixed gazetteer.

/// Known wine regions, ordered.
///
/// The order is load-bearing: when a label mentions several regions, the
/// earliest gazetteer entry wins regardless of where it appears in the text.
/// Kept as a slice, not a set, for that reason.
pub const REGIONS: &[&str] = &[
    "Piemonte",
    "Toscana",
    "Veneto",
    "Friuli",
    "Alto Adige",
    "Südtirol",
    "Lombardia",
    "Sicilia",
    "Puglia",
    "Campania",
    "Sardegna",
    "Umbria",
    "Marche",
    "Abruzzo",
    "Lazio",
    "Trentino",
    "Liguria",
    "Calabria",
    "Basilicata",
    "Valle d'Aosta",
    "Molise",
    "Emilia",
    "Romagna",
];

/// Extract the region: first gazetteer entry contained anywhere in the text,
/// case-insensitive. Unknown regions are left absent, never guessed.
pub fn extract_region(text: &str) -> Option<&'static str> {
    let haystack = text.to_lowercase();
    REGIONS
        .iter()
        .find(|region| haystack.contains(&region.to_lowercase()))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_case_insensitively() {
        assert_eq!(extract_region("Vino di TOSCANA"), Some("Toscana"));
        assert_eq!(extract_region("südtirol - alto adige"), Some("Alto Adige"));
    }

    #[test]
    fn gazetteer_order_breaks_ties() {
        // Veneto appears first in the text, Piemonte first in the gazetteer.
        assert_eq!(extract_region("Veneto e Piemonte"), Some("Piemonte"));
    }

    #[test]
    fn matching_is_not_line_bounded() {
        assert_eq!(extract_region("riserva\nspeciale del\nFriuli"), Some("Friuli"));
    }

    #[test]
    fn unknown_regions_stay_absent() {
        assert_eq!(extract_region("Bordeaux Supérieur"), None);
        assert_eq!(extract_region(""), None);
    }

    #[test]
    fn apostrophe_entry_matches() {
        assert_eq!(extract_region("VALLE D'AOSTA DOP"), Some("Valle d'Aosta"));
    }
}
