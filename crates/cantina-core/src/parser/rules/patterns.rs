//! Common regex patterns for label field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Vintage year: 1900-2029 plus the literal 2030
    pub static ref VINTAGE_YEAR: Regex = Regex::new(
        r"\b(19[0-9]{2}|20[0-2][0-9]|2030)\b"
    ).unwrap();

    // Denomination codes, whole-word (DOCG listed before DOC so the longer
    // token wins at the same position)
    pub static ref DENOMINATION: Regex = Regex::new(
        r"(?i)\b(DOCG|DOC|IGT|DOP|IGP)\b"
    ).unwrap();

    // Alcohol strength: 1-2 digits, optional 1-digit fraction with comma or
    // dot separator, percent sign required, optional "vol" marker
    pub static ref ALCOHOL_STRENGTH: Regex = Regex::new(
        r"(?i)(\d{1,2}[,.]?\d?)\s*%\s*(vol)?"
    ).unwrap();

    // Lines that are nothing but digits
    pub static ref NUMERIC_LINE: Regex = Regex::new(
        r"^\d+$"
    ).unwrap();

    // Lines opening with a unit or classification token; never a wine name
    pub static ref UNIT_PREFIX: Regex = Regex::new(
        r"(?i)^(DOCG|DOC|IGT|vol|%|ml|cl|lt)"
    ).unwrap();
}
