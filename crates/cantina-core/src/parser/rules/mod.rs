//! Rule-based field extractors for wine labels.
//!
//! Each rule is an independent pass over the same raw text; none of them can
//! fail, they only decline to match. Gazetteer and code sets are fixed closed
//! lists: unknown values are left absent rather than guessed.

pub mod alcohol;
pub mod denomination;
pub mod lines;
pub mod patterns;
pub mod region;
pub mod vintage;

pub use alcohol::extract_alcohol;
pub use denomination::extract_denomination;
pub use lines::{name_candidates, MIN_NAME_LEN};
pub use region::{extract_region, REGIONS};
pub use vintage::extract_vintage;
