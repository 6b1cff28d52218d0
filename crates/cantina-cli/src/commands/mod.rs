//! CLI command implementations.

pub mod digitize;
pub mod parse;
