/// Static C array holding a complete bitmap file
pub mod array;
/// Alpha-only glyph tables for anti-aliased monospace fonts
pub mod font;

use crate::serde::{self, strip_name, to_ident};

// First line of every generated file
const BANNER: &str = "/* Generated with argb2c */";

/// C identifier and include guard derived from a file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CName {
    pub ident: String,
    pub guard: String,
}

impl CName {
    pub(crate) fn new(name: &str) -> Result<Self, serde::error::Error> {
        let stripped = strip_name(name)?;
        // guards never start with a digit, only the identifier needs the prefix
        let guard = format!("INCLUDE_{}_H_", stripped.to_uppercase());
        let ident = to_ident(&stripped);
        Ok(Self { ident, guard })
    }
}
