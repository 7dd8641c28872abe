//! Import/export mapper for delimited text and spreadsheet files.
//!
//! Import accepts many vendor/locale header spellings and maps them onto
//! the normalized schemas; export always writes the canonical keys. The
//! two directions are intentionally asymmetric.

pub mod export;
pub mod import;
pub mod numeric;
pub mod sheet;
