//! CLI library for testing purposes

pub mod format;
pub mod validation;

pub use format::{FormatRequest, MessageSource, load_catalog, render, resolve_locale};
pub use validation::parse_replacement;
