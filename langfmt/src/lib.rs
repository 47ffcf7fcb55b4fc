#![forbid(unsafe_code)]
//! Locale-aware message formatting for Rust.
//!
//! Turns a raw translation message, a count, a locale and a set of named
//! values into the string shown to the user.
//!
//! # Quick Start
//!
//! ```rust
//! use langfmt::{apply_replacements, plural_form, test_interval, trans_choice};
//!
//! // Which plural form does Russian use for 21?
//! assert_eq!(plural_form(21, "ru"), 0);
//!
//! // Does 3 fall into the half-open range [2, 5)?
//! assert!(test_interval(3, "[2,5[")?);
//!
//! // Placeholders keep the casing they were written with.
//! assert_eq!(apply_replacements("Hello :Name", [("name", "bob")]), "Hello Bob");
//!
//! // Or do all of it at once.
//! let line = trans_choice("{0} No apples|[1,*] :count apples", 4, "en", [("a", "b")])?;
//! assert_eq!(line, "4 apples");
//! # Ok::<(), langfmt::Error>(())
//! ```
//!
//! # Features
//!
//! - Plural form selection for 96 locale codes
//! - Interval conditions such as `{0}`, `[1,19]` or `]19,*]`
//! - Case-preserving `:placeholder` substitution
//! - Nested JSON catalog flattening and locale inference from the environment

pub mod catalog;
pub mod choice;
pub mod error;
pub mod interval;
pub mod locale;
pub mod placeholder;
pub mod plural_rules;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    catalog::{flatten, flatten_str},
    choice::{choose, trans_choice},
    error::Error,
    interval::{Bound, Interval, test_interval},
    locale::{infer_locale, language_of},
    placeholder::{CaseStyle, apply_replacements, extract_placeholders},
    plural_rules::{PluralRule, plural_category, plural_form, rule_for_locale, supported_locales},
    types::PluralCategory,
};
