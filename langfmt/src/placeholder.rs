//! Named placeholder substitution.
//!
//! Placeholders are written as `:name` and matched case-insensitively. The
//! casing of the placeholder as written in the message decides how the
//! replacement value is cased:
//!
//! - `:NAME`  -> value uppercased
//! - `:Name`  -> first character of the value uppercased
//! - `:name`  -> value inserted as is

use lazy_static::lazy_static;
use regex::{Captures, Regex, RegexBuilder};

lazy_static! {
    static ref PLACEHOLDER_REGEX: Regex = Regex::new(r":([^\W\d]\w*)").unwrap();
}

/// Casing convention inferred from a placeholder occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    /// Every letter is uppercase, e.g. `:NAME`.
    Upper,
    /// The first letter is uppercase, e.g. `:Name`.
    Capitalized,
    /// Anything else, e.g. `:name` or `:nAME`.
    Verbatim,
}

impl CaseStyle {
    /// Classifies the placeholder text as it appears in the message.
    pub fn of(placeholder: &str) -> Self {
        if !placeholder.chars().any(char::is_lowercase) {
            return CaseStyle::Upper;
        }

        let first_letter_unchanged = placeholder
            .chars()
            .find(|c| c.is_alphabetic())
            .is_some_and(|c| c.to_uppercase().eq(std::iter::once(c)));
        if first_letter_unchanged {
            CaseStyle::Capitalized
        } else {
            CaseStyle::Verbatim
        }
    }

    /// Applies this casing to a replacement value.
    pub fn apply(self, value: &str) -> String {
        match self {
            CaseStyle::Upper => value.to_uppercase(),
            CaseStyle::Capitalized => {
                let mut chars = value.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
            CaseStyle::Verbatim => value.to_string(),
        }
    }
}

/// Replaces every `:key` placeholder in `message` with its value.
///
/// Keys are applied longest first so that `:count` cannot eat the front of
/// `:count_total`. Each key is a single pass over the message; unknown
/// placeholders stay in the output untouched.
pub fn apply_replacements<K, V>(
    message: &str,
    replacements: impl IntoIterator<Item = (K, V)>,
) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut pairs: Vec<(K, V)> = replacements.into_iter().collect();
    pairs.sort_by(|(a, _), (b, _)| {
        let (a, b): (&str, &str) = (a.as_ref(), b.as_ref());
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });

    let mut out = message.to_string();
    for (key, value) in &pairs {
        let key: &str = key.as_ref();
        if key.is_empty() {
            continue;
        }

        let pattern = format!(":{}", regex::escape(key));
        let regex = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
            Ok(regex) => regex,
            Err(e) => {
                tracing::warn!(key, error = %e, "skipping replacement key");
                continue;
            }
        };

        let value: &str = value.as_ref();
        let replaced = regex.replace_all(&out, |caps: &Captures| {
            CaseStyle::of(&caps[0]).apply(value)
        });
        out = replaced.into_owned();
    }
    out
}

/// Extracts placeholder names (without the leading `:`) in occurrence order.
pub fn extract_placeholders(message: &str) -> Vec<String> {
    PLACEHOLDER_REGEX
        .captures_iter(message)
        .map(|caps| caps[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_style_classification() {
        assert_eq!(CaseStyle::of(":NAME"), CaseStyle::Upper);
        assert_eq!(CaseStyle::of(":Name"), CaseStyle::Capitalized);
        assert_eq!(CaseStyle::of(":name"), CaseStyle::Verbatim);
        assert_eq!(CaseStyle::of(":nAME"), CaseStyle::Verbatim);
        assert_eq!(CaseStyle::of(":COUNT_total"), CaseStyle::Capitalized);
        assert_eq!(CaseStyle::of(":_name"), CaseStyle::Verbatim);
    }

    #[test]
    fn test_case_style_apply() {
        assert_eq!(CaseStyle::Upper.apply("bob"), "BOB");
        assert_eq!(CaseStyle::Capitalized.apply("bob smith"), "Bob smith");
        assert_eq!(CaseStyle::Capitalized.apply("bOB"), "BOB");
        assert_eq!(CaseStyle::Capitalized.apply(""), "");
        assert_eq!(CaseStyle::Verbatim.apply("bOb"), "bOb");
        assert_eq!(CaseStyle::Capitalized.apply("élan"), "Élan");
    }

    #[test]
    fn test_replacement_casing_follows_placeholder() {
        assert_eq!(apply_replacements("Hello :NAME", [("name", "bob")]), "Hello BOB");
        assert_eq!(apply_replacements("Hello :Name", [("name", "bob")]), "Hello Bob");
        assert_eq!(apply_replacements("Hello :name", [("name", "bob")]), "Hello bob");
    }

    #[test]
    fn test_each_occurrence_is_cased_independently() {
        assert_eq!(
            apply_replacements(":name, :Name, :NAME", [("name", "ana")]),
            "ana, Ana, ANA"
        );
    }

    #[test]
    fn test_longest_key_wins() {
        assert_eq!(
            apply_replacements(
                ":count_total items of :count",
                [("count", "5"), ("count_total", "20")]
            ),
            "20 items of 5"
        );
    }

    #[test]
    fn test_unknown_and_unused_keys() {
        assert_eq!(apply_replacements("Hi :who", [("name", "bob")]), "Hi :who");
        assert_eq!(
            apply_replacements("No placeholders", [("name", "bob")]),
            "No placeholders"
        );
    }

    #[test]
    fn test_key_with_regex_metacharacters_is_literal() {
        assert_eq!(apply_replacements("a :x.y b :xzy", [("x.y", "1")]), "a 1 b :xzy");
    }

    #[test]
    fn test_empty_key_is_ignored() {
        assert_eq!(apply_replacements("a: b", [("", "X")]), "a: b");
    }

    #[test]
    fn test_extract_placeholders() {
        assert_eq!(
            extract_placeholders("Hello :name, at 10:30 you have :count_total items"),
            vec!["name", "count_total"]
        );
        assert!(extract_placeholders("https://example.com").is_empty());
    }
}
