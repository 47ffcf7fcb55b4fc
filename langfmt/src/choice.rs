//! Selecting one variant out of a pipe-separated plural message.
//!
//! A message such as
//!
//! ```text
//! {0} No apples|[1,19] Some apples|[20,*] Many apples
//! ```
//!
//! lists variants separated by `|`. Variants may be prefixed by an interval
//! condition; the first one whose interval contains the count is used.
//! Otherwise the variants are indexed by the locale's plural form, so
//! `"apple|apples"` works for English and `"яблоко|яблока|яблок"` for Russian.

use std::collections::BTreeMap;

use crate::{
    error::Error, interval::Interval, placeholder::apply_replacements, plural_rules::plural_form,
};

/// A `|`-separated segment, split into its optional condition and its text.
struct Segment<'a> {
    condition: Option<Interval>,
    text: &'a str,
}

impl<'a> Segment<'a> {
    fn parse(segment: &'a str) -> Result<Self, Error> {
        let trimmed = segment.trim_start();
        let end = match trimmed.as_bytes().first() {
            Some(b'{') => trimmed.find('}'),
            Some(b'[') | Some(b']') => trimmed[1..]
                .find(|c: char| c == '[' || c == ']')
                .map(|i| i + 1),
            _ => None,
        };

        let Some(end) = end else {
            return Ok(Segment {
                condition: None,
                text: segment,
            });
        };

        let prefix = &trimmed[..=end];
        // `[beta] feature` is text, not a range.
        if !prefix.starts_with('{') && !prefix.contains(',') {
            return Ok(Segment {
                condition: None,
                text: segment,
            });
        }

        Ok(Segment {
            condition: Some(Interval::parse(prefix)?),
            text: &trimmed[end + 1..],
        })
    }
}

/// Picks the variant of `message` to use for `count` in `locale`.
///
/// Every interval prefix in the message is parsed up front, so a malformed
/// condition is reported even when an earlier variant would have matched.
pub fn choose(message: &str, count: i64, locale: &str) -> Result<String, Error> {
    let segments = message
        .split('|')
        .map(Segment::parse)
        .collect::<Result<Vec<_>, _>>()?;

    let explicit = segments.iter().find(|segment| {
        segment
            .condition
            .as_ref()
            .is_some_and(|interval| interval.contains(count))
    });
    if let Some(segment) = explicit {
        return Ok(segment.text.trim().to_string());
    }

    let index = if segments.len() > 1 {
        plural_form(count, locale)
    } else {
        0
    };
    let chosen = segments
        .get(index)
        .or_else(|| segments.first())
        .map_or("", |segment| segment.text);
    Ok(chosen.trim().to_string())
}

/// Chooses a variant and fills its placeholders.
///
/// A `count` replacement holding the count is added unless the caller
/// already supplies one.
pub fn trans_choice<K, V>(
    message: &str,
    count: i64,
    locale: &str,
    replacements: impl IntoIterator<Item = (K, V)>,
) -> Result<String, Error>
where
    K: Into<String>,
    V: Into<String>,
{
    let chosen = choose(message, count, locale)?;

    let mut values: BTreeMap<String, String> = replacements
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect();
    values
        .entry("count".to_string())
        .or_insert_with(|| count.to_string());

    Ok(apply_replacements(&chosen, &values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_index_selects_variant() {
        assert_eq!(choose("apple|apples", 1, "en").unwrap(), "apple");
        assert_eq!(choose("apple|apples", 2, "en").unwrap(), "apples");
        assert_eq!(choose("pomme|pommes", 0, "fr").unwrap(), "pomme");
        assert_eq!(choose("яблоко|яблока|яблок", 22, "ru").unwrap(), "яблока");
        assert_eq!(choose("яблоко|яблока|яблок", 11, "ru").unwrap(), "яблок");
    }

    #[test]
    fn test_single_variant_is_always_used() {
        assert_eq!(choose("items", 5, "en").unwrap(), "items");
    }

    #[test]
    fn test_missing_variant_falls_back_to_first() {
        assert_eq!(choose("one|few", 5, "ru").unwrap(), "one");
    }

    #[test]
    fn test_interval_variants_take_precedence() {
        let message = "{0} none|[1,19] some|[20,*] many";
        assert_eq!(choose(message, 0, "en").unwrap(), "none");
        assert_eq!(choose(message, 7, "en").unwrap(), "some");
        assert_eq!(choose(message, 500, "en").unwrap(), "many");
    }

    #[test]
    fn test_unmatched_conditions_are_stripped() {
        // Conditioned variants still occupy their plural position.
        assert_eq!(choose("{0} none|others", 1, "en").unwrap(), "none");
        assert_eq!(choose("{0} none|others", 2, "en").unwrap(), "others");
        assert_eq!(choose("[1,1] one|]1,*] many", -4, "en").unwrap(), "many");
    }

    #[test]
    fn test_bracketed_text_without_comma_is_not_a_condition() {
        assert_eq!(choose("[beta] feature", 3, "en").unwrap(), "[beta] feature");
    }

    #[test]
    fn test_malformed_condition_is_an_error() {
        let err = choose("{0} none|{x} broken", 0, "en").unwrap_err();
        assert!(matches!(err, Error::MalformedInterval { .. }));
    }

    #[test]
    fn test_trans_choice_adds_count() {
        let out = trans_choice("{0} No apples|[1,*] :count apples", 3, "en", [("a", "b")]);
        assert_eq!(out.unwrap(), "3 apples");

        let out = trans_choice(":Name has one|:Name has :count", 1, "en", [("name", "ana")]);
        assert_eq!(out.unwrap(), "Ana has one");
    }

    #[test]
    fn test_trans_choice_keeps_caller_count() {
        let out = trans_choice(":count apples", 3, "en", [("count", "three")]);
        assert_eq!(out.unwrap(), "three apples");
    }
}
