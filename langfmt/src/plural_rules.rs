//! Plural form selection per locale.
//!
//! Each supported locale maps to one [`PluralRule`]; a rule turns an integer
//! count into the position of the plural form to use. Positions are local
//! to the rule (for English 0 is singular and 1 plural, Arabic uses 0..=5).
//! Locales missing from the table always select form 0.
//!
//! The rules follow the classic Zend Framework derived tables used by
//! Symfony and Laravel translators, which in turn approximate CLDR.

use std::collections::BTreeMap;

use lazy_static::lazy_static;

use crate::types::PluralCategory;

/// A family of languages sharing the same plural predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralRule {
    /// One form for every count (Japanese, Chinese, Turkish, ...).
    Invariant,
    /// Singular for exactly one (English, German, Spanish, ...).
    OneOther,
    /// Singular for zero and one (French, Hindi, ...).
    ZeroOneOther,
    /// Russian, Ukrainian, Serbo-Croatian and related.
    EastSlavic,
    CzechSlovak,
    Irish,
    Lithuanian,
    Slovenian,
    Macedonian,
    Maltese,
    Latvian,
    Polish,
    Welsh,
    Romanian,
    Arabic,
}

impl PluralRule {
    /// Selects the form position for `count`.
    pub fn form(self, count: i64) -> usize {
        let n = count;
        let n10 = count % 10;
        let n100 = count % 100;

        match self {
            PluralRule::Invariant => 0,

            PluralRule::OneOther => usize::from(n != 1),

            PluralRule::ZeroOneOther => usize::from(n != 0 && n != 1),

            PluralRule::EastSlavic => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if (2..=4).contains(&n10) && !(10..20).contains(&n100) {
                    1
                } else {
                    2
                }
            }

            PluralRule::CzechSlovak => match n {
                1 => 0,
                2..=4 => 1,
                _ => 2,
            },

            PluralRule::Irish => match n {
                1 => 0,
                2 => 1,
                _ => 2,
            },

            PluralRule::Lithuanian => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if n10 >= 2 && !(10..20).contains(&n100) {
                    1
                } else {
                    2
                }
            }

            PluralRule::Slovenian => match n100 {
                1 => 0,
                2 => 1,
                3 | 4 => 2,
                _ => 3,
            },

            PluralRule::Macedonian => usize::from(n10 != 1),

            PluralRule::Maltese => {
                if n == 1 {
                    0
                } else if n == 0 || (2..=10).contains(&n100) {
                    1
                } else if (11..=19).contains(&n100) {
                    2
                } else {
                    3
                }
            }

            PluralRule::Latvian => {
                if n == 0 {
                    0
                } else if n10 == 1 && n100 != 11 {
                    1
                } else {
                    2
                }
            }

            PluralRule::Polish => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
                    1
                } else {
                    2
                }
            }

            PluralRule::Welsh => match n {
                1 => 0,
                2 => 1,
                8 | 11 => 2,
                _ => 3,
            },

            PluralRule::Romanian => {
                if n == 1 {
                    0
                } else if n == 0 || (1..20).contains(&n100) {
                    1
                } else {
                    2
                }
            }

            PluralRule::Arabic => {
                if n == 0 {
                    0
                } else if n == 1 {
                    1
                } else if n == 2 {
                    2
                } else if (3..=10).contains(&n100) {
                    3
                } else if (11..=99).contains(&n100) {
                    4
                } else {
                    5
                }
            }
        }
    }

    /// Category label for each form position, in position order.
    pub fn categories(self) -> &'static [PluralCategory] {
        use PluralCategory::*;
        match self {
            PluralRule::Invariant => &[Other],
            PluralRule::OneOther | PluralRule::ZeroOneOther | PluralRule::Macedonian => {
                &[One, Other]
            }
            PluralRule::EastSlavic | PluralRule::Polish => &[One, Few, Many],
            PluralRule::CzechSlovak | PluralRule::Lithuanian | PluralRule::Romanian => {
                &[One, Few, Other]
            }
            PluralRule::Irish => &[One, Two, Other],
            PluralRule::Latvian => &[Zero, One, Other],
            PluralRule::Slovenian => &[One, Two, Few, Other],
            PluralRule::Maltese => &[One, Few, Many, Other],
            PluralRule::Welsh => &[One, Two, Many, Other],
            PluralRule::Arabic => &[Zero, One, Two, Few, Many, Other],
        }
    }

    /// Number of distinct forms this rule can select.
    pub fn form_count(self) -> usize {
        self.categories().len()
    }
}

lazy_static! {
    /// Static mapping from locale code → plural rule.
    static ref RULE_TABLE: BTreeMap<&'static str, PluralRule> = {
        use PluralRule::*;
        let mut m: BTreeMap<&'static str, PluralRule> = BTreeMap::new();

        for code in [
            "az","bo","dz","id","ja","jv","ka","km","kn","ko","ms","th","tr","vi","zh"
        ] {
            m.insert(code, Invariant);
        }

        for code in [
            "af","bn","bg","ca","da","de","el","en","eo","es","et","eu","fa","fi","fo",
            "fur","fy","gl","gu","ha","he","hu","is","it","ku","lb","ml","mn","mr","nah",
            "nb","ne","nl","nn","no","om","or","pa","pap","ps","pt","so","sq","sv","sw",
            "ta","te","tk","ur","zu"
        ] {
            m.insert(code, OneOther);
        }

        for code in [
            "am","bh","fil","fr","gun","hi","hy","ln","mg","nso","xbr","ti","wa"
        ] {
            m.insert(code, ZeroOneOther);
        }

        for code in ["be","bs","hr","ru","sr","uk"] {
            m.insert(code, EastSlavic);
        }

        for code in ["cs","sk"] {
            m.insert(code, CzechSlovak);
        }

        m.insert("ga", Irish);
        m.insert("lt", Lithuanian);
        m.insert("sl", Slovenian);
        m.insert("mk", Macedonian);
        m.insert("mt", Maltese);
        m.insert("lv", Latvian);
        m.insert("pl", Polish);
        m.insert("cy", Welsh);
        m.insert("ro", Romanian);
        m.insert("ar", Arabic);

        m
    };
}

/// Looks up the rule for an exact locale code such as `"ru"` or `"fil"`.
pub fn rule_for_locale(locale: &str) -> Option<PluralRule> {
    RULE_TABLE.get(locale).copied()
}

/// All locale codes with a dedicated rule, in sorted order.
pub fn supported_locales() -> impl Iterator<Item = &'static str> {
    RULE_TABLE.keys().copied()
}

/// Returns the plural form position to use for `count` in `locale`.
///
/// Unknown locales are not an error: they select form 0.
pub fn plural_form(count: i64, locale: &str) -> usize {
    match rule_for_locale(locale) {
        Some(rule) => rule.form(count),
        None => {
            tracing::trace!(locale, "no plural rule for locale, using form 0");
            0
        }
    }
}

/// Returns the category label of the form selected for `count` in `locale`.
pub fn plural_category(count: i64, locale: &str) -> PluralCategory {
    match rule_for_locale(locale) {
        Some(rule) => rule.categories()[rule.form(count)],
        None => PluralCategory::Other,
    }
}
