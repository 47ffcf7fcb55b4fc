//! Locale normalization and inference from the host environment.

use unic_langid::LanguageIdentifier;

use crate::error::Error;

/// Environment variables consulted by [`infer_locale`], highest priority first.
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Reduces a locale string to its lowercase language subtag.
///
/// Accepts BCP 47 tags (`pt-BR`) as well as POSIX locale names
/// (`en_US.UTF-8`, `de_DE@euro`).
pub fn language_of(locale: &str) -> Result<String, Error> {
    let base = locale
        .split(|c: char| c == '.' || c == '@')
        .next()
        .unwrap_or_default()
        .trim();
    if base.is_empty() {
        return Err(Error::InvalidLocale(locale.to_string()));
    }

    let normalized = base.replace('_', "-");
    let lang_id: LanguageIdentifier = normalized
        .parse()
        .map_err(|_| Error::InvalidLocale(locale.to_string()))?;
    Ok(lang_id.language.as_str().to_string())
}

/// Infers the active language from variables provided by `lookup`.
///
/// The first of `LC_ALL`, `LC_MESSAGES` and `LANG` that is set, is not the
/// `C`/`POSIX` locale, and parses wins.
pub fn infer_locale_from<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    for name in LOCALE_ENV_VARS {
        let Some(value) = lookup(name) else {
            continue;
        };
        let value = value.trim();
        let base = value.split('.').next().unwrap_or_default();
        if base.is_empty() || base == "C" || base == "POSIX" {
            continue;
        }

        match language_of(value) {
            Ok(language) => {
                tracing::debug!(variable = name, value, language = %language, "inferred locale");
                return Some(language);
            }
            Err(e) => {
                tracing::debug!(variable = name, value, error = %e, "ignoring locale variable");
            }
        }
    }
    None
}

/// Infers the active language from the process environment.
pub fn infer_locale() -> Option<String> {
    infer_locale_from(|name| std::env::var(name).ok())
}
