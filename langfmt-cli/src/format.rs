use std::{collections::BTreeMap, fs};

use langfmt::{apply_replacements, flatten_str, infer_locale, language_of, trans_choice};

use crate::validation::{validate_file_path, validate_language_code};

/// Locale used when neither `--locale` nor the environment provide one.
pub const DEFAULT_LOCALE: &str = "en";

/// Where the message template comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSource {
    Inline(String),
    Catalog { path: String, key: String },
}

/// Everything needed to render one message.
#[derive(Debug, Clone)]
pub struct FormatRequest {
    pub source: MessageSource,
    pub count: Option<i64>,
    pub locale: String,
    pub replacements: Vec<(String, String)>,
}

/// Resolve the locale to use: explicit argument, then environment, then default.
pub fn resolve_locale(explicit: Option<&str>) -> Result<String, String> {
    if let Some(lang) = explicit {
        validate_language_code(lang)?;
        return language_of(lang).map_err(|e| e.to_string());
    }

    match infer_locale() {
        Some(lang) => Ok(lang),
        None => {
            tracing::debug!(
                "no locale in environment, falling back to {}",
                DEFAULT_LOCALE
            );
            Ok(DEFAULT_LOCALE.to_string())
        }
    }
}

/// Read a JSON catalog file and flatten it to dotted keys.
pub fn load_catalog(path: &str) -> Result<BTreeMap<String, String>, String> {
    validate_file_path(path)?;
    let text = fs::read_to_string(path).map_err(|e| format!("Error reading {}: {}", path, e))?;
    flatten_str(&text).map_err(|e| format!("Error loading catalog {}: {}", path, e))
}

/// Fetch the raw message template for a request.
pub fn resolve_message(source: &MessageSource) -> Result<String, String> {
    match source {
        MessageSource::Inline(message) => Ok(message.clone()),
        MessageSource::Catalog { path, key } => {
            let catalog = load_catalog(path)?;
            tracing::debug!(path = %path, entries = catalog.len(), "loaded catalog");
            catalog
                .get(key)
                .cloned()
                .ok_or_else(|| format!("Key '{}' not found in {}", key, path))
        }
    }
}

/// Render a message: choose the plural variant when a count is given, then
/// substitute placeholders.
pub fn render(request: &FormatRequest) -> Result<String, String> {
    let message = resolve_message(&request.source)?;
    let pairs = request
        .replacements
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()));

    match request.count {
        Some(count) => {
            trans_choice(&message, count, &request.locale, pairs).map_err(|e| e.to_string())
        }
        None => Ok(apply_replacements(&message, pairs)),
    }
}
