use std::path::Path;
use unic_langid::LanguageIdentifier;

/// Validate file path exists and is readable
pub fn validate_file_path(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        return Err(format!("File does not exist: {}", path));
    }

    if !path_obj.is_file() {
        return Err(format!("Path is not a file: {}", path));
    }

    Ok(())
}

/// Validate language code format using unic-langid.
///
/// POSIX names such as `pt_BR` are accepted; the encoding suffix is not.
pub fn validate_language_code(lang: &str) -> Result<(), String> {
    if lang.is_empty() {
        return Err("Language code cannot be empty".to_string());
    }

    match lang.replace('_', "-").parse::<LanguageIdentifier>() {
        Ok(_) => Ok(()),
        Err(_) => Err(format!(
            "Invalid language code format: {}. Expected valid BCP 47 language identifier",
            lang
        )),
    }
}

/// Parse a `name=value` replacement argument.
///
/// Only the first `=` separates; the value may contain further `=` signs
/// and may be empty.
pub fn parse_replacement(arg: &str) -> Result<(String, String), String> {
    let Some((name, value)) = arg.split_once('=') else {
        return Err(format!("Invalid replacement '{}': expected name=value", arg));
    };

    let name = name.trim().trim_start_matches(':');
    if name.is_empty() {
        return Err(format!("Invalid replacement '{}': name cannot be empty", arg));
    }
    if !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(format!(
            "Invalid replacement '{}': name may only contain letters, digits and '_'",
            arg
        ));
    }

    Ok((name.to_string(), value.to_string()))
}
