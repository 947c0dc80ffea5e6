// Package name validation and normalization

use regex::Regex;
use std::sync::OnceLock;
use crate::utils::error::{Result, ScaffoldError};

/// Optional `@scope/` prefix, then lowercase alphanumerics, `-`, `.`, `_`, `~`,
/// not starting with `.` or `_`.
const PACKAGE_NAME_PATTERN: &str = r"^(?:@[a-z0-9\-*~][a-z0-9\-*._~]*/)?[a-z0-9\-~][a-z0-9\-._~]*$";

fn package_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PACKAGE_NAME_PATTERN).expect("package name pattern is valid"))
}

fn whitespace_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

fn invalid_chars_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9\-~]+").expect("invalid char pattern is valid"))
}

/// Check whether `name` can be used verbatim as a package.json `name`.
pub fn is_valid_package_name(name: &str) -> bool {
    package_name_regex().is_match(name)
}

/// Best-effort normalization of a project name into a package name.
///
/// The result is not guaranteed to be valid (an all-symbol input collapses to
/// `"-"` or an empty string), so callers re-check with [`is_valid_package_name`].
pub fn to_valid_package_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let hyphenated = whitespace_regex().replace_all(&lowered, "-");
    let stripped = hyphenated
        .strip_prefix(['.', '_'])
        .unwrap_or(hyphenated.as_ref());
    invalid_chars_regex().replace_all(stripped, "-").into_owned()
}

/// Reject a package name that cannot be written into a manifest
pub fn ensure_valid_package_name(name: &str) -> Result<()> {
    if is_valid_package_name(name) {
        Ok(())
    } else {
        Err(ScaffoldError::InvalidName(name.to_string()))
    }
}

/// Validator hook for the package-name prompt
pub fn validate_package_name(name: &str) -> std::result::Result<(), String> {
    if is_valid_package_name(name) {
        Ok(())
    } else {
        Err("Invalid package.json name".to_string())
    }
}
