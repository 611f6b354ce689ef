//! Shared validation helpers used by the section validators.

use regex::Regex;
use std::sync::LazyLock;

static CLASS_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_-]*$").expect("static class-name pattern must compile")
});

/// Push an error if `value` is outside `[min, max]` (float).
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error unless `value` is a single usable CSS class token.
pub(crate) fn validate_class_token(errors: &mut Vec<String>, name: &str, value: &str) {
    if !CLASS_TOKEN_RE.is_match(value) {
        errors.push(format!("{name} = {value:?} is not a valid class name"));
    }
}
