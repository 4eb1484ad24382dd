//! Field length checks shared by the user and track services.
//!
//! Lengths are counted in characters, matching PostgreSQL `VARCHAR(n)`.

use crate::error::AppError;
use serde_json::json;

/// Rejects `value` if it is longer than `max` characters.
///
/// # Errors
///
/// Returns [`AppError::Validation`] naming the field and its limit.
pub fn check_max_len(field: &'static str, value: &str, max: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len > max {
        return Err(AppError::bad_request(
            format!("Field '{field}' is too long"),
            json!({ "field": field, "max": max, "actual": len }),
        ));
    }
    Ok(())
}

/// Like [`check_max_len`], but also rejects an empty value.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if `value` is empty or too long.
pub fn check_required(field: &'static str, value: &str, max: usize) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::bad_request(
            format!("Field '{field}' must not be empty"),
            json!({ "field": field }),
        ));
    }
    check_max_len(field, value, max)
}

/// Applies [`check_max_len`] to a field only when it was supplied.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the supplied value is too long.
pub fn check_optional(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => check_max_len(field, v, max),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_max_len_boundary() {
        let at_limit = "a".repeat(200);
        let over_limit = "a".repeat(201);

        assert!(check_max_len("title", &at_limit, 200).is_ok());

        let err = check_max_len("title", &over_limit, 200).unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_check_max_len_counts_characters() {
        // 50 two-byte characters still fit a 50-character limit.
        let name = "é".repeat(50);
        assert!(check_max_len("username", &name, 50).is_ok());
    }

    #[test]
    fn test_check_required_rejects_empty() {
        assert!(check_required("title", "", 200).is_err());
        assert!(check_required("title", "Song", 200).is_ok());
    }

    #[test]
    fn test_check_optional_skips_unset() {
        assert!(check_optional("url", None, 100).is_ok());
        assert!(check_optional("url", Some(&"u".repeat(101)), 100).is_err());
    }
}
