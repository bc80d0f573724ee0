use super::ApiError;

/// Returns the trimmed value of a required field, or `MissingField` when it
/// is absent or blank.
pub fn require_field<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, ApiError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::missing_field(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_field() {
        assert_eq!(require_field(Some("alice"), "username").unwrap(), "alice");
        assert_eq!(require_field(Some("  bob "), "username").unwrap(), "bob");
        assert!(require_field(Some(""), "username").is_err());
        assert!(require_field(Some("   "), "username").is_err());
        assert!(matches!(
            require_field(None, "duration"),
            Err(ApiError::MissingField(field)) if field == "duration"
        ));
    }
}
