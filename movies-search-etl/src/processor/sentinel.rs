//! Placeholder-value normalization.

/// Placeholder the source uses for an unknown value.
pub const NOT_AVAILABLE: &str = "N/A";

/// Map the placeholder to `None`; every other value passes through unchanged.
pub fn normalize_sentinel(value: Option<String>) -> Option<String> {
    value.filter(|v| v != NOT_AVAILABLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_becomes_none() {
        assert_eq!(normalize_sentinel(Some("N/A".to_string())), None);
    }

    #[test]
    fn test_other_values_pass_through() {
        assert_eq!(normalize_sentinel(Some("X".to_string())), Some("X".to_string()));
        assert_eq!(normalize_sentinel(Some("n/a".to_string())), Some("n/a".to_string()));
        assert_eq!(normalize_sentinel(Some(String::new())), Some(String::new()));
        assert_eq!(normalize_sentinel(None), None);
    }
}
