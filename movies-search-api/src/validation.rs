//! Query parameter validation for the movie list endpoint.

use std::collections::HashMap;

use movies_search_shared::{MovieQuery, SortOrder};

/// Outcome of validating list parameters.
///
/// `query` holds the defaults merged with every valid parameter; it must only
/// be used when `success` is true.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedArgs {
    pub success: bool,
    pub query: MovieQuery,
    pub errors: Vec<String>,
}

/// Validate the raw query string of `GET /api/movies/`.
///
/// Recognized parameters are `limit`, `page`, `sort`, `sort_order` and
/// `search`; anything else is ignored.
pub fn validate_args(args: &HashMap<String, String>) -> ValidatedArgs {
    let mut query = MovieQuery::default();
    let mut errors = Vec::new();

    if let Some(raw) = args.get("limit") {
        match parse_positive("limit", raw) {
            Ok(limit) => query.limit = limit,
            Err(e) => errors.push(e),
        }
    }

    if let Some(raw) = args.get("page") {
        match parse_positive("page", raw) {
            Ok(page) => query.page = page,
            Err(e) => errors.push(e),
        }
    }

    if let Some(raw) = args.get("sort") {
        if is_sort_field(raw) {
            query.sort_field = raw.clone();
        } else {
            errors.push(format!("sort must be a field name, got '{}'", raw));
        }
    }

    if let Some(raw) = args.get("sort_order") {
        match raw.parse::<SortOrder>() {
            Ok(order) => query.sort_order = order,
            Err(e) => errors.push(e),
        }
    }

    query.search_text = args.get("search").filter(|text| !text.is_empty()).cloned();

    ValidatedArgs {
        success: errors.is_empty(),
        query,
        errors,
    }
}

fn parse_positive(name: &str, raw: &str) -> Result<usize, String> {
    raw.parse::<usize>()
        .ok()
        .filter(|&value| value >= 1)
        .ok_or_else(|| format!("{} must be a positive integer, got '{}'", name, raw))
}

fn is_sort_field(raw: &str) -> bool {
    !raw.is_empty()
        && raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let validated = validate_args(&HashMap::new());

        assert!(validated.success);
        assert_eq!(validated.query, MovieQuery::default());
    }

    #[test]
    fn test_all_parameters() {
        let validated = validate_args(&args(&[
            ("limit", "10"),
            ("page", "3"),
            ("sort", "imdb_rating"),
            ("sort_order", "DESC"),
            ("search", "star"),
        ]));

        assert!(validated.success);
        assert_eq!(
            validated.query,
            MovieQuery::search("star")
                .with_limit(10)
                .with_page(3)
                .with_sort("imdb_rating", SortOrder::Desc)
        );
    }

    #[test]
    fn test_non_positive_limit_and_page() {
        let validated = validate_args(&args(&[("limit", "0"), ("page", "-1")]));

        assert!(!validated.success);
        assert_eq!(validated.errors.len(), 2);
    }

    #[test]
    fn test_non_numeric_limit() {
        let validated = validate_args(&args(&[("limit", "ten")]));

        assert!(!validated.success);
        assert_eq!(validated.errors, vec!["limit must be a positive integer, got 'ten'"]);
    }

    #[test]
    fn test_invalid_sort_order() {
        let validated = validate_args(&args(&[("sort_order", "up")]));
        assert!(!validated.success);
    }

    #[test]
    fn test_invalid_sort_field() {
        assert!(!validate_args(&args(&[("sort", "")])).success);
        assert!(!validate_args(&args(&[("sort", "title;drop")])).success);
        assert!(validate_args(&args(&[("sort", "title.raw")])).success);
    }

    #[test]
    fn test_empty_search_is_absent() {
        let validated = validate_args(&args(&[("search", "")]));

        assert!(validated.success);
        assert_eq!(validated.query.search_text, None);
    }

    #[test]
    fn test_unknown_parameters_are_ignored() {
        let validated = validate_args(&args(&[("foo", "bar")]));
        assert!(validated.success);
    }
}
