//! Search query types for the movies search service.
//!
//! This module defines the validated query structure used to browse and search
//! the movie index.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default number of results per page.
pub const DEFAULT_LIMIT: usize = 50;

/// Default page number (pages are 1-based).
pub const DEFAULT_PAGE: usize = 1;

/// Default sort field.
pub const DEFAULT_SORT_FIELD: &str = "id";

/// Sort direction of a search.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending order. This is the default.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortOrder {
    /// The lowercase name used by the search engine.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("sort_order must be 'asc' or 'desc', got '{}'", other)),
        }
    }
}

/// Movie search parameters.
///
/// This struct is produced by request validation and consumed by the query
/// builder. `limit` and `page` are expected to be at least 1; the struct
/// itself does not enforce it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieQuery {
    /// Maximum number of results to return.
    pub limit: usize,

    /// 1-based page number.
    pub page: usize,

    /// Field to sort by, passed to the search engine as-is.
    pub sort_field: String,

    /// Sort direction.
    pub sort_order: SortOrder,

    /// Optional full-text search string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_text: Option<String>,
}

impl Default for MovieQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            page: DEFAULT_PAGE,
            sort_field: DEFAULT_SORT_FIELD.to_string(),
            sort_order: SortOrder::Asc,
            search_text: None,
        }
    }
}

impl MovieQuery {
    /// Create a full-text search query with default pagination and sort.
    ///
    /// # Example
    ///
    /// ```
    /// use movies_search_shared::MovieQuery;
    ///
    /// let query = MovieQuery::search("matrix").with_page(2);
    /// assert_eq!(query.offset(), 50);
    /// ```
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search_text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Set the number of results per page.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the page number.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Set the sort field and direction.
    pub fn with_sort(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort_field = field.into();
        self.sort_order = order;
        self
    }

    /// Number of documents to skip: `limit * (page - 1)`.
    ///
    /// Saturates instead of overflowing; no upper bound is imposed.
    pub fn offset(&self) -> usize {
        self.limit.saturating_mul(self.page.saturating_sub(1))
    }

    /// The search text, if present and non-empty.
    pub fn text(&self) -> Option<&str> {
        self.search_text.as_deref().filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = MovieQuery::default();
        assert_eq!(query.limit, 50);
        assert_eq!(query.page, 1);
        assert_eq!(query.sort_field, "id");
        assert_eq!(query.sort_order, SortOrder::Asc);
        assert!(query.search_text.is_none());
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn test_offset() {
        let query = MovieQuery::default().with_limit(20).with_page(2);
        assert_eq!(query.offset(), 20);

        let query = MovieQuery::default().with_limit(7).with_page(5);
        assert_eq!(query.offset(), 28);
    }

    #[test]
    fn test_offset_saturates() {
        let query = MovieQuery::default().with_limit(usize::MAX).with_page(3);
        assert_eq!(query.offset(), usize::MAX);
    }

    #[test]
    fn test_text_ignores_empty() {
        assert_eq!(MovieQuery::search("").text(), None);
        assert_eq!(MovieQuery::search("matrix").text(), Some("matrix"));
        assert_eq!(MovieQuery::default().text(), None);
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!("asc".parse::<SortOrder>(), Ok(SortOrder::Asc));
        assert_eq!("DESC".parse::<SortOrder>(), Ok(SortOrder::Desc));
        assert!("sideways".parse::<SortOrder>().is_err());
        assert_eq!(SortOrder::Desc.to_string(), "desc");
    }
}
