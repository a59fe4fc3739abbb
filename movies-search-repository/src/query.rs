//! Query builder for movie searches.
//!
//! Turns a validated [`MovieQuery`] into a [`SearchRequest`]. The builder does
//! not validate its input: limits, pages and sort fields are taken as given.

use movies_search_shared::types::search_result::RESULT_FIELDS;
use movies_search_shared::MovieQuery;
use serde_json::json;

use crate::types::SearchRequest;

/// Document fields searched by a full-text query.
pub const SEARCH_FIELDS: [&str; 6] = [
    "title",
    "description",
    "genre",
    "actors_names",
    "writers_names",
    "director",
];

/// Build the search request for `query`.
///
/// A non-empty search text becomes a `multi_match` over [`SEARCH_FIELDS`],
/// matching when any field matches. Without search text every document
/// matches and the request is a plain paginated, sorted browse.
///
/// # Example
///
/// ```
/// use movies_search_repository::build_search_request;
/// use movies_search_shared::MovieQuery;
///
/// let request = build_search_request(&MovieQuery::search("matrix").with_limit(20).with_page(2));
/// assert_eq!(request.from, 20);
/// assert_eq!(request.size, 20);
/// ```
pub fn build_search_request(query: &MovieQuery) -> SearchRequest {
    let clause = match query.text() {
        Some(text) => json!({
            "multi_match": {
                "query": text,
                "fields": SEARCH_FIELDS,
            }
        }),
        None => json!({ "match_all": {} }),
    };

    SearchRequest {
        body: json!({ "query": clause }),
        from: query.offset(),
        size: query.limit,
        sort: vec![format!("{}:{}", query.sort_field, query.sort_order)],
        source_fields: RESULT_FIELDS.iter().map(|f| f.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use movies_search_shared::SortOrder;
    use serde_json::Value;

    #[test]
    fn test_empty_search_matches_all() {
        let request = build_search_request(&MovieQuery::search(""));
        assert_eq!(request.body, json!({ "query": { "match_all": {} } }));

        let request = build_search_request(&MovieQuery::default());
        assert_eq!(request.body, json!({ "query": { "match_all": {} } }));
    }

    #[test]
    fn test_search_text_fans_out_to_six_fields() {
        let request = build_search_request(&MovieQuery::search("matrix"));

        let multi_match = &request.body["query"]["multi_match"];
        assert_eq!(multi_match["query"], "matrix");

        let fields: Vec<&str> = multi_match["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f.as_str().unwrap())
            .collect();
        assert_eq!(
            fields,
            vec!["title", "description", "genre", "actors_names", "writers_names", "director"]
        );
    }

    #[test]
    fn test_pagination() {
        let request = build_search_request(&MovieQuery::default().with_limit(20).with_page(2));
        assert_eq!(request.from, 20);
        assert_eq!(request.size, 20);

        let request = build_search_request(&MovieQuery::default());
        assert_eq!(request.from, 0);
        assert_eq!(request.size, 50);
    }

    #[test]
    fn test_sort_passes_field_through() {
        let query = MovieQuery::default().with_sort("no_such_field", SortOrder::Desc);
        let request = build_search_request(&query);
        assert_eq!(request.sort, vec!["no_such_field:desc".to_string()]);

        let request = build_search_request(&MovieQuery::default());
        assert_eq!(request.sort, vec!["id:asc".to_string()]);
    }

    #[test]
    fn test_projection_is_the_same_for_both_branches() {
        let browse = build_search_request(&MovieQuery::default());
        let search = build_search_request(&MovieQuery::search("matrix"));

        assert_eq!(browse.source_fields, vec!["id", "title", "imdb_rating"]);
        assert_eq!(browse.source_fields, search.source_fields);
    }

    #[test]
    fn test_body_only_holds_the_query() {
        let request = build_search_request(&MovieQuery::search("matrix"));
        let keys: Vec<&String> = match &request.body {
            Value::Object(map) => map.keys().collect(),
            _ => panic!("body must be an object"),
        };
        assert_eq!(keys, vec!["query"]);
    }
}
