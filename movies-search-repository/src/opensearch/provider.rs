//! OpenSearch provider implementation.
//!
//! This module provides the concrete implementation of `SearchIndexProvider`
//! using the OpenSearch Rust crate.

use async_trait::async_trait;
use movies_search_shared::{MovieDocument, MovieSearchResult};
use opensearch::{
    http::request::JsonBody,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{IndicesCreateParts, IndicesExistsParts},
    BulkParts, GetParts, OpenSearch, SearchParts,
};
use serde_json::{json, Value};
use tracing::{debug, error, info, warn};
use url::Url;

use crate::config::SearchIndexConfig;
use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use crate::opensearch::index_config::get_index_settings;
use crate::types::{BatchOperationResult, BatchOperationSummary, SearchRequest};

/// Response filter applied to searches: only the hit sources are returned.
const SEARCH_FILTER_PATH: &str = "hits.hits._source";

/// OpenSearch provider implementation.
///
/// Provides full-text search and document storage using OpenSearch as the
/// backend. The underlying HTTP client pools connections; each operation
/// borrows one for a single request and returns it when the request finishes,
/// whether it succeeded or not.
///
/// # Example
///
/// ```ignore
/// use movies_search_repository::{OpenSearchProvider, SearchIndexConfig};
///
/// let provider = OpenSearchProvider::new(&SearchIndexConfig::default())?;
/// if provider.ping().await {
///     let document = provider.get_document("tt0133093").await?;
/// }
/// ```
pub struct OpenSearchProvider {
    client: OpenSearch,
    index: String,
}

impl OpenSearchProvider {
    /// Create a new OpenSearch provider for the configured URL and index.
    ///
    /// No request is sent here; an unreachable server is only noticed by the
    /// first operation (or by `ping`).
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchProvider)` - A new provider instance
    /// * `Err(SearchIndexError)` - If the URL is invalid or the transport cannot be built
    pub fn new(config: &SearchIndexConfig) -> Result<Self, SearchIndexError> {
        let parsed_url =
            Url::parse(&config.url).map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(
            url = %config.url,
            index = %config.index,
            timeout_secs = config.request_timeout.as_secs(),
            "Created OpenSearch provider"
        );

        Ok(Self {
            client,
            index: config.index.clone(),
        })
    }

    /// Build the NDJSON body of a bulk request: one `index` action per
    /// document, each followed by the full document.
    fn bulk_body(documents: &[MovieDocument]) -> Result<Vec<JsonBody<Value>>, SearchIndexError> {
        let mut body: Vec<JsonBody<Value>> = Vec::with_capacity(documents.len() * 2);

        for document in documents {
            let source = serde_json::to_value(document)
                .map_err(|e| SearchIndexError::serialization(e.to_string()))?;
            body.push(json!({ "index": { "_id": document.document_id() } }).into());
            body.push(source.into());
        }

        Ok(body)
    }

    /// Map a bulk response to one result per input document.
    ///
    /// The backend reports items in request order. An item that is missing
    /// from the response counts as failed.
    fn parse_bulk_response(documents: &[MovieDocument], response: &Value) -> BatchOperationSummary {
        let items = response
            .get("items")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let results = documents
            .iter()
            .enumerate()
            .map(|(position, document)| {
                let id = document.document_id();
                let Some(item) = items.get(position).and_then(|item| item.get("index")) else {
                    return BatchOperationResult::failed(
                        id,
                        SearchIndexError::parse("missing item in bulk response"),
                    );
                };

                let status = item.get("status").and_then(Value::as_u64).unwrap_or(0);
                match item.get("error") {
                    None if (200..300).contains(&status) => BatchOperationResult::succeeded(id),
                    error => {
                        let reason = error
                            .and_then(|e| e.get("reason"))
                            .and_then(Value::as_str)
                            .map(str::to_string)
                            .or_else(|| error.map(Value::to_string))
                            .unwrap_or_else(|| format!("status {}", status));
                        BatchOperationResult::failed(id, SearchIndexError::index(reason))
                    }
                }
            })
            .collect();

        BatchOperationSummary::from_results(results)
    }

    /// Extract the projected hits from a search response.
    ///
    /// With a `filter_path`, a search without hits comes back as `{}`, which
    /// is an empty result rather than a malformed one.
    fn parse_search_hits(response: &Value) -> Result<Vec<MovieSearchResult>, SearchIndexError> {
        let Some(hits) = response
            .get("hits")
            .and_then(|hits| hits.get("hits"))
            .and_then(Value::as_array)
        else {
            return Ok(Vec::new());
        };

        hits.iter()
            .filter_map(|hit| hit.get("_source"))
            .map(|source| {
                serde_json::from_value(source.clone())
                    .map_err(|e| SearchIndexError::parse(format!("invalid search hit: {}", e)))
            })
            .collect()
    }

    /// Extract the stored source from a get response.
    ///
    /// A found document without a `_source` section yields an empty object.
    fn extract_source(response: &Value) -> Option<Value> {
        if !response.get("found").and_then(Value::as_bool).unwrap_or(false) {
            return None;
        }

        Some(response.get("_source").cloned().unwrap_or_else(|| json!({})))
    }
}

#[async_trait]
impl SearchIndexProvider for OpenSearchProvider {
    async fn ensure_index_exists(&self) -> Result<(), SearchIndexError> {
        let response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[self.index.as_str()]))
            .send()
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let status = response.status_code();
        if status.is_success() {
            debug!(index = %self.index, "Index already exists");
            return Ok(());
        }
        if status.as_u16() != 404 {
            return Err(SearchIndexError::index_creation(format!(
                "Index existence check failed with status {}",
                status
            )));
        }

        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(&self.index))
            .body(get_index_settings())
            .send()
            .await
            .map_err(|e| SearchIndexError::index_creation(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Index creation failed");
            return Err(SearchIndexError::index_creation(format!(
                "Index creation failed with status {}: {}",
                status, error_body
            )));
        }

        info!(index = %self.index, "Created index");
        Ok(())
    }

    async fn bulk_upsert(
        &self,
        documents: &[MovieDocument],
    ) -> Result<BatchOperationSummary, SearchIndexError> {
        if documents.is_empty() {
            return Ok(BatchOperationSummary::default());
        }

        let body = Self::bulk_body(documents)?;

        let response = self
            .client
            .bulk(BulkParts::Index(&self.index))
            .body(body)
            .send()
            .await
            .map_err(|e| SearchIndexError::bulk_index(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Bulk request failed");
            return Err(SearchIndexError::bulk_index(format!(
                "Bulk request failed with status {}: {}",
                status, error_body
            )));
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| SearchIndexError::parse(e.to_string()))?;

        let summary = Self::parse_bulk_response(documents, &value);
        debug!(
            total = summary.total,
            succeeded = summary.succeeded,
            failed = summary.failed,
            "Bulk upsert finished"
        );
        Ok(summary)
    }

    async fn search(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<MovieSearchResult>, SearchIndexError> {
        let sort: Vec<&str> = request.sort.iter().map(String::as_str).collect();
        let source_fields: Vec<&str> = request.source_fields.iter().map(String::as_str).collect();
        let from = i64::try_from(request.from).unwrap_or(i64::MAX);
        let size = i64::try_from(request.size).unwrap_or(i64::MAX);

        let response = self
            .client
            .search(SearchParts::Index(&[self.index.as_str()]))
            .from(from)
            .size(size)
            .sort(&sort)
            ._source_includes(&source_fields)
            .filter_path(&[SEARCH_FILTER_PATH])
            .body(request.body.clone())
            .send()
            .await
            .map_err(|e| SearchIndexError::search(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Search request failed");
            return Err(SearchIndexError::search(format!(
                "Search failed with status {}: {}",
                status, error_body
            )));
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| SearchIndexError::parse(e.to_string()))?;

        Self::parse_search_hits(&value)
    }

    async fn get_document(&self, id: &str) -> Result<Option<Value>, SearchIndexError> {
        let response = self
            .client
            .get(GetParts::IndexId(&self.index, id))
            .send()
            .await
            .map_err(|e| SearchIndexError::get(e.to_string()))?;

        let status = response.status_code();

        // 404 means no such document (or no such index yet)
        if status.as_u16() == 404 {
            debug!(id = %id, "Document not found");
            return Ok(None);
        }
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Get request failed");
            return Err(SearchIndexError::get(format!(
                "Get failed with status {}: {}",
                status, error_body
            )));
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| SearchIndexError::parse(e.to_string()))?;

        Ok(Self::extract_source(&value))
    }

    async fn ping(&self) -> bool {
        match self.client.ping().send().await {
            Ok(response) => response.status_code().is_success(),
            Err(e) => {
                warn!(error = %e, "OpenSearch ping failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use movies_search_shared::PersonRef;

    fn document(id: &str) -> MovieDocument {
        MovieDocument {
            id: id.to_string(),
            imdb_rating: Some(8.1),
            genre: vec!["Action".to_string()],
            title: Some("X".to_string()),
            description: None,
            director: Some("Z".to_string()),
            actors: vec![PersonRef::new(1, "A")],
            writers: vec![],
            actors_names: Some("A".to_string()),
            writers_names: None,
        }
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        let config = SearchIndexConfig {
            url: "not a url".to_string(),
            ..SearchIndexConfig::default()
        };
        let result = OpenSearchProvider::new(&config);
        assert!(matches!(result, Err(SearchIndexError::ConnectionError(_))));
    }

    #[test]
    fn test_bulk_body_pairs_action_and_document() {
        let documents = vec![document("1"), document("2")];
        let body = OpenSearchProvider::bulk_body(&documents).unwrap();
        assert_eq!(body.len(), 4);
    }

    #[test]
    fn test_parse_bulk_response_all_succeeded() {
        let documents = vec![document("1"), document("2")];
        let response = json!({
            "took": 3,
            "errors": false,
            "items": [
                { "index": { "_id": "1", "status": 201 } },
                { "index": { "_id": "2", "status": 200 } }
            ]
        });

        let summary = OpenSearchProvider::parse_bulk_response(&documents, &response);

        assert_eq!(summary.total, 2);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.results[0].document_id, "1");
        assert_eq!(summary.results[1].document_id, "2");
    }

    #[test]
    fn test_parse_bulk_response_partial_failure() {
        let documents = vec![document("1"), document("2"), document("3")];
        let response = json!({
            "errors": true,
            "items": [
                { "index": { "_id": "1", "status": 201 } },
                { "index": {
                    "_id": "2",
                    "status": 400,
                    "error": { "type": "mapper_parsing_exception", "reason": "failed to parse field [imdb_rating]" }
                } },
                { "index": { "_id": "3", "status": 200 } }
            ]
        });

        let summary = OpenSearchProvider::parse_bulk_response(&documents, &response);

        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 1);
        let failure = summary.failures().next().unwrap();
        assert_eq!(failure.document_id, "2");
        assert!(matches!(
            &failure.error,
            Some(SearchIndexError::IndexError(reason)) if reason == "failed to parse field [imdb_rating]"
        ));
    }

    #[test]
    fn test_parse_bulk_response_missing_items() {
        let documents = vec![document("1")];
        let summary = OpenSearchProvider::parse_bulk_response(&documents, &json!({}));

        assert_eq!(summary.failed, 1);
        assert!(matches!(
            summary.results[0].error,
            Some(SearchIndexError::ParseError(_))
        ));
    }

    #[test]
    fn test_parse_search_hits() {
        let response = json!({
            "hits": { "hits": [
                { "_source": { "id": "1", "title": "X", "imdb_rating": 8.1 } },
                { "_source": { "id": "2", "title": null, "imdb_rating": null } }
            ] }
        });

        let hits = OpenSearchProvider::parse_search_hits(&response).unwrap();

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, "1");
        assert_eq!(hits[0].imdb_rating, Some(8.1));
        assert!(hits[1].title.is_none());
    }

    #[test]
    fn test_parse_search_hits_filtered_empty_response() {
        let hits = OpenSearchProvider::parse_search_hits(&json!({})).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_parse_search_hits_invalid_source() {
        let response = json!({ "hits": { "hits": [ { "_source": { "title": "no id" } } ] } });
        let result = OpenSearchProvider::parse_search_hits(&response);
        assert!(matches!(result, Err(SearchIndexError::ParseError(_))));
    }

    #[test]
    fn test_extract_source() {
        let found = json!({ "_id": "1", "found": true, "_source": { "id": "1", "title": "X" } });
        assert_eq!(
            OpenSearchProvider::extract_source(&found),
            Some(json!({ "id": "1", "title": "X" }))
        );

        let without_source = json!({ "_id": "1", "found": true });
        assert_eq!(OpenSearchProvider::extract_source(&without_source), Some(json!({})));

        let missing = json!({ "_id": "1", "found": false });
        assert_eq!(OpenSearchProvider::extract_source(&missing), None);
    }
}
