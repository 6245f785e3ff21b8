//! Search result types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Result title.
    pub title: String,
    /// Result URL.
    pub url: String,
    /// Result snippet. Always a string; missing provider snippets
    /// are normalized to empty.
    pub snippet: String,
}

impl SearchResult {
    /// Creates a new search result.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            snippet: snippet.into(),
        }
    }
}

/// Outcome of a single provider query.
///
/// Exactly one of these holds: non-empty `results`, a present
/// `error_payload`, or empty results with no error (a clean miss).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Results in the provider's returned order.
    pub results: Vec<SearchResult>,
    /// Human-formatted total count. Provider-specific; some providers
    /// only give a placeholder.
    pub total_count_display: String,
    /// Canonical browsable search URL for the query.
    pub web_search_url: String,
    /// Raw payload when the provider answered without the expected
    /// success shape.
    pub error_payload: Option<Value>,
}

impl SearchResponse {
    /// Creates a successful response.
    pub fn with_results(
        results: Vec<SearchResult>,
        total_count_display: impl Into<String>,
        web_search_url: impl Into<String>,
    ) -> Self {
        Self {
            results,
            total_count_display: total_count_display.into(),
            web_search_url: web_search_url.into(),
            error_payload: None,
        }
    }

    /// Creates a response carrying an unexpected provider payload.
    pub fn from_error(payload: Value) -> Self {
        Self {
            results: Vec::new(),
            total_count_display: String::new(),
            web_search_url: String::new(),
            error_payload: Some(payload),
        }
    }

    /// Returns true if the provider answered outside its success shape.
    pub fn is_error(&self) -> bool {
        self.error_payload.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_result_new() {
        let result = SearchResult::new("Title", "https://example.com", "Snippet");
        assert_eq!(result.title, "Title");
        assert_eq!(result.url, "https://example.com");
        assert_eq!(result.snippet, "Snippet");
    }

    #[test]
    fn test_search_result_empty_snippet() {
        let result = SearchResult::new("Title", "https://example.com", "");
        assert_eq!(result.snippet, "");
    }

    #[test]
    fn test_response_with_results() {
        let response = SearchResponse::with_results(
            vec![SearchResult::new("t", "u", "s")],
            "About 1,000 results",
            "https://www.google.com/search?q=rust",
        );
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.total_count_display, "About 1,000 results");
        assert!(!response.is_error());
    }

    #[test]
    fn test_response_from_error() {
        let payload = json!({"error": {"code": 403, "message": "quota"}});
        let response = SearchResponse::from_error(payload.clone());
        assert!(response.results.is_empty());
        assert_eq!(response.total_count_display, "");
        assert_eq!(response.web_search_url, "");
        assert!(response.is_error());
        assert_eq!(response.error_payload, Some(payload));
    }

    #[test]
    fn test_response_empty_is_not_error() {
        let response = SearchResponse::with_results(vec![], "-", "https://example.com");
        assert!(response.results.is_empty());
        assert!(!response.is_error());
    }

    #[test]
    fn test_search_result_serialization() {
        let result = SearchResult::new("Title", "https://example.com", "Snippet");
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"title\":\"Title\""));
        assert!(json.contains("\"url\":\"https://example.com\""));
    }

    #[test]
    fn test_search_result_deserialization() {
        let json = r#"{"title":"T","url":"https://e.com","snippet":""}"#;
        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.title, "T");
        assert_eq!(result.snippet, "");
    }
}
