//! Qiita article search engine implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use super::{has_credential, http_client, prompt_credential};
use crate::input::PromptInput;
use crate::{Config, Result, SearchEngine, SearchResponse, SearchResult};

const API_ENDPOINT: &str = "https://qiita.com/api/v2/items";

/// Qiita article search. The API pages by page number, so the caller's
/// 1-based start offset is mapped to `page = (start - 1) / count + 1`.
/// Authenticated with a bearer token.
pub struct Qiita {
    client: Client,
    api_key: Option<String>,
}

impl Qiita {
    /// Creates a new Qiita engine seeded from the config.
    pub fn new(config: &Config) -> Self {
        Self {
            client: http_client(),
            api_key: config.qiita_api_key.clone(),
        }
    }

    fn request_url(&self, query: &str, start: u32, count: u32) -> String {
        let page = (start.saturating_sub(1)) / count.max(1) + 1;
        format!(
            "{}?page={}&per_page={}&query={}",
            API_ENDPOINT,
            page,
            count,
            urlencoding::encode(query)
        )
    }
}

#[derive(Deserialize)]
struct QiitaItem {
    title: String,
    url: String,
    likes_count: u64,
    updated_at: String,
}

impl QiitaItem {
    /// Qiita has no text snippet; synthesize one from article metadata.
    fn snippet(&self) -> String {
        let date = self.updated_at.get(..10).unwrap_or(&self.updated_at);
        format!("LGTM: {} | Update: {}", self.likes_count, date)
    }
}

#[async_trait]
impl SearchEngine for Qiita {
    fn name(&self) -> &str {
        "Qiita"
    }

    async fn configure(
        &mut self,
        config: &mut Config,
        input: &mut dyn PromptInput,
    ) -> Result<bool> {
        if has_credential(&self.api_key) {
            return Ok(false);
        }

        let key = prompt_credential(input, "Qiita API key:").await?;
        config.qiita_api_key = Some(key.clone());
        self.api_key = Some(key);
        Ok(true)
    }

    fn search_url(&self, query: &str) -> String {
        format!("https://qiita.com/search?q={}", urlencoding::encode(query))
    }

    async fn search(&self, query: &str, start: u32, count: u32) -> Result<SearchResponse> {
        let url = self.request_url(query, start, count);
        tracing::debug!(query, start, count, "requesting Qiita search");

        let payload: Value = self
            .client
            .get(&url)
            .bearer_auth(self.api_key.as_deref().unwrap_or_default())
            .send()
            .await?
            .json()
            .await?;

        // The success shape is a top-level array; anything else (e.g. an
        // {"message": ...} auth error) is carried as the error payload.
        if !payload.is_array() {
            return Ok(SearchResponse::from_error(payload));
        }

        let items: Vec<QiitaItem> = serde_json::from_value(payload)
            .map_err(|e| crate::ConsoleError::Parse(e.to_string()))?;

        let results = items
            .into_iter()
            .map(|item| {
                let snippet = item.snippet();
                SearchResult::new(item.title, item.url, snippet)
            })
            .collect();

        Ok(SearchResponse::with_results(results, "-", self.search_url(query)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn engine() -> Qiita {
        let mut config = Config::default();
        config.qiita_api_key = Some("test-token".to_string());
        Qiita::new(&config)
    }

    #[test]
    fn test_search_url_encodes_query() {
        let engine = engine();
        assert_eq!(
            engine.search_url("rust 非同期"),
            "https://qiita.com/search?q=rust%20%E9%9D%9E%E5%90%8C%E6%9C%9F"
        );
    }

    #[test]
    fn test_request_url_maps_start_to_page_one() {
        let engine = engine();
        let url = url::Url::parse(&engine.request_url("rust", 1, 10)).unwrap();
        let page = url
            .query_pairs()
            .find(|(k, _)| k == "page")
            .map(|(_, v)| v.to_string());
        assert_eq!(page.as_deref(), Some("1"));
    }

    #[test]
    fn test_request_url_maps_start_to_page_two() {
        let engine = engine();
        let url = url::Url::parse(&engine.request_url("rust", 11, 10)).unwrap();
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert!(pairs.contains(&("page".to_string(), "2".to_string())));
        assert!(pairs.contains(&("per_page".to_string(), "10".to_string())));
    }

    #[test]
    fn test_request_url_partial_page_stays_on_page() {
        // start=5 with count=10 is still within page 1
        let engine = engine();
        assert!(engine.request_url("q", 5, 10).contains("page=1"));
    }

    #[test]
    fn test_snippet_formatting() {
        let item = QiitaItem {
            title: "t".to_string(),
            url: "u".to_string(),
            likes_count: 42,
            updated_at: "2024-03-15T10:20:30+09:00".to_string(),
        };
        assert_eq!(item.snippet(), "LGTM: 42 | Update: 2024-03-15");
    }

    #[test]
    fn test_snippet_short_timestamp() {
        let item = QiitaItem {
            title: "t".to_string(),
            url: "u".to_string(),
            likes_count: 0,
            updated_at: "2024".to_string(),
        };
        assert_eq!(item.snippet(), "LGTM: 0 | Update: 2024");
    }

    #[test]
    fn test_item_deserialization() {
        let payload = json!([
            {"title": "Rust入門", "url": "https://qiita.com/a/1", "likes_count": 10,
             "updated_at": "2024-01-02T00:00:00+09:00", "tags": [{"name": "rust"}]}
        ]);
        let items: Vec<QiitaItem> = serde_json::from_value(payload).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Rust入門");
    }

    #[test]
    fn test_non_array_payload_is_error() {
        let payload = json!({"message": "Unauthorized", "type": "unauthorized"});
        assert!(!payload.is_array());
        let response = SearchResponse::from_error(payload);
        assert!(response.is_error());
    }
}
