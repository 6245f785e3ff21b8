//! Bing Web Search engine implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use super::{has_credential, http_client, prompt_credential};
use crate::input::PromptInput;
use crate::{Config, Result, SearchEngine, SearchResponse, SearchResult};

const API_ENDPOINT: &str = "https://api.bing.microsoft.com/v7.0/search";

/// Bing web search. Pages with a zero-based `offset`; authenticated by a
/// subscription key header.
pub struct Bing {
    client: Client,
    api_key: Option<String>,
}

impl Bing {
    /// Creates a new Bing engine seeded from the config.
    pub fn new(config: &Config) -> Self {
        Self {
            client: http_client(),
            api_key: config.bing_api_key.clone(),
        }
    }

    fn request_url(&self, query: &str, start: u32, count: u32) -> String {
        // Caller start is 1-based, the API offset is zero-based.
        format!(
            "{}?offset={}&count={}&q={}",
            API_ENDPOINT,
            start.saturating_sub(1),
            count,
            urlencoding::encode(query)
        )
    }
}

#[derive(Deserialize)]
struct BingEnvelope {
    #[serde(rename = "webPages")]
    web_pages: BingWebPages,
}

#[derive(Deserialize)]
struct BingWebPages {
    value: Vec<BingItem>,
    #[serde(rename = "totalEstimatedMatches")]
    total_estimated_matches: u64,
    #[serde(rename = "webSearchUrl")]
    web_search_url: String,
}

#[derive(Deserialize)]
struct BingItem {
    name: String,
    url: String,
    #[serde(default)]
    snippet: Option<String>,
}

#[async_trait]
impl SearchEngine for Bing {
    fn name(&self) -> &str {
        "Bing"
    }

    async fn configure(
        &mut self,
        config: &mut Config,
        input: &mut dyn PromptInput,
    ) -> Result<bool> {
        if has_credential(&self.api_key) {
            return Ok(false);
        }

        let key = prompt_credential(input, "Bing API key:").await?;
        config.bing_api_key = Some(key.clone());
        self.api_key = Some(key);
        Ok(true)
    }

    fn search_url(&self, query: &str) -> String {
        format!("https://www.bing.com/search?q={}", urlencoding::encode(query))
    }

    async fn search(&self, query: &str, start: u32, count: u32) -> Result<SearchResponse> {
        let url = self.request_url(query, start, count);
        tracing::debug!(query, start, count, "requesting Bing search");

        let payload: Value = self
            .client
            .get(&url)
            .header(
                "Ocp-Apim-Subscription-Key",
                self.api_key.as_deref().unwrap_or_default(),
            )
            .send()
            .await?
            .json()
            .await?;

        let has_values = payload
            .get("webPages")
            .and_then(|pages| pages.get("value"))
            .is_some();
        if !has_values {
            return Ok(SearchResponse::from_error(payload));
        }

        let envelope: BingEnvelope = serde_json::from_value(payload)
            .map_err(|e| crate::ConsoleError::Parse(e.to_string()))?;

        let results = envelope
            .web_pages
            .value
            .into_iter()
            .map(|item| SearchResult::new(item.name, item.url, item.snippet.unwrap_or_default()))
            .collect();

        Ok(SearchResponse::with_results(
            results,
            envelope.web_pages.total_estimated_matches.to_string(),
            envelope.web_pages.web_search_url,
        ))
    }
}
