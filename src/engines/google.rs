//! Google Custom Search engine implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use super::{has_credential, http_client, prompt_credential};
use crate::input::PromptInput;
use crate::{Config, Result, SearchEngine, SearchResponse, SearchResult};

const API_ENDPOINT: &str = "https://customsearch.googleapis.com/customsearch/v1";

/// Search-engine id used when no `google_cx` is configured.
const DEFAULT_CX: &str = "253ce3c27ae6de09f";

/// Google web search via the Custom Search JSON API. Pages with a 1-based
/// `start` offset; authenticated by API key plus engine id (`cx`).
pub struct Google {
    client: Client,
    api_key: Option<String>,
    cx: String,
}

impl Google {
    /// Creates a new Google engine seeded from the config.
    pub fn new(config: &Config) -> Self {
        Self {
            client: http_client(),
            api_key: config.google_api_key.clone(),
            cx: config
                .google_cx
                .clone()
                .filter(|cx| !cx.is_empty())
                .unwrap_or_else(|| DEFAULT_CX.to_string()),
        }
    }

    fn request_url(&self, query: &str, start: u32, count: u32) -> String {
        format!(
            "{}?key={}&cx={}&start={}&num={}&q={}",
            API_ENDPOINT,
            self.api_key.as_deref().unwrap_or_default(),
            self.cx,
            start,
            count,
            urlencoding::encode(query)
        )
    }
}

#[derive(Deserialize)]
struct GoogleEnvelope {
    items: Vec<GoogleItem>,
    #[serde(rename = "searchInformation")]
    search_information: GoogleSearchInformation,
}

#[derive(Deserialize)]
struct GoogleItem {
    title: String,
    link: String,
    #[serde(default)]
    snippet: Option<String>,
}

#[derive(Deserialize)]
struct GoogleSearchInformation {
    #[serde(rename = "formattedTotalResults")]
    formatted_total_results: String,
}

#[async_trait]
impl SearchEngine for Google {
    fn name(&self) -> &str {
        "Google"
    }

    async fn configure(
        &mut self,
        config: &mut Config,
        input: &mut dyn PromptInput,
    ) -> Result<bool> {
        if has_credential(&self.api_key) {
            return Ok(false);
        }

        let key = prompt_credential(input, "Google API key:").await?;
        config.google_api_key = Some(key.clone());
        self.api_key = Some(key);
        Ok(true)
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "https://www.google.com/search?ie=UTF-8&oe=UTF-8&q={}",
            urlencoding::encode(query)
        )
    }

    async fn search(&self, query: &str, start: u32, count: u32) -> Result<SearchResponse> {
        let url = self.request_url(query, start, count);
        tracing::debug!(query, start, count, "requesting Google search");

        let payload: Value = self.client.get(&url).send().await?.json().await?;

        if payload.get("items").is_none() {
            return Ok(SearchResponse::from_error(payload));
        }

        let envelope: GoogleEnvelope = serde_json::from_value(payload)
            .map_err(|e| crate::ConsoleError::Parse(e.to_string()))?;

        let results = envelope
            .items
            .into_iter()
            .map(|item| SearchResult::new(item.title, item.link, item.snippet.unwrap_or_default()))
            .collect();

        Ok(SearchResponse::with_results(
            results,
            envelope.search_information.formatted_total_results,
            self.search_url(query),
        ))
    }
}
