//! Interactive console session.
//!
//! Owns the pagination state for the current keyword and dispatches each
//! line of input to exit handling, direct browser opening, index
//! resolution, a fresh search or a "more results" page request.

use tracing::{debug, warn};

use crate::browser::Browser;
use crate::engine::SearchEngine;
use crate::input::{PromptEvent, PromptInput};
use crate::render::Renderer;
use crate::result::SearchResult;
use crate::{Config, Result};

/// Why the session loop ended.
///
/// Fatal errors are not a variant: they propagate out of [`ConsoleSession::run`]
/// as `Err` and terminate the process after being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// An exit command was entered.
    UserExit,
    /// Ctrl-c with `exit_on_ctrlc` enabled.
    Interrupted,
    /// Input stream closed.
    EndOfInput,
    /// `exit_on_end` ended the session after a completed search cycle.
    Completed,
}

/// Interactive read-eval loop over one search engine.
pub struct ConsoleSession {
    config: Config,
    engine: Box<dyn SearchEngine>,
    browser: Box<dyn Browser>,
    renderer: Renderer,
    search_word: String,
    results: Vec<SearchResult>,
    page: u32,
}

impl ConsoleSession {
    pub fn new(config: Config, engine: Box<dyn SearchEngine>, browser: Box<dyn Browser>) -> Self {
        let renderer = Renderer::new(
            config.title_style.clone(),
            config.link_style.clone(),
            config.snippet_style.clone(),
        );
        Self {
            config,
            engine,
            browser,
            renderer,
            search_word: String::new(),
            results: Vec::new(),
            page: 1,
        }
    }

    /// All results retrieved for the current keyword, oldest first.
    /// Displayed index N maps to `accumulated()[N-1]`.
    pub fn accumulated(&self) -> &[SearchResult] {
        &self.results
    }

    /// Runs the loop until a termination condition. `initial` is consumed
    /// as the first input (one-shot CLI keyword) before prompting.
    pub async fn run(
        &mut self,
        input: &mut dyn PromptInput,
        initial: Option<String>,
    ) -> Result<Termination> {
        let mut pending = initial;

        if self.config.show_banner {
            self.renderer.banner(&self.config.exit_commands);
        }

        loop {
            let raw = match pending.take() {
                Some(keyword) => keyword,
                None => match input.read_line(&self.config.prompt).await? {
                    PromptEvent::Line(line) => line,
                    PromptEvent::Interrupted => {
                        if self.config.exit_on_ctrlc {
                            return Ok(Termination::Interrupted);
                        }
                        continue;
                    }
                    PromptEvent::Eof => return Ok(Termination::EndOfInput),
                },
            };

            let text = normalize_input(&raw);

            if self.config.exit_commands.iter().any(|cmd| *cmd == text) {
                debug!("exit command received");
                return Ok(Termination::UserExit);
            }

            // Without API access every input opens the web search page;
            // search state is never touched.
            if !self.config.use_api {
                let url = self.engine.search_url(&text);
                self.open_in_browser(&url);
                continue;
            }

            let indexes = parse_indexes(&text, &self.config.index_delimiter);
            if !indexes.is_empty() && !self.results.is_empty() {
                self.open_indexes(&indexes);
                continue;
            }

            let response = if !text.is_empty() {
                // Fresh keyword: reset the session state.
                self.search_word = text.clone();
                self.results.clear();
                self.page = 1;
                self.engine.search(&self.search_word, 1, self.config.count).await?
            } else {
                if self.results.is_empty() {
                    continue;
                }

                self.page += 1;
                let start = self.config.count * (self.page - 1) + 1;
                let response = self
                    .engine
                    .search(&self.search_word, start, self.config.count)
                    .await?;

                if response.results.is_empty() {
                    self.page -= 1;
                    self.renderer.no_more_results();
                    continue;
                }
                response
            };

            if !response.results.is_empty() {
                self.results.extend(response.results.iter().cloned());
                self.renderer.results(&response.results, self.results.len());
                if self.page == 1 {
                    self.renderer.search_info(
                        &self.search_word,
                        &response.total_count_display,
                        &response.web_search_url,
                    );
                }
            } else if let Some(payload) = &response.error_payload {
                self.renderer.error_payload(payload);
            } else {
                self.renderer.no_results(&text);
            }

            if self.config.exit_on_end {
                return Ok(Termination::Completed);
            }
        }
    }

    /// Opens every in-range index; out-of-range entries get a warning and
    /// the rest of the batch still runs.
    fn open_indexes(&mut self, indexes: &[i64]) {
        for &index in indexes {
            if index < 1 || index as usize > self.results.len() {
                self.renderer.invalid_index(index, self.results.len());
            } else {
                let url = self.results[index as usize - 1].url.clone();
                self.open_in_browser(&url);
            }
        }
    }

    fn open_in_browser(&self, url: &str) {
        if let Err(e) = self.browser.open(url) {
            warn!(url, error = %e, "browser launch failed");
            self.renderer.browser_failed(&e.to_string());
        }
    }
}

/// Trims, lowercases and normalizes full-width spaces to regular spaces.
pub fn normalize_input(raw: &str) -> String {
    raw.trim().to_lowercase().replace('\u{3000}', " ")
}

/// Parses an index expression.
///
/// With the delimiter present the input splits into segments and every
/// non-empty segment must parse as an integer, otherwise the whole input
/// is not an index expression (empty result). Without the delimiter the
/// whole input must be a single integer.
pub fn parse_indexes(text: &str, delimiter: &str) -> Vec<i64> {
    if !delimiter.is_empty() && text.contains(delimiter) {
        let mut indexes = Vec::new();
        for segment in text.split(delimiter) {
            if segment.is_empty() {
                continue;
            }
            match segment.parse::<i64>() {
                Ok(index) => indexes.push(index),
                Err(_) => return Vec::new(),
            }
        }
        indexes
    } else {
        text.parse::<i64>().map(|index| vec![index]).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_input_trims_and_lowercases() {
        assert_eq!(normalize_input("  Rust Async  "), "rust async");
    }

    #[test]
    fn test_normalize_input_full_width_space() {
        assert_eq!(normalize_input("rust　async"), "rust async");
    }

    #[test]
    fn test_normalize_input_empty() {
        assert_eq!(normalize_input("   "), "");
    }

    #[test]
    fn test_parse_indexes_multiple() {
        assert_eq!(parse_indexes("1 2 3", " "), vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_indexes_mixed_segment_fails_whole_parse() {
        assert_eq!(parse_indexes("1 x 3", " "), Vec::<i64>::new());
    }

    #[test]
    fn test_parse_indexes_single() {
        assert_eq!(parse_indexes("5", " "), vec![5]);
    }

    #[test]
    fn test_parse_indexes_empty_input() {
        assert_eq!(parse_indexes("", " "), Vec::<i64>::new());
    }

    #[test]
    fn test_parse_indexes_keyword_is_not_an_index() {
        assert_eq!(parse_indexes("rust", " "), Vec::<i64>::new());
    }

    #[test]
    fn test_parse_indexes_skips_empty_segments() {
        assert_eq!(parse_indexes("1  2", " "), vec![1, 2]);
    }

    #[test]
    fn test_parse_indexes_custom_delimiter() {
        assert_eq!(parse_indexes("1,2,3", ","), vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_indexes_negative_numbers_parse() {
        // Range checking happens later; -1 is still an index expression.
        assert_eq!(parse_indexes("-1", " "), vec![-1]);
    }

    #[test]
    fn test_parse_indexes_empty_delimiter_treated_as_single() {
        assert_eq!(parse_indexes("12", ""), vec![12]);
        assert_eq!(parse_indexes("1 2", ""), Vec::<i64>::new());
    }
}
