//! Terminal rendering for the console session.

use colored::{ColoredString, Colorize};
use serde_json::Value;

use crate::result::SearchResult;

const RULE_WIDTH: usize = 72;

/// Renders session output with the configured style strings.
pub struct Renderer {
    title_style: String,
    link_style: String,
    snippet_style: String,
}

impl Renderer {
    pub fn new(
        title_style: impl Into<String>,
        link_style: impl Into<String>,
        snippet_style: impl Into<String>,
    ) -> Self {
        Self {
            title_style: title_style.into(),
            link_style: link_style.into(),
            snippet_style: snippet_style.into(),
        }
    }

    /// Horizontal separator between results.
    pub fn rule(&self) {
        println!("{}", "─".repeat(RULE_WIDTH).dimmed());
    }

    /// Startup banner with the configured exit commands.
    pub fn banner(&self, exit_commands: &[String]) {
        self.rule();
        println!(
            "🔍 {} | {} to exit",
            "gglconsole".bold(),
            exit_commands.join(", ")
        );
        self.rule();
    }

    /// Prints newly retrieved results newest-first with running indices.
    ///
    /// `total` is the accumulated result count after appending this page;
    /// the newest item gets the highest number so index N always maps to
    /// the N-th accumulated result.
    pub fn results(&self, new_results: &[SearchResult], total: usize) {
        for (i, item) in new_results.iter().rev().enumerate() {
            self.rule();
            println!(
                "{}",
                apply_style(
                    &format!("[{}] {}", total - i, sanitize(&item.title)),
                    &self.title_style
                )
            );
            println!("{}", apply_style(&sanitize(&item.url), &self.link_style));
            println!("{}", apply_style(&sanitize(&item.snippet), &self.snippet_style));
        }
    }

    /// Summary line shown on the first page of a fresh search.
    pub fn search_info(&self, search_word: &str, total_count_display: &str, web_search_url: &str) {
        self.rule();
        println!(
            "Keyword: {} | Total: {} | {}",
            search_word.bold(),
            total_count_display.bold(),
            web_search_url.blue().underline()
        );
    }

    /// Pretty-prints an unexpected provider payload.
    pub fn error_payload(&self, payload: &Value) {
        let body = serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());
        println!("{}\n{}", "ERROR".red(), body);
    }

    pub fn no_results(&self, search_word: &str) {
        println!("No results for '{}'", search_word);
    }

    pub fn no_more_results(&self) {
        println!("No more results to show");
    }

    pub fn invalid_index(&self, index: i64, total: usize) {
        println!("Invalid index: {} (1 ~ {})", index, total);
    }

    pub fn browser_failed(&self, message: &str) {
        println!("{} {}", "WARN".yellow(), message);
    }
}

/// Removes line breaks so one result field stays on one line.
fn sanitize(text: &str) -> String {
    text.replace(['\n', '\r'], "")
}

/// Applies a whitespace-separated style string ("bold bright_white") to
/// `text`. Unknown tokens are ignored.
fn apply_style(text: &str, style: &str) -> ColoredString {
    let mut styled = text.normal();
    for token in style.split_whitespace() {
        styled = match token {
            "bold" => styled.bold(),
            "italic" => styled.italic(),
            "underline" => styled.underline(),
            "dimmed" => styled.dimmed(),
            "black" => styled.black(),
            "red" => styled.red(),
            "green" => styled.green(),
            "yellow" => styled.yellow(),
            "blue" => styled.blue(),
            "magenta" => styled.magenta(),
            "cyan" => styled.cyan(),
            "white" => styled.white(),
            "bright_black" => styled.bright_black(),
            "bright_red" => styled.bright_red(),
            "bright_green" => styled.bright_green(),
            "bright_yellow" => styled.bright_yellow(),
            "bright_blue" => styled.bright_blue(),
            "bright_magenta" => styled.bright_magenta(),
            "bright_cyan" => styled.bright_cyan(),
            "bright_white" => styled.bright_white(),
            _ => styled,
        };
    }
    styled
}
