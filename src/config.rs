//! Configuration loading and persistence.
//!
//! The config is a flat JSON object in the user's home directory. Loading
//! fills every missing key with its default and immediately rewrites the
//! file, so a hand-edited or empty config self-heals into the full key set.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{ConsoleError, Result};

/// Console configuration. All keys are optional on disk; absent keys take
/// the documented defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Engine selection, e.g. "GoogleEngine", "BingEngine", "QiitaEngine".
    #[serde(default = "default_search_engine_class")]
    pub search_engine_class: String,

    /// Interactive prompt string.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Show the startup banner.
    #[serde(default = "default_true")]
    pub show_banner: bool,

    /// Flag that prints the config file location.
    #[serde(default = "default_config_command")]
    pub config_command: String,

    /// Exit after one completed search cycle.
    #[serde(default)]
    pub exit_on_end: bool,

    /// Exit the session on ctrl-c instead of re-prompting.
    #[serde(default = "default_true")]
    pub exit_on_ctrlc: bool,

    /// Inputs that terminate the session.
    #[serde(default = "default_exit_commands")]
    pub exit_commands: Vec<String>,

    /// Delimiter for multi-index input ("1 3 5").
    #[serde(default = "default_index_delimiter")]
    pub index_delimiter: String,

    /// Results requested per page.
    #[serde(default = "default_count")]
    pub count: u32,

    /// Browser window target: 0 default, 1 new window, 2 new tab.
    #[serde(default)]
    pub browser_target: u8,

    /// Query the provider API; when false every input opens the web
    /// search page directly.
    #[serde(default)]
    pub use_api: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_cx: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bing_api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qiita_api_key: Option<String>,

    /// Style string for result titles, e.g. "bold bright_white".
    #[serde(default = "default_title_style")]
    pub title_style: String,

    /// Style string for result links.
    #[serde(default = "default_link_style")]
    pub link_style: String,

    /// Style string for result snippets.
    #[serde(default = "default_snippet_style")]
    pub snippet_style: String,
}

fn default_search_engine_class() -> String {
    "GoogleEngine".to_string()
}

fn default_prompt() -> String {
    "search>".to_string()
}

fn default_true() -> bool {
    true
}

fn default_config_command() -> String {
    "--config".to_string()
}

fn default_exit_commands() -> Vec<String> {
    vec!["exit".to_string(), "quit".to_string(), "\\q".to_string()]
}

fn default_index_delimiter() -> String {
    " ".to_string()
}

fn default_count() -> u32 {
    10
}

fn default_title_style() -> String {
    "bold bright_white".to_string()
}

fn default_link_style() -> String {
    "blue underline".to_string()
}

fn default_snippet_style() -> String {
    "white".to_string()
}

impl Default for Config {
    fn default() -> Self {
        // Deserializing an empty object applies every field default.
        serde_json::from_str("{}").expect("empty config must deserialize")
    }
}

impl Config {
    /// Loads the config from `path`, fills missing keys with defaults and
    /// persists the fully defaulted mapping back to disk.
    pub fn load_or_init(path: &Path) -> Result<Self> {
        let config: Config = if path.is_file() {
            let content = fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        } else {
            Config::default()
        };

        config.save(path)?;
        Ok(config)
    }

    /// Persists the config as pretty-printed JSON.
    ///
    /// Writes to a sibling temp file first and renames over the target so
    /// a failure mid-write never leaves a truncated config behind.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, path)?;

        tracing::debug!(path = %path.display(), "config saved");
        Ok(())
    }
}

/// Default config file location: `~/.gglconsole/gglconsole.json`.
pub fn default_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| ConsoleError::Config("could not determine home directory".to_string()))?;
    Ok(home.join(".gglconsole").join("gglconsole.json"))
}
