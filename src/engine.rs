//! Search engine trait and selection.

use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;

use crate::engines::{Bing, Google, Qiita};
use crate::input::PromptInput;
use crate::{Config, ConsoleError, Result, SearchResponse};

/// Trait for implementing search backends.
///
/// Provider-specific paging and authentication stay behind this interface;
/// the session loop only sees 1-based `start`/`count`.
#[async_trait]
pub trait SearchEngine: Send + Sync {
    /// Returns the engine name, used in prompts and logs.
    fn name(&self) -> &str;

    /// Ensures the engine's credential is present, prompting through
    /// `input` until a non-empty value is supplied and writing it into
    /// `config`. Returns whether the config changed. Returns `Ok(false)`
    /// without prompting when the credential is already set.
    async fn configure(
        &mut self,
        config: &mut Config,
        input: &mut dyn PromptInput,
    ) -> Result<bool>;

    /// Returns the canonical, URL-encoded web search URL for `query`.
    fn search_url(&self, query: &str) -> String;

    /// Runs one provider query. `start` is 1-based; each engine maps it to
    /// its native paging parameters.
    async fn search(&self, query: &str, start: u32, count: u32) -> Result<SearchResponse>;
}

/// Supported backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    Google,
    Bing,
    Qiita,
}

impl FromStr for EngineKind {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "GoogleEngine" | "google" | "ggl" => Ok(Self::Google),
            "BingEngine" | "bing" => Ok(Self::Bing),
            "QiitaEngine" | "qiita" => Ok(Self::Qiita),
            other => Err(ConsoleError::Config(format!(
                "unknown search engine '{}'",
                other
            ))),
        }
    }
}

impl EngineKind {
    /// Engine override derived from the invocation name, so `bing` and
    /// `qiita` symlinks of the binary select their backend directly.
    pub fn from_invocation(program: &str) -> Option<Self> {
        let stem = Path::new(program).file_stem()?.to_str()?;
        match stem {
            "bing" => Some(Self::Bing),
            "qiita" => Some(Self::Qiita),
            _ => None,
        }
    }
}

/// Builds the engine selected by `kind`, seeded with credentials from
/// `config`.
pub fn build_engine(kind: EngineKind, config: &Config) -> Box<dyn SearchEngine> {
    match kind {
        EngineKind::Google => Box::new(Google::new(config)),
        EngineKind::Bing => Box::new(Bing::new(config)),
        EngineKind::Qiita => Box::new(Qiita::new(config)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_kind_from_config_values() {
        assert_eq!("GoogleEngine".parse::<EngineKind>().unwrap(), EngineKind::Google);
        assert_eq!("BingEngine".parse::<EngineKind>().unwrap(), EngineKind::Bing);
        assert_eq!("QiitaEngine".parse::<EngineKind>().unwrap(), EngineKind::Qiita);
    }

    #[test]
    fn test_engine_kind_from_shortcuts() {
        assert_eq!("google".parse::<EngineKind>().unwrap(), EngineKind::Google);
        assert_eq!("bing".parse::<EngineKind>().unwrap(), EngineKind::Bing);
        assert_eq!("qiita".parse::<EngineKind>().unwrap(), EngineKind::Qiita);
    }

    #[test]
    fn test_engine_kind_unknown() {
        let err = "AltaVistaEngine".parse::<EngineKind>().unwrap_err();
        assert!(err.to_string().contains("AltaVistaEngine"));
    }

    #[test]
    fn test_engine_kind_from_invocation() {
        assert_eq!(
            EngineKind::from_invocation("/usr/local/bin/bing"),
            Some(EngineKind::Bing)
        );
        assert_eq!(EngineKind::from_invocation("qiita"), Some(EngineKind::Qiita));
        assert_eq!(EngineKind::from_invocation("/usr/local/bin/ggl"), None);
        assert_eq!(EngineKind::from_invocation("target/debug/ggl.exe"), None);
    }

    #[test]
    fn test_build_engine_names() {
        let config = Config::default();
        assert_eq!(build_engine(EngineKind::Google, &config).name(), "Google");
        assert_eq!(build_engine(EngineKind::Bing, &config).name(), "Bing");
        assert_eq!(build_engine(EngineKind::Qiita, &config).name(), "Qiita");
    }
}
