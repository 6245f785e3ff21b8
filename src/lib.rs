//! # gglconsole
//!
//! An interactive command-line search console with pluggable backends.
//!
//! A keyword typed at the prompt queries the configured provider (Google,
//! Bing or Qiita) and renders paginated results; typing a displayed index
//! opens that result in the browser, and an empty line fetches the next
//! page. Without API access the console degrades to opening the provider's
//! web search page directly.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gglconsole::{
//!     build_engine, BrowserTarget, Config, ConsoleSession, EngineKind, StdinInput,
//!     SystemBrowser,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let engine = build_engine(EngineKind::Google, &config);
//!     let browser = Box::new(SystemBrowser::new(BrowserTarget::Default));
//!
//!     let mut session = ConsoleSession::new(config, engine, browser);
//!     let termination = session.run(&mut StdinInput::new(), None).await?;
//!     println!("{:?}", termination);
//!     Ok(())
//! }
//! ```

mod browser;
mod config;
mod console;
mod engine;
mod error;
mod input;
mod render;
mod result;

pub mod engines;

pub use browser::{Browser, BrowserTarget, SystemBrowser};
pub use config::{default_config_path, Config};
pub use console::{normalize_input, parse_indexes, ConsoleSession, Termination};
pub use engine::{build_engine, EngineKind, SearchEngine};
pub use error::{ConsoleError, Result};
pub use input::{PromptEvent, PromptInput, StdinInput};
pub use render::Renderer;
pub use result::{SearchResponse, SearchResult};
