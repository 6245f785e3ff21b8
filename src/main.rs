//! gglconsole CLI entry point.
//!
//! Zero args starts the interactive loop. A single `--flag` argument is a
//! command (config location, enable/disable API mode, help); flag names
//! come from the config, so dispatch matches argv literally instead of
//! using a derive parser. Anything else is joined into a one-shot keyword.

use std::env;
use std::path::Path;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use gglconsole::{
    build_engine, default_config_path, BrowserTarget, Config, ConsoleSession, EngineKind,
    StdinInput, SystemBrowser,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let config_path = default_config_path()?;
    let config = Config::load_or_init(&config_path)?;

    // `bing`/`qiita` symlinks of the binary pick their engine directly.
    let kind = match EngineKind::from_invocation(&args[0]) {
        Some(kind) => kind,
        None => config.search_engine_class.parse()?,
    };

    if args.len() == 2 && args[1].starts_with("--") {
        return run_command(&args[1], kind, config, &config_path).await;
    }

    let engine = build_engine(kind, &config);
    let browser = SystemBrowser::new(BrowserTarget::from_config(config.browser_target));

    let initial = if args.len() > 1 {
        Some(args[1..].join(" "))
    } else {
        None
    };

    let mut session = ConsoleSession::new(config, engine, Box::new(browser));
    let termination = session.run(&mut StdinInput::new(), initial).await?;
    tracing::debug!(?termination, "session ended");

    Ok(())
}

async fn run_command(
    flag: &str,
    kind: EngineKind,
    config: Config,
    config_path: &Path,
) -> Result<()> {
    if flag == config.config_command {
        println!("Open '{}' manually and configure it.", config_path.display());
        return Ok(());
    }

    match flag {
        "--console" => set_api_mode(true, kind, config, config_path).await,
        "--browser" => set_api_mode(false, kind, config, config_path).await,
        _ => {
            print_help(&config);
            Ok(())
        }
    }
}

/// Switches between API search mode and direct browser mode, prompting for
/// the engine credential when API mode needs one, and persists the result.
async fn set_api_mode(
    use_api: bool,
    kind: EngineKind,
    mut config: Config,
    config_path: &Path,
) -> Result<()> {
    config.use_api = use_api;

    if use_api {
        let mut engine = build_engine(kind, &config);
        let mut input = StdinInput::new();
        engine.configure(&mut config, &mut input).await?;
    }

    config.save(config_path)?;
    println!(
        "{} mode enabled.",
        if use_api { "API search" } else { "Browser" }
    );
    Ok(())
}

fn print_help(config: &Config) {
    println!("Usage: ggl [keyword1] [keyword2] ...");
    println!();
    println!("With no arguments an interactive prompt starts; with keywords a");
    println!("single search runs first.");
    println!();
    println!("Commands:");
    println!("  {:<12} show the config file location", config.config_command);
    println!("  {:<12} search through the provider API (prompts for a key)", "--console");
    println!("  {:<12} open searches in the browser instead", "--browser");
}
