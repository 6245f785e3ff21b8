//! Browser launching.

use std::process::{Command, Stdio};

use crate::{ConsoleError, Result};

/// Where the opened URL should land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowserTarget {
    /// Let the browser decide (reuse the current window).
    #[default]
    Default,
    /// Ask for a new window.
    NewWindow,
    /// Ask for a new tab.
    NewTab,
}

impl BrowserTarget {
    /// Maps the numeric `browser_target` config value.
    pub fn from_config(value: u8) -> Self {
        match value {
            1 => Self::NewWindow,
            2 => Self::NewTab,
            _ => Self::Default,
        }
    }
}

/// Capability to open a URL in the user's browser. Injected into the
/// session so tests can record opens instead of spawning processes.
pub trait Browser: Send {
    /// Opens `url`. Fire-and-forget: returns once the opener process is
    /// spawned, never waits for it.
    fn open(&self, url: &str) -> Result<()>;
}

/// Opens URLs through the platform's default opener.
pub struct SystemBrowser {
    target: BrowserTarget,
}

impl SystemBrowser {
    pub fn new(target: BrowserTarget) -> Self {
        Self { target }
    }

    #[cfg(target_os = "macos")]
    fn command(&self, url: &str) -> Command {
        let mut cmd = Command::new("open");
        if self.target == BrowserTarget::NewWindow {
            cmd.arg("-n");
        }
        cmd.arg(url);
        cmd
    }

    #[cfg(target_os = "windows")]
    fn command(&self, url: &str) -> Command {
        // `start` is a cmd builtin; the empty string is the window title.
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", url]);
        cmd
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    fn command(&self, url: &str) -> Command {
        // xdg-open has no window/tab control; the target stays a hint.
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}

impl Browser for SystemBrowser {
    fn open(&self, url: &str) -> Result<()> {
        tracing::debug!(url, target = ?self.target, "opening browser");
        self.command(url)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ConsoleError::Browser(e.to_string()))?;
        Ok(())
    }
}
