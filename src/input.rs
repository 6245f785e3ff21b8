//! Interactive input capability.
//!
//! The session loop and engine credential prompts read lines through the
//! [`PromptInput`] trait rather than stdin directly, so tests can drive
//! them with a scripted supplier.

use std::io::Write;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::Result;

/// One read from the interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    /// A full line, without the trailing newline.
    Line(String),
    /// Ctrl-c while waiting for input.
    Interrupted,
    /// Input stream closed.
    Eof,
}

/// Blocking line-oriented input with a visible prompt.
#[async_trait]
pub trait PromptInput: Send {
    /// Displays `prompt` and waits for the next input event.
    async fn read_line(&mut self, prompt: &str) -> Result<PromptEvent>;
}

/// Reads from the process stdin, racing each read against ctrl-c.
pub struct StdinInput {
    lines: Lines<BufReader<Stdin>>,
}

impl StdinInput {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for StdinInput {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PromptInput for StdinInput {
    async fn read_line(&mut self, prompt: &str) -> Result<PromptEvent> {
        print!("{} ", prompt);
        std::io::stdout().flush()?;

        tokio::select! {
            line = self.lines.next_line() => match line? {
                Some(line) => Ok(PromptEvent::Line(line)),
                None => Ok(PromptEvent::Eof),
            },
            signal = tokio::signal::ctrl_c() => {
                signal?;
                println!();
                Ok(PromptEvent::Interrupted)
            }
        }
    }
}
