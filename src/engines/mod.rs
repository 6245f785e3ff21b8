//! Search backend implementations.

mod bing;
mod google;
mod qiita;

pub use bing::Bing;
pub use google::Google;
pub use qiita::Qiita;

use std::time::Duration;

use crate::input::{PromptEvent, PromptInput};
use crate::{ConsoleError, Result};

/// Request timeout shared by every provider; no retries.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub(crate) fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("Failed to create HTTP client")
}

/// Prompts until a non-empty credential is entered. Interrupt or EOF while
/// prompting is an error since the engine cannot proceed without a key.
pub(crate) async fn prompt_credential(
    input: &mut dyn PromptInput,
    label: &str,
) -> Result<String> {
    loop {
        match input.read_line(label).await? {
            PromptEvent::Line(line) => {
                let value = line.trim().to_string();
                if !value.is_empty() {
                    return Ok(value);
                }
            }
            PromptEvent::Interrupted | PromptEvent::Eof => {
                return Err(ConsoleError::Config(
                    "credential entry cancelled".to_string(),
                ));
            }
        }
    }
}

/// Returns whether a credential is present and non-empty.
pub(crate) fn has_credential(key: &Option<String>) -> bool {
    key.as_deref().is_some_and(|k| !k.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;

    struct ScriptedInput {
        events: VecDeque<PromptEvent>,
    }

    impl ScriptedInput {
        fn new(events: Vec<PromptEvent>) -> Self {
            Self {
                events: events.into(),
            }
        }
    }

    #[async_trait]
    impl PromptInput for ScriptedInput {
        async fn read_line(&mut self, _prompt: &str) -> Result<PromptEvent> {
            Ok(self.events.pop_front().unwrap_or(PromptEvent::Eof))
        }
    }

    #[tokio::test]
    async fn test_prompt_credential_skips_empty_lines() {
        let mut input = ScriptedInput::new(vec![
            PromptEvent::Line("".to_string()),
            PromptEvent::Line("   ".to_string()),
            PromptEvent::Line(" my-key ".to_string()),
        ]);
        let key = prompt_credential(&mut input, "API key:").await.unwrap();
        assert_eq!(key, "my-key");
    }

    #[tokio::test]
    async fn test_prompt_credential_eof_is_error() {
        let mut input = ScriptedInput::new(vec![]);
        assert!(prompt_credential(&mut input, "API key:").await.is_err());
    }

    #[tokio::test]
    async fn test_prompt_credential_interrupt_is_error() {
        let mut input = ScriptedInput::new(vec![PromptEvent::Interrupted]);
        assert!(prompt_credential(&mut input, "API key:").await.is_err());
    }

    #[test]
    fn test_has_credential() {
        assert!(!has_credential(&None));
        assert!(!has_credential(&Some(String::new())));
        assert!(has_credential(&Some("k".to_string())));
    }
}
