//! EchoService: answers with a bracketed prefix of the prompt.

use crate::error::ServiceError;
use crate::service::TextService;

/// A text service that returns `"[" + first 16 chars of prompt + "]"` and
/// remembers the prompts it was given.
#[derive(Debug, Default)]
pub struct EchoService {
    prompts: Vec<String>,
}

impl EchoService {
    /// Create a new EchoService.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent prompt, if any.
    pub fn last_prompt(&self) -> Option<&str> {
        self.prompts.last().map(String::as_str)
    }

    /// Every prompt received, in call order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl TextService for EchoService {
    fn generate(&mut self, prompt: &str, _max_new_tokens: u32) -> Result<String, ServiceError> {
        self.prompts.push(prompt.to_string());
        let head: String = prompt.chars().take(16).collect();
        Ok(format!("[{head}]"))
    }
}
