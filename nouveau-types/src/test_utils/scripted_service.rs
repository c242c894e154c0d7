//! ScriptedService: replays a fixed sequence of outputs.

use crate::error::ServiceError;
use crate::service::TextService;

/// One recorded call to a [`ScriptedService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    /// The prompt passed in.
    pub prompt: String,
    /// The token budget passed in.
    pub max_new_tokens: u32,
}

/// A text service that returns its scripted outputs in order, wrapping
/// around when it runs out, and records every call.
#[derive(Debug)]
pub struct ScriptedService {
    outputs: Vec<String>,
    next: usize,
    calls: Vec<Call>,
}

impl ScriptedService {
    /// Create a service that replays `outputs`.
    ///
    /// An empty script answers every call with an empty string.
    pub fn new<I, S>(outputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            outputs: outputs.into_iter().map(Into::into).collect(),
            next: 0,
            calls: Vec::new(),
        }
    }

    /// Every call received, in order.
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Number of calls received.
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }
}

impl TextService for ScriptedService {
    fn generate(&mut self, prompt: &str, max_new_tokens: u32) -> Result<String, ServiceError> {
        self.calls.push(Call {
            prompt: prompt.to_string(),
            max_new_tokens,
        });
        if self.outputs.is_empty() {
            return Ok(String::new());
        }
        let out = self.outputs[self.next % self.outputs.len()].clone();
        self.next += 1;
        Ok(out)
    }
}
