//! FixedSentiment: table-driven sentiment scores.

use crate::error::ServiceError;
use crate::service::SentimentAnalyzer;
use std::collections::HashMap;

/// A sentiment analyzer that looks texts up in a table.
///
/// Unknown texts score `default`. Set `fail` to make every call error.
#[derive(Debug, Default)]
pub struct FixedSentiment {
    scores: HashMap<String, f64>,
    default: f64,
    fail: bool,
}

impl FixedSentiment {
    /// An analyzer where every text is neutral.
    pub fn new() -> Self {
        Self::default()
    }

    /// An analyzer that fails on every call.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Score `text` as `compound`.
    pub fn with(mut self, text: impl Into<String>, compound: f64) -> Self {
        self.scores.insert(text.into(), compound);
        self
    }

    /// Score unknown texts as `compound`.
    pub fn with_default(mut self, compound: f64) -> Self {
        self.default = compound;
        self
    }
}

impl SentimentAnalyzer for FixedSentiment {
    fn compound(&self, text: &str) -> Result<f64, ServiceError> {
        if self.fail {
            return Err(ServiceError::RequestFailed("sentiment backend failed".into()));
        }
        Ok(self.scores.get(text).copied().unwrap_or(self.default))
    }
}
