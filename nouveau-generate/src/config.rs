//! Configuration for the generator combinators.

use serde::{Deserialize, Serialize};

/// Token budget used when nothing else is configured.
pub const DEFAULT_MAX_NEW_TOKENS: u32 = 20;

/// Candidates drawn per constrained call when nothing else is configured.
pub const DEFAULT_CANDIDATES: usize = 5;

/// Static configuration for a [`PromptGenerator`](crate::PromptGenerator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Maximum new tokens per service call.
    pub max_new_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
        }
    }
}

/// Static configuration for a [`Constrained`](crate::Constrained) generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstrainedConfig {
    /// Candidates drawn per call. Must be at least 1.
    pub n_candidates: usize,
    /// Maximum new tokens per draw.
    pub max_new_tokens: u32,
}

impl Default for ConstrainedConfig {
    fn default() -> Self {
        Self {
            n_candidates: DEFAULT_CANDIDATES,
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(GenerationConfig::default().max_new_tokens, 20);
        let c = ConstrainedConfig::default();
        assert_eq!(c.n_candidates, 5);
        assert_eq!(c.max_new_tokens, 20);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let c: ConstrainedConfig = serde_json::from_str(r#"{"n_candidates": 8}"#).unwrap();
        assert_eq!(c.n_candidates, 8);
        assert_eq!(c.max_new_tokens, DEFAULT_MAX_NEW_TOKENS);
    }
}
