//! Parameters shared by the built-in strategies.

use nouveau_generate::{ConstrainedConfig, DEFAULT_CANDIDATES, DEFAULT_MAX_NEW_TOKENS, GenerationConfig};
use serde::{Deserialize, Serialize};

/// Knobs for the built-in strategies.
///
/// Every field has a default, so a partial JSON or TOML document
/// deserializes into a usable config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// Lines read by `window` and `sentiment`.
    pub window_size: usize,
    /// Candidates drawn by the constrained strategies.
    pub n_candidates: usize,
    /// Token budget per service call.
    pub max_new_tokens: u32,
    /// Syllables per line aimed for by `syllable`.
    pub syllable_target: usize,
    /// Trailing characters compared by `rhyme`.
    pub rhyme_chars: usize,
    /// Compound sentiment aimed for by `sentiment`, in `[-1, 1]`.
    pub sentiment_target: f64,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            window_size: 3,
            n_candidates: DEFAULT_CANDIDATES,
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
            syllable_target: 8,
            rhyme_chars: 3,
            sentiment_target: 0.5,
        }
    }
}

impl StrategyConfig {
    /// Configuration for the single-call strategies.
    pub fn generation(&self) -> GenerationConfig {
        GenerationConfig {
            max_new_tokens: self.max_new_tokens,
        }
    }

    /// Configuration for the constrained strategies.
    pub fn constrained(&self) -> ConstrainedConfig {
        ConstrainedConfig {
            n_candidates: self.n_candidates,
            max_new_tokens: self.max_new_tokens,
        }
    }
}
