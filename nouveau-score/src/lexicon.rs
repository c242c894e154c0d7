//! A small built-in valence lexicon.
//!
//! Good enough to separate "I love this wonderful day" from "I hate this
//! terrible day". Swap in a real analyzer for anything more.

use nouveau_types::{SentimentAnalyzer, ServiceError};
use std::collections::HashMap;

/// Normalisation constant: `compound = sum / sqrt(sum² + ALPHA)`.
const ALPHA: f64 = 15.0;

/// Scaling applied to a word directly preceded by a negator.
const NEGATION_SCALAR: f64 = -0.74;

/// Added to the magnitude of a word directly preceded by a booster.
const BOOST: f64 = 0.293;

const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "cannot", "without",
];

const BOOSTERS: &[&str] = &[
    "very", "so", "really", "extremely", "deeply", "truly", "utterly", "most",
];

const VALENCES: &[(&str, f64)] = &[
    ("alone", -1.0),
    ("angry", -2.3),
    ("ache", -1.6),
    ("beautiful", 2.9),
    ("bitter", -1.8),
    ("bless", 1.8),
    ("bright", 1.9),
    ("broken", -1.9),
    ("calm", 1.3),
    ("cold", -0.7),
    ("cry", -2.1),
    ("dark", -1.4),
    ("dead", -3.3),
    ("death", -2.9),
    ("delight", 2.9),
    ("despair", -3.0),
    ("dream", 1.0),
    ("fear", -2.2),
    ("free", 2.3),
    ("gentle", 1.7),
    ("glad", 2.0),
    ("glory", 2.3),
    ("good", 1.9),
    ("grief", -2.2),
    ("happy", 2.7),
    ("hate", -2.7),
    ("heal", 1.4),
    ("hope", 1.9),
    ("hurt", -2.4),
    ("joy", 2.8),
    ("kind", 2.4),
    ("lonely", -2.0),
    ("lost", -1.3),
    ("love", 3.2),
    ("lovely", 2.8),
    ("mourn", -1.9),
    ("pain", -2.3),
    ("peace", 2.5),
    ("rage", -2.6),
    ("sad", -2.1),
    ("shine", 1.6),
    ("smile", 1.5),
    ("sorrow", -2.4),
    ("sweet", 2.0),
    ("tears", -1.8),
    ("terrible", -2.5),
    ("warm", 0.9),
    ("weep", -2.0),
    ("wonderful", 2.7),
    ("wound", -1.6),
];

/// Lexicon-based [`SentimentAnalyzer`].
///
/// Sums word valences, flips and damps a word that follows a negator,
/// boosts a word that follows an intensifier, then squashes the sum into
/// `(-1, 1)`. Words outside the lexicon are neutral. Never fails.
#[derive(Debug, Clone)]
pub struct LexiconSentiment {
    valences: HashMap<String, f64>,
}

impl LexiconSentiment {
    /// The built-in lexicon.
    pub fn new() -> Self {
        Self {
            valences: VALENCES
                .iter()
                .map(|&(word, valence)| (word.to_string(), valence))
                .collect(),
        }
    }

    /// Add or override one word's valence (roughly `-4.0..=4.0`).
    pub fn with_word(mut self, word: impl Into<String>, valence: f64) -> Self {
        self.valences.insert(word.into().to_lowercase(), valence);
        self
    }

    /// Compound polarity of `text`.
    pub fn polarity(&self, text: &str) -> f64 {
        let words: Vec<String> = text
            .split_whitespace()
            .map(|w| {
                w.chars()
                    .filter(|c| c.is_alphanumeric() || *c == '\'')
                    .flat_map(char::to_lowercase)
                    .collect::<String>()
            })
            .filter(|w| !w.is_empty())
            .collect();

        let mut sum = 0.0;
        for (i, word) in words.iter().enumerate() {
            let Some(&base) = self.valences.get(word.as_str()) else {
                continue;
            };
            let mut valence = base;
            if let Some(prev) = i.checked_sub(1).map(|j| words[j].as_str()) {
                if BOOSTERS.contains(&prev) {
                    valence += BOOST * valence.signum();
                }
                if is_negator(prev) || i.checked_sub(2).is_some_and(|j| is_negator(&words[j])) {
                    valence *= NEGATION_SCALAR;
                }
            }
            sum += valence;
        }

        if sum == 0.0 {
            0.0
        } else {
            sum / (sum * sum + ALPHA).sqrt()
        }
    }
}

fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word) || word.ends_with("n't")
}

impl Default for LexiconSentiment {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer for LexiconSentiment {
    fn compound(&self, text: &str) -> Result<f64, ServiceError> {
        Ok(self.polarity(text))
    }
}
