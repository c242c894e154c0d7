//! The closed set of built-in strategies.

use crate::config::StrategyConfig;
use nouveau_context::{FirstLines, LastLines, LineWindow};
use nouveau_generate::{Conditional, Constrained, FinalTurn, PromptGenerator};
use nouveau_score::{RhymeScorer, SentimentScorer, SyllableScorer};
use nouveau_types::{
    Generator, LineSelector, RegistryError, SentimentAnalyzer, SliceSpec,
};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A built-in generation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Continue from the previous line.
    Last,
    /// Continue from the opening line.
    First,
    /// Continue from the previous line, but close on the opening line.
    Closure,
    /// Continue from the last `window_size` lines.
    Window,
    /// Continue from the opening and the previous line together.
    Bookend,
    /// Continue from every second line, starting with the first.
    Alternating,
    /// Best of `n_candidates` by end rhyme with the previous line.
    Rhyme,
    /// Best of `n_candidates` by distance from `syllable_target`.
    Syllable,
    /// Best of `n_candidates` by distance from `sentiment_target`.
    Sentiment,
}

impl Strategy {
    /// Every built-in strategy, in registration order.
    pub const ALL: [Strategy; 9] = [
        Strategy::Last,
        Strategy::First,
        Strategy::Closure,
        Strategy::Window,
        Strategy::Bookend,
        Strategy::Alternating,
        Strategy::Rhyme,
        Strategy::Syllable,
        Strategy::Sentiment,
    ];

    /// The registry name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Last => "last",
            Strategy::First => "first",
            Strategy::Closure => "closure",
            Strategy::Window => "window",
            Strategy::Bookend => "bookend",
            Strategy::Alternating => "alternating",
            Strategy::Rhyme => "rhyme",
            Strategy::Syllable => "syllable",
            Strategy::Sentiment => "sentiment",
        }
    }

    /// Build this strategy's generator.
    ///
    /// `analyzer` is only used by [`Strategy::Sentiment`].
    pub fn build(
        &self,
        config: &StrategyConfig,
        analyzer: &Arc<dyn SentimentAnalyzer>,
    ) -> Result<Arc<dyn Generator>, RegistryError> {
        let generation = config.generation();
        let prompt = |selector: LineWindow| PromptGenerator::with_config(selector, generation);

        let generator: Arc<dyn Generator> = match self {
            Strategy::Last => Arc::new(PromptGenerator::with_config(LastLines::new(1), generation)),
            Strategy::First => Arc::new(PromptGenerator::with_config(FirstLines::new(1), generation)),
            Strategy::Closure => Arc::new(Conditional::new(
                FinalTurn,
                PromptGenerator::with_config(FirstLines::new(1), generation),
                PromptGenerator::with_config(LastLines::new(1), generation),
            )),
            Strategy::Window => Arc::new(prompt(LineWindow::new(LineSelector::last(
                config.window_size,
            ))?)),
            Strategy::Bookend => Arc::new(prompt(LineWindow::new(LineSelector::indices(vec![
                0, -1,
            ])?)?)),
            Strategy::Alternating => Arc::new(prompt(LineWindow::new(LineSelector::Range(
                SliceSpec::every(2)?,
            ))?)),
            Strategy::Rhyme => Arc::new(Constrained::new(
                LastLines::new(1),
                RhymeScorer::new(config.rhyme_chars)?,
                config.constrained(),
            )?),
            Strategy::Syllable => Arc::new(Constrained::new(
                LastLines::new(1),
                SyllableScorer::new(config.syllable_target),
                config.constrained(),
            )?),
            Strategy::Sentiment => Arc::new(Constrained::new(
                LastLines::new(config.window_size),
                SentimentScorer::new(config.sentiment_target, Arc::clone(analyzer)),
                config.constrained(),
            )?),
        };
        Ok(generator)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| RegistryError::NotFound {
                name: s.to_string(),
                available: Strategy::ALL.iter().map(|st| st.as_str().to_string()).collect(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.as_str().parse::<Strategy>().unwrap(), strategy);
            assert_eq!(strategy.to_string(), strategy.as_str());
        }
    }

    #[test]
    fn unknown_name_lists_builtins() {
        let err = "haiku".parse::<Strategy>().unwrap_err();
        let RegistryError::NotFound { name, available } = err else {
            panic!("expected NotFound");
        };
        assert_eq!(name, "haiku");
        assert_eq!(available.len(), Strategy::ALL.len());
        assert_eq!(available[0], "last");
        assert_eq!(available[8], "sentiment");
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!("Last".parse::<Strategy>().is_err());
    }
}
