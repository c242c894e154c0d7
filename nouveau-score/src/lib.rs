#![deny(missing_docs)]
//! Score factories implementing [`ScoreFactory`].
//!
//! Every factory turns the poem's state at batch start into a [`Scorer`]:
//! a cost function over candidate lines where lower is better.
//!
//! | Factory | Cost |
//! |---------|------|
//! | [`SyllableScorer`] | distance from a target syllable count |
//! | [`RhymeScorer`] | 0 when the ending matches the previous line, else 1 |
//! | [`SentimentScorer`] | distance from a target compound sentiment |
//! | [`WeightedSum`] | weighted sum of other factories' costs |
//!
//! The syllable and rhyme measurements are heuristics. They are good
//! enough to steer sampling and are meant to be swapped for
//! dictionary-backed versions without changing any contract.
//!
//! [`ScoreFactory`]: nouveau_types::ScoreFactory
//! [`Scorer`]: nouveau_types::Scorer

pub mod lexicon;
pub mod rhyme;
pub mod sentiment;
pub mod syllable;
pub mod weighted;

pub use lexicon::LexiconSentiment;
pub use rhyme::{RhymeScorer, end_sound, final_word};
pub use sentiment::SentimentScorer;
pub use syllable::{SyllableScorer, count_syllables};
pub use weighted::WeightedSum;
