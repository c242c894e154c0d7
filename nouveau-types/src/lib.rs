//! # nouveau-types: protocol types for collaborative poem generation
//!
//! Defines the poem state every strategy reads and the narrow capability
//! traits that strategies are composed from.
//!
//! ## The Layers
//!
//! | Layer | Trait | What it does |
//! |-------|-------|-------------|
//! | Context selection | [`ContextSelector`] | Poem → prompt excerpt |
//! | Generation | [`Generator`] | Poem + text service → new line |
//! | Scoring | [`ScoreFactory`], [`Scorer`] | Poem → cost over candidates |
//!
//! ## The Capabilities
//!
//! | Capability | Trait | Provided by |
//! |------------|-------|-------------|
//! | Text generation | [`TextService`] | the model backend |
//! | Sentiment | [`SentimentAnalyzer`] | a scoring backend or built-in lexicon |
//!
//! Everything here is synchronous. A generator call blocks until the
//! service answers; nothing spawns threads or awaits.

#![deny(missing_docs)]

pub mod context;
pub mod error;
pub mod generator;
pub mod poem;
pub mod score;
pub mod selector;
pub mod service;

#[cfg(feature = "test-utils")]
pub mod test_utils;

// Re-exports for convenience
pub use context::ContextSelector;
pub use error::{
    ConfigError, ContextError, GenerateError, PoemError, RegistryError, ServiceError,
};
pub use generator::{Condition, Generator};
pub use poem::{Author, Line, Poem};
pub use score::{ScoreFactory, Scorer};
pub use selector::{LineSelector, SliceSpec};
pub use service::{SentimentAnalyzer, TextService};
