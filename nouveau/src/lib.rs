#![deny(missing_docs)]
//! # nouveau: umbrella crate
//!
//! A single import surface for the nouveau workspace. Re-exports the
//! protocol crate and the implementations behind feature flags, plus a
//! `prelude` for the happy path.

#[cfg(feature = "core")]
pub use nouveau_context;
#[cfg(feature = "core")]
pub use nouveau_generate;
#[cfg(feature = "registry")]
pub use nouveau_registry;
#[cfg(feature = "score")]
pub use nouveau_score;
#[cfg(feature = "core")]
pub use nouveau_types;

/// Happy-path imports for composing poem generators.
pub mod prelude {
    #[cfg(feature = "core")]
    pub use nouveau_types::{
        Author, Condition, ConfigError, ContextError, ContextSelector, GenerateError, Generator,
        Line, LineSelector, Poem, PoemError, RegistryError, ScoreFactory, Scorer,
        SentimentAnalyzer, ServiceError, SliceSpec, TextService,
    };

    #[cfg(feature = "core")]
    pub use nouveau_context::{FirstLines, FirstWords, LastLines, LastWords, LineWindow};

    #[cfg(feature = "core")]
    pub use nouveau_generate::{
        Conditional, Constrained, ConstrainedConfig, FinalTurn, GenerationConfig, PromptGenerator,
    };

    #[cfg(feature = "score")]
    pub use nouveau_score::{
        LexiconSentiment, RhymeScorer, SentimentScorer, SyllableScorer, WeightedSum,
    };

    #[cfg(feature = "registry")]
    pub use nouveau_registry::{GeneratorRegistry, Strategy, StrategyConfig};
}
