//! Error types for each layer.

use thiserror::Error;

/// Invalid combinator parameters, rejected at construction time before
/// any service call is made.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A constrained generator must draw at least one candidate.
    #[error("n_candidates must be at least 1")]
    NoCandidates,

    /// An explicit line selector needs at least one index.
    #[error("index list must contain at least one index")]
    EmptyIndices,

    /// A range selector cannot step by zero.
    #[error("range step cannot be zero")]
    ZeroStep,

    /// A rhyme scorer compares at least one trailing character.
    #[error("rhyme window must be at least 1 character")]
    ZeroRhymeWindow,

    /// Score weights must be finite and non-negative.
    #[error("invalid score weight: {0}")]
    InvalidWeight(f64),
}

/// Context selection failures.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    /// An explicit index does not address a line in the poem.
    #[error("line index {index} out of range for poem of {len} lines")]
    IndexOutOfRange {
        /// The index as given (possibly negative).
        index: isize,
        /// Number of lines in the poem at selection time.
        len: usize,
    },
}

/// Errors surfaced by an external capability (text generation or
/// sentiment scoring).
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The backend is not loaded or not reachable.
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// The request reached the backend but failed.
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// The backend answered with something unusable.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Catch-all for other errors.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ServiceError {
    /// Whether retrying the whole turn might succeed.
    ///
    /// Generators never retry on their own; this is a hint for the
    /// calling surface.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ServiceError::Unavailable(_) | ServiceError::RequestFailed(_)
        )
    }
}

/// Errors from a single generator invocation.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Context selection failed before any service call.
    #[error("context selection failed: {0}")]
    Context(#[from] ContextError),

    /// The text or sentiment service failed. Propagated unchanged.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Strategy registry errors.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// No strategy is registered under this name.
    #[error("unknown generator {name:?}; available: {}", .available.join(", "))]
    NotFound {
        /// The name that was looked up.
        name: String,
        /// Every registered name, in registration order.
        available: Vec<String>,
    },

    /// A strategy with this name is already registered.
    #[error("generator {0:?} is already registered")]
    Duplicate(String),

    /// Building a built-in strategy failed.
    #[error("invalid strategy configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Poem mutation errors.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoemError {
    /// The poem already holds `max_lines` lines.
    #[error("poem is full ({max_lines} lines)")]
    Full {
        /// The poem's target length.
        max_lines: usize,
    },
}
