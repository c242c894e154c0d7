#![deny(missing_docs)]
//! Generator combinators implementing [`Generator`].
//!
//! - [`PromptGenerator`]: context selector → one text-service call
//! - [`Conditional`]: pick one of two generators by a pure predicate
//! - [`Constrained`]: draw several candidates, keep the lowest-cost one
//!
//! Combinators nest: a [`Conditional`] may dispatch to a [`Constrained`]
//! generator, which may score with a weighted sum of objectives. Only
//! [`PromptGenerator`] and [`Constrained`] ever call the text service.
//!
//! All calls are synchronous. Candidate draws happen sequentially in a
//! fixed order, so a scripted service yields reproducible selections.
//!
//! [`Generator`]: nouveau_types::Generator

pub mod conditional;
pub mod config;
pub mod constrained;
pub mod prompt;

pub use conditional::{Conditional, FinalTurn};
pub use config::{ConstrainedConfig, DEFAULT_CANDIDATES, DEFAULT_MAX_NEW_TOKENS, GenerationConfig};
pub use constrained::{Candidate, Constrained, select_best};
pub use prompt::PromptGenerator;
