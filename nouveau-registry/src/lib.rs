#![deny(missing_docs)]
//! Built-in generation strategies and the registry that names them.
//!
//! A [`GeneratorRegistry`] is an explicitly constructed, ordered mapping
//! from strategy name to generator. [`GeneratorRegistry::standard`] fills
//! one with every [`Strategy`]; callers may register their own
//! compositions next to them.
//!
//! ```
//! use nouveau_registry::{GeneratorRegistry, StrategyConfig};
//! use nouveau_types::test_utils::EchoService;
//! use nouveau_types::{Author, Generator, Poem};
//!
//! let registry = GeneratorRegistry::standard(&StrategyConfig::default()).unwrap();
//! let generator = registry.lookup("last").unwrap();
//!
//! let mut poem = Poem::new(4, "fake", "last");
//! poem.add_line("moonlight on the stair", Author::Human).unwrap();
//! let line = generator.generate(&poem, &mut EchoService::new()).unwrap();
//! assert_eq!(line, "[moonlight on the]");
//! ```

pub mod config;
pub mod registry;
pub mod strategy;

pub use config::StrategyConfig;
pub use registry::GeneratorRegistry;
pub use strategy::Strategy;
