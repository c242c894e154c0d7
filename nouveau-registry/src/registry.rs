//! Name → generator registry.

use crate::config::StrategyConfig;
use crate::strategy::Strategy;
use nouveau_score::LexiconSentiment;
use nouveau_types::{Generator, RegistryError, SentimentAnalyzer};
use std::fmt;
use std::sync::Arc;

/// An ordered mapping from strategy name to generator.
///
/// Built explicitly: nothing is discovered by name at runtime, and every
/// entry is registered by the caller or by [`GeneratorRegistry::standard`].
/// Generators are shared as `Arc<dyn Generator>`, so a registry can be
/// handed to several sessions at once.
#[derive(Clone, Default)]
pub struct GeneratorRegistry {
    entries: Vec<(String, Arc<dyn Generator>)>,
}

impl GeneratorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every built-in [`Strategy`], with the built-in lexicon as the
    /// sentiment primitive.
    pub fn standard(config: &StrategyConfig) -> Result<Self, RegistryError> {
        Self::with_sentiment(config, Arc::new(LexiconSentiment::new()))
    }

    /// Every built-in [`Strategy`], with a caller-supplied sentiment
    /// primitive.
    pub fn with_sentiment(
        config: &StrategyConfig,
        analyzer: Arc<dyn SentimentAnalyzer>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for strategy in Strategy::ALL {
            registry.register_dyn(strategy.as_str(), strategy.build(config, &analyzer)?)?;
        }
        Ok(registry)
    }

    /// Register a generator under `name`.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        generator: impl Generator + 'static,
    ) -> Result<(), RegistryError> {
        self.register_dyn(name, Arc::new(generator))
    }

    /// Register a pre-erased generator under `name`.
    ///
    /// Fails with [`RegistryError::Duplicate`] if the name is taken; the
    /// existing entry is kept.
    pub fn register_dyn(
        &mut self,
        name: impl Into<String>,
        generator: Arc<dyn Generator>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.contains(&name) {
            return Err(RegistryError::Duplicate(name));
        }
        self.entries.push((name, generator));
        Ok(())
    }

    /// The generator registered under `name`.
    pub fn lookup(&self, name: &str) -> Result<Arc<dyn Generator>, RegistryError> {
        match self.entries.iter().find(|(n, _)| n == name) {
            Some((_, generator)) => Ok(Arc::clone(generator)),
            None => {
                tracing::debug!(name, registered = self.entries.len(), "nouveau.registry.miss");
                Err(RegistryError::NotFound {
                    name: name.to_string(),
                    available: self.names().into_iter().map(str::to_string).collect(),
                })
            }
        }
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Number of registered generators.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("names", &self.names())
            .finish()
    }
}
