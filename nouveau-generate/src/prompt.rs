//! The bridge from a context selector to the text service.

use crate::config::GenerationConfig;
use nouveau_types::{ContextSelector, GenerateError, Generator, Poem, TextService};

/// One service call on the selected context.
///
/// Computes `prompt = selector.select(poem)` and returns
/// `service.generate(prompt, max_new_tokens)` unmodified.
///
/// # Example
///
/// ```
/// use nouveau_context::LastLines;
/// use nouveau_generate::PromptGenerator;
/// use nouveau_types::test_utils::EchoService;
/// use nouveau_types::{Author, Generator, Poem};
///
/// let mut poem = Poem::new(4, "fake", "last");
/// poem.add_line("closing", Author::Human).unwrap();
///
/// let mut service = EchoService::new();
/// let line = PromptGenerator::new(LastLines::new(1)).generate(&poem, &mut service).unwrap();
/// assert_eq!(line, "[closing]");
/// ```
#[derive(Debug, Clone)]
pub struct PromptGenerator<S> {
    selector: S,
    config: GenerationConfig,
}

impl<S: ContextSelector> PromptGenerator<S> {
    /// Create a generator with the default token budget.
    pub fn new(selector: S) -> Self {
        Self::with_config(selector, GenerationConfig::default())
    }

    /// Create a generator with explicit configuration.
    pub fn with_config(selector: S, config: GenerationConfig) -> Self {
        Self { selector, config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }
}

impl<S: ContextSelector> Generator for PromptGenerator<S> {
    fn generate(&self, poem: &Poem, service: &mut dyn TextService) -> Result<String, GenerateError> {
        let prompt = self.selector.select(poem)?;
        tracing::debug!(
            prompt_chars = prompt.len(),
            max_new_tokens = self.config.max_new_tokens,
            "nouveau.generate.prompt"
        );
        Ok(service.generate(&prompt, self.config.max_new_tokens)?)
    }
}
