//! External capabilities consumed by the core.
//!
//! Both traits are narrow; tests inject deterministic doubles in place
//! of a real model or sentiment backend.

use crate::error::ServiceError;

/// A text-generation backend.
///
/// Assumed stochastic (identical calls may return different text) and
/// blocking. Takes `&mut self`: the backend is a single stateful,
/// non-reentrant resource and callers hold it exclusively for the
/// duration of one call. How the backend is built, which weights it
/// loads and how it decodes are the backend's business.
pub trait TextService {
    /// Continue `prompt` with at most `max_new_tokens` new tokens.
    fn generate(&mut self, prompt: &str, max_new_tokens: u32) -> Result<String, ServiceError>;
}

impl<T: TextService + ?Sized> TextService for &mut T {
    fn generate(&mut self, prompt: &str, max_new_tokens: u32) -> Result<String, ServiceError> {
        (**self).generate(prompt, max_new_tokens)
    }
}

impl<T: TextService + ?Sized> TextService for Box<T> {
    fn generate(&mut self, prompt: &str, max_new_tokens: u32) -> Result<String, ServiceError> {
        (**self).generate(prompt, max_new_tokens)
    }
}

/// A sentiment scoring primitive.
pub trait SentimentAnalyzer: Send + Sync {
    /// Compound polarity of `text`, conventionally within `-1.0..=1.0`.
    fn compound(&self, text: &str) -> Result<f64, ServiceError>;
}

impl<T: SentimentAnalyzer + ?Sized> SentimentAnalyzer for &T {
    fn compound(&self, text: &str) -> Result<f64, ServiceError> {
        (**self).compound(text)
    }
}

impl<T: SentimentAnalyzer + ?Sized> SentimentAnalyzer for Box<T> {
    fn compound(&self, text: &str) -> Result<f64, ServiceError> {
        (**self).compound(text)
    }
}

impl<T: SentimentAnalyzer + ?Sized> SentimentAnalyzer for std::sync::Arc<T> {
    fn compound(&self, text: &str) -> Result<f64, ServiceError> {
        (**self).compound(text)
    }
}
