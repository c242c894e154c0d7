//! Deterministic capability doubles for testing.
//!
//! Available behind the `test-utils` feature flag. None of these touch a
//! real model; they make generator behavior reproducible.

mod echo_service;
mod failing_service;
mod fixed_sentiment;
mod scripted_service;

pub use echo_service::EchoService;
pub use failing_service::FailingService;
pub use fixed_sentiment::FixedSentiment;
pub use scripted_service::{Call, ScriptedService};
