#![deny(missing_docs)]
//! Context selectors implementing [`ContextSelector`].
//!
//! Each selector turns the poem so far into the prompt excerpt a
//! generator sends to the text service:
//!
//! - [`LastLines`] / [`FirstLines`]: newline-joined line windows
//! - [`LineWindow`]: any [`LineSelector`]: last N, explicit indices, or a stepped range
//! - [`LastWords`] / [`FirstWords`]: word windows across line boundaries
//!
//! All selectors are pure. An empty poem selects an empty string.
//!
//! [`ContextSelector`]: nouveau_types::ContextSelector
//! [`LineSelector`]: nouveau_types::LineSelector

pub mod lines;
pub mod words;

pub use lines::{FirstLines, LastLines, LineWindow};
pub use words::{FirstWords, LastWords};
