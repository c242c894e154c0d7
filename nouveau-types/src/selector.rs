//! Line selection specifications.
//!
//! A [`LineSelector`] is a plain parameter value: it says *which* lines a
//! line-granular context selector should read, and nothing else.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Which lines of a poem to select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSelector {
    /// The last `n` lines.
    Last(usize),
    /// Exactly these indices, in this order. Negative indices count from
    /// the end; duplicates are allowed.
    Indices(Vec<isize>),
    /// A half-open, stepped range with slice semantics.
    Range(SliceSpec),
}

impl LineSelector {
    /// Select the last `n` lines.
    pub fn last(n: usize) -> Self {
        LineSelector::Last(n)
    }

    /// Select explicit indices. At least one index is required.
    pub fn indices(indices: Vec<isize>) -> Result<Self, ConfigError> {
        if indices.is_empty() {
            return Err(ConfigError::EmptyIndices);
        }
        Ok(LineSelector::Indices(indices))
    }

    /// Select a stepped range. `step` must be non-zero.
    pub fn range(start: Option<isize>, stop: Option<isize>, step: isize) -> Result<Self, ConfigError> {
        SliceSpec::new(start, stop, step).map(LineSelector::Range)
    }

    /// Check the invariants the constructors enforce. Used when a selector
    /// arrives through deserialization rather than a constructor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            LineSelector::Last(_) => Ok(()),
            LineSelector::Indices(indices) if indices.is_empty() => Err(ConfigError::EmptyIndices),
            LineSelector::Indices(_) => Ok(()),
            LineSelector::Range(spec) if spec.step == 0 => Err(ConfigError::ZeroStep),
            LineSelector::Range(_) => Ok(()),
        }
    }
}

/// `start:stop:step` over a sequence, with the usual slice rules: bounds
/// are clamped, negative bounds count from the end, a negative step walks
/// backwards and swaps the default bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceSpec {
    /// First position, inclusive. `None` means "from the beginning" (or
    /// the end, when stepping backwards).
    pub start: Option<isize>,
    /// Last position, exclusive. `None` means "to the end" (or past the
    /// beginning, when stepping backwards).
    pub stop: Option<isize>,
    /// Stride. Never zero.
    pub step: isize,
}

impl SliceSpec {
    /// Build a slice specification. A zero `step` is rejected.
    pub fn new(start: Option<isize>, stop: Option<isize>, step: isize) -> Result<Self, ConfigError> {
        if step == 0 {
            return Err(ConfigError::ZeroStep);
        }
        Ok(Self { start, stop, step })
    }

    /// Every `step`-th position, starting at 0.
    pub fn every(step: isize) -> Result<Self, ConfigError> {
        Self::new(None, None, step)
    }

    /// Resolve to concrete positions within a sequence of `len` items.
    ///
    /// A zero step resolves to nothing.
    pub fn indices(&self, len: usize) -> Vec<usize> {
        let step = self.step;
        if step == 0 {
            return Vec::new();
        }
        let len = isize::try_from(len).unwrap_or(isize::MAX);
        let (lower, upper) = if step > 0 { (0, len) } else { (-1, len - 1) };

        let clamp = |bound: isize| {
            if bound < 0 {
                (bound + len).max(lower)
            } else {
                bound.min(upper)
            }
        };
        let start = match self.start {
            Some(s) => clamp(s),
            None if step > 0 => lower,
            None => upper,
        };
        let stop = match self.stop {
            Some(s) => clamp(s),
            None if step > 0 => upper,
            None => lower,
        };

        let mut out = Vec::new();
        let mut i = start;
        while (step > 0 && i < stop) || (step < 0 && i > stop) {
            // `i` is within 0..len on every iteration.
            out.push(i as usize);
            match i.checked_add(step) {
                Some(next) => i = next,
                None => break,
            }
        }
        out
    }
}
