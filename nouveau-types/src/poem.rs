//! The poem: shared, append-only state every selector and generator reads.

use crate::error::PoemError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who produced a line.
///
/// Serialized as a plain string. `"human"` and `"ai"` are reserved; any
/// other value names an agent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Author {
    /// The human participant.
    Human,
    /// The default automated participant.
    Ai,
    /// A named agent.
    ///
    /// Never `"human"` or `"ai"` when built through [`Author::agent`] or
    /// `From`. A hand-built `Agent("human")` serializes to the reserved
    /// string and reads back as [`Author::Human`].
    Agent(String),
}

impl Author {
    /// An author named `name`. The reserved names map to [`Author::Human`]
    /// and [`Author::Ai`], so the result survives a serde round trip.
    pub fn agent(name: impl Into<String>) -> Self {
        Author::from(name.into())
    }

    /// The string form of this author.
    pub fn as_str(&self) -> &str {
        match self {
            Author::Human => "human",
            Author::Ai => "ai",
            Author::Agent(name) => name,
        }
    }
}

impl From<String> for Author {
    fn from(s: String) -> Self {
        match s.as_str() {
            "human" => Author::Human,
            "ai" => Author::Ai,
            _ => Author::Agent(s),
        }
    }
}

impl From<&str> for Author {
    fn from(s: &str) -> Self {
        Author::from(s.to_string())
    }
}

impl From<Author> for String {
    fn from(author: Author) -> Self {
        match author {
            Author::Agent(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One turn of the poem. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Who wrote it.
    pub author: Author,
    /// What they wrote. No shape is imposed; may span several verse lines.
    pub text: String,
}

impl Line {
    /// Create a line.
    pub fn new(author: impl Into<Author>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
        }
    }
}

/// A poem under construction.
///
/// `lines` only ever grows, one line per turn, and never past
/// `max_lines`. Deserialization enforces the same bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PoemRecord")]
pub struct Poem {
    max_lines: usize,
    model: String,
    generator: String,
    lines: Vec<Line>,
}

impl Poem {
    /// Create an empty poem that completes at `max_lines` lines.
    ///
    /// `model` and `generator` record provenance only.
    pub fn new(max_lines: usize, model: impl Into<String>, generator: impl Into<String>) -> Self {
        Self {
            max_lines,
            model: model.into(),
            generator: generator.into(),
            lines: Vec::new(),
        }
    }

    /// All lines in turn order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines written so far.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether no line has been written yet.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Target length of the session.
    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// Name of the text-generation backend in use.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Name of the generation strategy in use.
    pub fn generator(&self) -> &str {
        &self.generator
    }

    /// Whether the session has reached its target length.
    pub fn is_full(&self) -> bool {
        self.lines.len() >= self.max_lines
    }

    /// Turns left before the session completes.
    pub fn remaining(&self) -> usize {
        self.max_lines.saturating_sub(self.lines.len())
    }

    /// Text of the line at `index`; negative indices count from the end.
    pub fn text(&self, index: isize) -> Option<&str> {
        resolve_index(index, self.lines.len()).map(|i| self.lines[i].text.as_str())
    }

    /// Append one line. Fails without modifying the poem when it is full.
    pub fn add_line(
        &mut self,
        text: impl Into<String>,
        author: impl Into<Author>,
    ) -> Result<(), PoemError> {
        if self.is_full() {
            return Err(PoemError::Full {
                max_lines: self.max_lines,
            });
        }
        self.lines.push(Line::new(author, text));
        Ok(())
    }
}

/// Map a possibly-negative index onto `0..len`.
pub(crate) fn resolve_index(index: isize, len: usize) -> Option<usize> {
    let len = isize::try_from(len).ok()?;
    let resolved = if index < 0 { index + len } else { index };
    if (0..len).contains(&resolved) {
        usize::try_from(resolved).ok()
    } else {
        None
    }
}

#[derive(Deserialize)]
struct PoemRecord {
    max_lines: usize,
    #[serde(default)]
    model: String,
    #[serde(default)]
    generator: String,
    #[serde(default)]
    lines: Vec<Line>,
}

impl TryFrom<PoemRecord> for Poem {
    type Error = PoemError;

    fn try_from(record: PoemRecord) -> Result<Self, Self::Error> {
        if record.lines.len() > record.max_lines {
            return Err(PoemError::Full {
                max_lines: record.max_lines,
            });
        }
        Ok(Self {
            max_lines: record.max_lines,
            model: record.model,
            generator: record.generator,
            lines: record.lines,
        })
    }
}
