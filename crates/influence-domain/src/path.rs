//! Path module - an ordered chain of acquaintances between two people

use std::fmt;

/// Why a candidate path was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A path needs at least its two endpoints
    TooShort(usize),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::TooShort(len) => {
                write!(f, "a connection path needs at least 2 entries, got {}", len)
            }
        }
    }
}

impl std::error::Error for PathError {}

/// One person in a chain
///
/// Renders as `"<Name>"` or `"<Name> - <explanation>"`. The explanation says
/// how this person met the previous one and is kept short by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChainEntry {
    name: String,
    explanation: Option<String>,
}

impl ChainEntry {
    /// A bare entry with no explanation
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            explanation: None,
        }
    }

    /// An entry annotated with how the link was made
    ///
    /// A blank explanation yields a bare entry.
    pub fn with_explanation(name: impl Into<String>, explanation: impl Into<String>) -> Self {
        let explanation = explanation.into().trim().to_string();
        Self {
            name: name.into().trim().to_string(),
            explanation: (!explanation.is_empty()).then_some(explanation),
        }
    }

    /// The person's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The short relationship tag, if any
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    /// Whether the name case-insensitively contains `person`
    pub fn mentions(&self, person: &str) -> bool {
        self.name.to_lowercase().contains(&person.trim().to_lowercase())
    }

    /// Drop the explanation, keeping only the name
    pub fn without_explanation(self) -> Self {
        Self {
            name: self.name,
            explanation: None,
        }
    }
}

impl fmt::Display for ChainEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.explanation {
            Some(explanation) => write!(f, "{} - {}", self.name, explanation),
            None => f.write_str(&self.name),
        }
    }
}

/// An ordered chain of people, at least two long
///
/// Entries are never reordered. Parsers anchor the first entry on the
/// pair's first person and the last entry on the second person; use
/// [`ConnectionPath::is_anchored`] to check that.
///
/// # Examples
///
/// ```
/// use influence_domain::{ChainEntry, ConnectionPath};
///
/// let path = ConnectionPath::new(vec![
///     ChainEntry::new("Alice"),
///     ChainEntry::with_explanation("Bob", "old friends"),
///     ChainEntry::new("Carol"),
/// ]).unwrap();
///
/// assert_eq!(path.link_count(), 2);
/// assert!(path.is_anchored("alice", "Carol"));
/// assert_eq!(path.to_strings(), vec!["Alice", "Bob - old friends", "Carol"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionPath {
    entries: Vec<ChainEntry>,
}

impl ConnectionPath {
    /// Validate and build a path
    pub fn new(entries: Vec<ChainEntry>) -> Result<Self, PathError> {
        if entries.len() < 2 {
            return Err(PathError::TooShort(entries.len()));
        }
        Ok(Self { entries })
    }

    /// The minimal path: the two people met directly
    pub fn direct(person1: &str, person2: &str) -> Self {
        Self {
            entries: vec![ChainEntry::new(person1), ChainEntry::new(person2)],
        }
    }

    /// All entries in order
    pub fn entries(&self) -> &[ChainEntry] {
        &self.entries
    }

    /// The starting entry
    pub fn first(&self) -> &ChainEntry {
        &self.entries[0]
    }

    /// The final entry
    pub fn last(&self) -> &ChainEntry {
        &self.entries[self.entries.len() - 1]
    }

    /// The people strictly between the two endpoints
    pub fn intermediates(&self) -> &[ChainEntry] {
        &self.entries[1..self.entries.len() - 1]
    }

    /// Number of direct meetings in the chain
    pub fn link_count(&self) -> usize {
        self.entries.len() - 1
    }

    /// Whether the chain starts at `person1` and ends at `person2`
    pub fn is_anchored(&self, person1: &str, person2: &str) -> bool {
        self.first().mentions(person1) && self.last().mentions(person2)
    }

    /// Render every entry as its display string
    pub fn to_strings(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    /// Consume the path, returning its entries
    pub fn into_entries(self) -> Vec<ChainEntry> {
        self.entries
    }
}

impl fmt::Display for ConnectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.entries.iter().map(ChainEntry::name).collect();
        f.write_str(&names.join(" → "))
    }
}
