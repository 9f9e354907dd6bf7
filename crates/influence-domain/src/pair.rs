//! Pair module - the two people a challenge asks the player to connect

use std::fmt;

/// Why a candidate pair was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairError {
    /// The first name was empty after trimming
    EmptyPerson1,

    /// The second name was empty after trimming
    EmptyPerson2,

    /// Both names refer to the same person (case-insensitive)
    SamePerson(String),
}

impl fmt::Display for PairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairError::EmptyPerson1 => write!(f, "first person's name is empty"),
            PairError::EmptyPerson2 => write!(f, "second person's name is empty"),
            PairError::SamePerson(name) => {
                write!(f, "same person returned for both ends of the connection: {}", name)
            }
        }
    }
}

impl std::error::Error for PairError {}

/// Two distinct people, the endpoints of a challenge
///
/// Both names are trimmed and non-empty, and they differ under
/// case-insensitive comparison.
///
/// # Examples
///
/// ```
/// use influence_domain::{ConnectionPair, PairError};
///
/// let pair = ConnectionPair::new(" Ada Lovelace ", "Cristiano Ronaldo").unwrap();
/// assert_eq!(pair.person1(), "Ada Lovelace");
///
/// let same = ConnectionPair::new("Barack Obama", "barack obama");
/// assert!(matches!(same, Err(PairError::SamePerson(_))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionPair {
    person1: String,
    person2: String,
}

impl ConnectionPair {
    /// Validate and build a pair
    pub fn new(person1: impl Into<String>, person2: impl Into<String>) -> Result<Self, PairError> {
        let person1 = person1.into().trim().to_string();
        let person2 = person2.into().trim().to_string();

        if person1.is_empty() {
            return Err(PairError::EmptyPerson1);
        }
        if person2.is_empty() {
            return Err(PairError::EmptyPerson2);
        }
        if person1.to_lowercase() == person2.to_lowercase() {
            return Err(PairError::SamePerson(person1));
        }

        Ok(Self { person1, person2 })
    }

    /// The person the chain starts from
    pub fn person1(&self) -> &str {
        &self.person1
    }

    /// The person the chain ends at
    pub fn person2(&self) -> &str {
        &self.person2
    }

    /// Consume the pair, returning `(person1, person2)`
    pub fn into_names(self) -> (String, String) {
        (self.person1, self.person2)
    }
}

impl fmt::Display for ConnectionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.person1, self.person2)
    }
}
