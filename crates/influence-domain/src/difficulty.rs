//! Difficulty module - how far apart the two people of a challenge are

use std::fmt;

/// Difficulty of a challenge
///
/// Drives both the prompt phrasing and the fallback content:
/// - Easy: people from similar eras or industries, 2-4 links apart
/// - Medium: somewhat different fields or periods, 3-5 links apart
/// - Hard: different eras, cultures or obscure fields, 5-7 links apart
/// - Unspecified: any unrecognized tag; mostly behaves like Medium
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Closely related people
    Easy,

    /// Moderately distant people
    #[default]
    Medium,

    /// Very distant people
    Hard,

    /// No recognized difficulty was given
    Unspecified,
}

impl Difficulty {
    /// The difficulties a player can pick
    pub const SELECTABLE: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Resolve a difficulty tag, never failing
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use influence_domain::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_tag("Hard"), Difficulty::Hard);
    /// assert_eq!(Difficulty::from_tag("impossible"), Difficulty::Unspecified);
    /// ```
    pub fn from_tag(tag: &str) -> Self {
        Self::parse(tag).unwrap_or(Difficulty::Unspecified)
    }

    /// Parse one of the selectable difficulties
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Get the difficulty tag as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Unspecified => "unspecified",
        }
    }

    /// Expected number of links in a chain, as an inclusive range
    pub fn chain_length_band(&self) -> (usize, usize) {
        match self {
            Difficulty::Easy => (2, 4),
            Difficulty::Medium | Difficulty::Unspecified => (3, 5),
            Difficulty::Hard => (5, 7),
        }
    }

    /// The chain length band rendered as `"lo-hi"`
    pub fn band_label(&self) -> String {
        let (lo, hi) = self.chain_length_band();
        format!("{}-{}", lo, hi)
    }

    /// The difficulty whose tables are used when this one has none of its own
    pub fn resolved(&self) -> Self {
        match self {
            Difficulty::Unspecified => Difficulty::Medium,
            other => *other,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Difficulty {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid difficulty: {} (expected easy, medium or hard)", s))
    }
}
