//! Parse completion text into a challenge pair
//!
//! The reply is untrusted free text. It is normalized once, then handed to
//! an ordered list of strategies; the first one that recovers two non-empty
//! names wins. When none does, a constant default pair is used.

use crate::error::ParseError;
use crate::fallback::PARSER_DEFAULT_PAIR;
use influence_domain::ConnectionPair;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// "person 1", "PERSON1 :", "Person 2:" and friends
static LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bperson\s*([12])\b(\s*:)?").expect("label pattern is valid")
});

/// Bullets and list numbers in front of a line
static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[-*•]|\d+[.)])\s+").expect("list marker pattern is valid"));

static INLINE_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Person1:\s*([^,]+),\s*Person2:\s*(.+)").expect("inline pattern is valid")
});

/// Two capitalized words, e.g. "Taylor Swift"
static CAPITALIZED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][a-z]+ [A-Z][a-z]+\b").expect("name pattern is valid")
});

/// A completion reply after normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    text: String,
    lines: Vec<String>,
}

impl Reply {
    /// Normalize raw completion text
    ///
    /// Trims, drops markdown emphasis, canonicalizes `Person1:`/`Person2:`
    /// labels and splits into non-empty lines without list markers.
    pub fn normalize(content: &str) -> Self {
        let text = content.trim().replace("**", "").replace("__", "");
        let text = LABEL
            .replace_all(&text, |caps: &regex::Captures| {
                let colon = if caps.get(2).is_some() { ":" } else { "" };
                format!("Person{}{}", &caps[1], colon)
            })
            .into_owned();

        let lines = text
            .lines()
            .map(|line| LIST_MARKER.replace(line.trim(), "").trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        Self { text, lines }
    }

    /// The whole normalized text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Non-empty normalized lines
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Two names recovered by a strategy, not yet validated
type RawPair = (String, String);

type Strategy = fn(&Reply) -> Option<RawPair>;

/// Parse strategies, tried in order
const STRATEGIES: &[(&str, Strategy)] = &[
    ("labeled lines", labeled_lines),
    ("two lines", two_lines),
    ("inline labels", inline_labels),
    ("capitalized names", capitalized_names),
];

/// Parse completion text into a validated pair
///
/// # Errors
///
/// Returns `ParseError::InvalidPair` when the recovered names are the same
/// person or empty; callers answer that with a difficulty fallback.
///
/// # Examples
///
/// ```
/// use influence_engine::parse_connection_pair;
///
/// let pair = parse_connection_pair("Person1: Ada Lovelace\nPerson2: Alan Turing").unwrap();
/// assert_eq!(pair.person1(), "Ada Lovelace");
/// assert_eq!(pair.person2(), "Alan Turing");
/// ```
pub fn parse_connection_pair(content: &str) -> Result<ConnectionPair, ParseError> {
    let reply = Reply::normalize(content);

    let (person1, person2) = STRATEGIES
        .iter()
        .find_map(|(name, strategy)| {
            let pair = strategy(&reply)?;
            debug!("Pair recovered by {} strategy", name);
            Some(pair)
        })
        .unwrap_or_else(|| {
            warn!("Could not parse the response format, using default pair");
            let (person1, person2) = PARSER_DEFAULT_PAIR;
            (person1.to_string(), person2.to_string())
        });

    Ok(ConnectionPair::new(person1, person2)?)
}

/// Both names if neither is blank
fn non_empty(person1: &str, person2: &str) -> Option<RawPair> {
    let (person1, person2) = (person1.trim(), person2.trim());
    if person1.is_empty() || person2.is_empty() {
        return None;
    }
    Some((person1.to_string(), person2.to_string()))
}

/// Text after the first colon, or the whole line
fn strip_label(line: &str) -> &str {
    line.split_once(':').map_or(line, |(_, rest)| rest)
}

/// Lines starting with `Person1:` and `Person2:`
fn labeled_lines(reply: &Reply) -> Option<RawPair> {
    let find = |label: &str| {
        reply
            .lines()
            .iter()
            .find(|line| line.to_lowercase().starts_with(label))
            .map(|line| strip_label(line))
    };
    non_empty(find("person1:")?, find("person2:")?)
}

/// Exactly two lines, one name each
fn two_lines(reply: &Reply) -> Option<RawPair> {
    match reply.lines() {
        [first, second] => non_empty(strip_label(first), strip_label(second)),
        _ => None,
    }
}

/// `Person1: X, Person2: Y` on one line
fn inline_labels(reply: &Reply) -> Option<RawPair> {
    let caps = INLINE_PAIR.captures(reply.text())?;
    non_empty(&caps[1], &caps[2])
}

/// The first two distinct "Firstname Lastname" tokens anywhere
fn capitalized_names(reply: &Reply) -> Option<RawPair> {
    let mut names = CAPITALIZED_NAME.find_iter(reply.text()).map(|m| m.as_str());
    let first = names.next()?;
    let second = names.find(|name| !name.eq_ignore_ascii_case(first))?;
    non_empty(first, second)
}
