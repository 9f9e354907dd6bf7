//! Parse completion text into a connection path

use crate::error::ParseError;
use crate::format::{format_entry, ExplanationLimits};
use influence_domain::{ChainEntry, ConnectionPath};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// `"3. Somebody - how they met"`
static NUMBERED_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*(.+)$").expect("numbered entry pattern is valid"));

/// Parse completion text into a path anchored on `person1` and `person2`
///
/// Numbered lines are read first; when there are none, every line starting
/// with an uppercase letter is taken instead. The first and last entries are
/// then replaced by their bare names, or by the expected person when they
/// do not mention them.
///
/// # Errors
///
/// Returns `ParseError::TooFewEntries` when fewer than two usable entries
/// were found.
pub fn extract_connection_path(
    content: &str,
    person1: &str,
    person2: &str,
    limits: &ExplanationLimits,
) -> Result<ConnectionPath, ParseError> {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut entries: Vec<ChainEntry> = lines
        .iter()
        .filter_map(|line| NUMBERED_ENTRY.captures(line))
        .filter_map(|caps| usable_entry(&caps[1], limits))
        .collect();

    if entries.is_empty() {
        debug!("No numbered entries, falling back to capitalized lines");
        entries = lines
            .iter()
            .filter(|line| line.starts_with(|c: char| c.is_ascii_uppercase()))
            .filter_map(|line| usable_entry(line, limits))
            .collect();
    }

    if entries.len() < 2 {
        return Err(ParseError::TooFewEntries(entries.len()));
    }

    let last = entries.len() - 1;
    entries[0] = anchor(entries[0].clone(), person1);
    entries[last] = anchor(entries[last].clone(), person2);

    Ok(ConnectionPath::new(entries)?)
}

/// Lenient variant: degrades to the direct path `[person1, person2]`
///
/// # Examples
///
/// ```
/// use influence_engine::parse_connection_path;
///
/// let path = parse_connection_path("1. Alice\n2. Bob - old friends\n3. Carol", "Alice", "Carol");
/// assert_eq!(path.to_strings(), vec!["Alice", "Bob - old friends", "Carol"]);
///
/// let path = parse_connection_path("I cannot help with that.", "Alice", "Carol");
/// assert_eq!(path.to_strings(), vec!["Alice", "Carol"]);
/// ```
pub fn parse_connection_path(content: &str, person1: &str, person2: &str) -> ConnectionPath {
    extract_connection_path(content, person1, person2, &ExplanationLimits::default())
        .unwrap_or_else(|e| {
            warn!("Could not parse enough people from the connection path: {}", e);
            ConnectionPath::direct(person1, person2)
        })
}

/// Format a raw entry, dropping it when no name is left
fn usable_entry(raw: &str, limits: &ExplanationLimits) -> Option<ChainEntry> {
    let entry = format_entry(&raw.replace("**", ""), limits);
    (!entry.name().is_empty()).then_some(entry)
}

/// Keep just the name if it mentions `person`, else use `person` itself
fn anchor(entry: ChainEntry, person: &str) -> ChainEntry {
    if entry.mentions(person) {
        entry.without_explanation()
    } else {
        ChainEntry::new(person)
    }
}
