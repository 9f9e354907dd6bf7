//! Chain entry formatting: splitting names from explanations and keeping
//! explanations short

use influence_domain::ChainEntry;
use serde::{Deserialize, Serialize};

/// Caps applied to every explanation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplanationLimits {
    /// Soft cap in characters; cut at a nearby space when possible
    pub max_chars: usize,

    /// Hard cap in whitespace-delimited words
    pub max_words: usize,
}

impl Default for ExplanationLimits {
    fn default() -> Self {
        Self {
            max_chars: 30,
            max_words: 5,
        }
    }
}

/// How far around `max_chars` a word break is looked for
const BREAK_WINDOW: usize = 5;

/// Spaced dashes that separate a name from its explanation
const SPACED_SEPARATORS: [&str; 3] = [" - ", " – ", " — "];

/// Split an entry into `(name, explanation)`
///
/// The earliest spaced dash wins, so hyphenated names like "Jean-Paul
/// Sartre - philosophy circles" stay intact. Without one, the first `-`
/// splits. Returns `None` when the entry has no dash at all.
pub fn split_entry(entry: &str) -> Option<(&str, &str)> {
    let spaced = SPACED_SEPARATORS
        .iter()
        .filter_map(|sep| entry.find(sep).map(|idx| (idx, sep.len())))
        .min_by_key(|(idx, _)| *idx);

    match spaced {
        Some((idx, len)) => Some((&entry[..idx], &entry[idx + len..])),
        None => entry.split_once('-'),
    }
}

/// Shorten an explanation to the configured caps
///
/// Over `max_chars`, the text is cut at the first space found from
/// `max_chars - 5` onwards if it lies before `max_chars + 5`, otherwise hard
/// at `max_chars`. At most `max_words` words are then kept, joined by single
/// spaces. Positions count characters, not bytes.
pub fn shorten_explanation(explanation: &str, limits: &ExplanationLimits) -> String {
    let chars: Vec<char> = explanation.chars().collect();

    let truncated: String = if chars.len() > limits.max_chars {
        let window_start = limits.max_chars.saturating_sub(BREAK_WINDOW);
        let window_end = limits.max_chars + BREAK_WINDOW;
        let stop = chars
            .iter()
            .enumerate()
            .skip(window_start)
            .find(|(_, c)| **c == ' ')
            .map(|(idx, _)| idx);

        let end = match stop {
            Some(idx) if idx > 0 && idx < window_end => idx,
            _ => limits.max_chars,
        };
        chars[..end].iter().collect()
    } else {
        explanation.to_string()
    };

    truncated
        .split_whitespace()
        .take(limits.max_words)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Turn one raw line of a chain into an entry with a short explanation
pub fn format_entry(raw: &str, limits: &ExplanationLimits) -> ChainEntry {
    let raw = raw.trim();
    match split_entry(raw) {
        None => ChainEntry::new(raw),
        Some((name, explanation)) => {
            ChainEntry::with_explanation(name, shorten_explanation(explanation.trim(), limits))
        }
    }
}

/// Format a raw entry with the default caps, returning its display string
///
/// # Examples
///
/// ```
/// use influence_engine::format_explanation;
///
/// assert_eq!(format_explanation("Bob - old friends"), "Bob - old friends");
/// assert_eq!(format_explanation("Carol"), "Carol");
/// assert_eq!(
///     format_explanation("Dan - met at a very long and winding charity gala dinner"),
///     "Dan - met at a very long"
/// );
/// ```
pub fn format_explanation(raw: &str) -> String {
    format_entry(raw, &ExplanationLimits::default()).to_string()
}
