//! Deterministic fallback values
//!
//! Served whenever the completion call or the parser fails. Nothing here
//! can fail and nothing here is random: the same inputs always give the same
//! output.

use influence_domain::{ChainEntry, ConnectionPair, ConnectionPath, Difficulty};

/// The pair the parser settles on when no strategy recovers two names
///
/// Distinct from the per-difficulty table below: it answers "the model said
/// something unreadable", not "the round could not be set up".
pub const PARSER_DEFAULT_PAIR: (&str, &str) = ("Albert Einstein", "Barack Obama");

/// Generic intermediaries used to synthesize a chain, in order
pub const FALLBACK_INTERMEDIATES: [(&str, &str); 5] = [
    ("Mutual Friend", "social circle"),
    ("Famous Actor", "industry event"),
    ("Talk Show Host", "TV interview"),
    ("Director", "film collaboration"),
    ("Politician", "public event"),
];

/// The hardcoded names behind [`fallback_pair`]
pub fn fallback_names(difficulty: Difficulty) -> (&'static str, &'static str) {
    match difficulty.resolved() {
        Difficulty::Easy => ("Barack Obama", "Taylor Swift"),
        Difficulty::Hard => ("Ada Lovelace", "Cristiano Ronaldo"),
        _ => ("Albert Einstein", "Beyoncé"),
    }
}

/// The fixed challenge pair for a difficulty
///
/// Unspecified difficulty gets the medium pair.
pub fn fallback_pair(difficulty: Difficulty) -> ConnectionPair {
    let (person1, person2) = fallback_names(difficulty);
    ConnectionPair::new(person1, person2).expect("fallback table holds distinct, non-empty names")
}

/// How many generic intermediaries a synthesized chain gets
pub fn intermediate_count(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Easy => 1,
        Difficulty::Medium => 3,
        Difficulty::Hard => 5,
        Difficulty::Unspecified => 2,
    }
}

/// Synthesize `[person1, ...generic intermediaries, person2]`
///
/// # Examples
///
/// ```
/// use influence_domain::Difficulty;
/// use influence_engine::fallback_path;
///
/// let path = fallback_path("Alice", "Carol", Difficulty::Easy);
/// assert_eq!(path.to_strings(), vec!["Alice", "Mutual Friend - social circle", "Carol"]);
/// ```
pub fn fallback_path(person1: &str, person2: &str, difficulty: Difficulty) -> ConnectionPath {
    let intermediates = FALLBACK_INTERMEDIATES
        .iter()
        .take(intermediate_count(difficulty))
        .map(|(role, reason)| ChainEntry::with_explanation(*role, *reason));

    let entries: Vec<ChainEntry> = std::iter::once(ChainEntry::new(person1))
        .chain(intermediates)
        .chain(std::iter::once(ChainEntry::new(person2)))
        .collect();

    ConnectionPath::new(entries).unwrap_or_else(|_| ConnectionPath::direct(person1, person2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Unspecified,
    ];

    #[test]
    fn test_fallback_pairs_are_distinct_and_non_empty() {
        for difficulty in ALL {
            let pair = fallback_pair(difficulty);
            assert!(!pair.person1().is_empty());
            assert!(!pair.person2().is_empty());
            assert_ne!(pair.person1().to_lowercase(), pair.person2().to_lowercase());
        }
    }

    #[test]
    fn test_fallback_pair_table() {
        assert_eq!(fallback_pair(Difficulty::Easy).person2(), "Taylor Swift");
        assert_eq!(fallback_pair(Difficulty::Medium).person2(), "Beyoncé");
        assert_eq!(fallback_pair(Difficulty::Hard).person1(), "Ada Lovelace");
        assert_eq!(
            fallback_pair(Difficulty::Unspecified),
            fallback_pair(Difficulty::Medium)
        );
    }

    #[test]
    fn test_parser_default_differs_from_table() {
        for difficulty in ALL {
            assert_ne!(fallback_names(difficulty), PARSER_DEFAULT_PAIR);
        }
    }

    #[test]
    fn test_fallback_path_lengths() {
        assert_eq!(fallback_path("A", "B", Difficulty::Easy).entries().len(), 3);
        assert_eq!(fallback_path("A", "B", Difficulty::Medium).entries().len(), 5);
        assert_eq!(fallback_path("A", "B", Difficulty::Hard).entries().len(), 7);
        assert_eq!(fallback_path("A", "B", Difficulty::Unspecified).entries().len(), 4);
    }

    #[test]
    fn test_fallback_path_shape() {
        let path = fallback_path("Ada Lovelace", "Cristiano Ronaldo", Difficulty::Hard);
        assert_eq!(
            path.to_strings(),
            vec![
                "Ada Lovelace",
                "Mutual Friend - social circle",
                "Famous Actor - industry event",
                "Talk Show Host - TV interview",
                "Director - film collaboration",
                "Politician - public event",
                "Cristiano Ronaldo",
            ]
        );
        assert!(path.is_anchored("Ada Lovelace", "Cristiano Ronaldo"));
    }

    proptest! {
        #[test]
        fn prop_fallback_path_is_idempotent(p1 in "[A-Za-z ]{1,20}", p2 in "[A-Za-z ]{1,20}", idx in 0usize..4) {
            let difficulty = ALL[idx];
            let first = fallback_path(&p1, &p2, difficulty);
            let second = fallback_path(&p1, &p2, difficulty);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.entries().len(), intermediate_count(difficulty) + 2);
        }
    }
}
