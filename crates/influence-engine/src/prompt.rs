//! Prompt construction for the pair and path requests

use influence_domain::Difficulty;

/// Builds the prompt asking for a challenge pair
pub struct PairPromptBuilder {
    difficulty: Difficulty,
}

impl PairPromptBuilder {
    /// Create a new pair prompt builder
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    /// Build the complete pair prompt
    pub fn build(&self) -> String {
        format!(
            "{} {} {}",
            GAME_FRAMING,
            self.difficulty_clause(),
            PAIR_FORMAT_INSTRUCTIONS
        )
    }

    /// The sentence describing how far apart the two people should be
    fn difficulty_clause(&self) -> &'static str {
        match self.difficulty {
            Difficulty::Easy => EASY_CLAUSE,
            Difficulty::Medium => MEDIUM_CLAUSE,
            Difficulty::Hard => HARD_CLAUSE,
            Difficulty::Unspecified => DEFAULT_CLAUSE,
        }
    }
}

/// Builds the prompt asking for an example chain between two people
pub struct PathPromptBuilder<'a> {
    person1: &'a str,
    person2: &'a str,
    difficulty: Difficulty,
}

impl<'a> PathPromptBuilder<'a> {
    /// Create a new path prompt builder
    pub fn new(person1: &'a str, person2: &'a str, difficulty: Difficulty) -> Self {
        Self {
            person1,
            person2,
            difficulty,
        }
    }

    /// Build the complete path prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. What we want
        prompt.push_str(&format!(
            "I need a plausible chain of connections between {p1} and {p2}, where each person \
             in the chain has plausibly met the next person in real life.\n",
            p1 = self.person1,
            p2 = self.person2,
        ));
        prompt.push_str(&format!(
            "The chain should start with {} and end with {}, and should include about {} \
             intermediate people.\n\n",
            self.person1,
            self.person2,
            self.difficulty.band_label(),
        ));

        // 2. Keep annotations tiny
        prompt.push_str(EXPLANATION_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 3. Numbered list format
        prompt.push_str("YOU MUST FOLLOW THIS EXACT FORMAT WITH A NUMBERED LIST:\n");
        prompt.push_str(&format!("1. {}\n", self.person1));
        prompt.push_str("2. [Person Name] - [3-5 word explanation]\n");
        prompt.push_str("3. [Next Person] - [3-5 word explanation]\n");
        prompt.push_str("...\n");
        prompt.push_str(&format!(
            "[Last Number]. {} - [3-5 word explanation]\n\n",
            self.person2
        ));
        prompt.push_str(PATH_FORMAT_REMINDER);

        prompt
    }
}

const GAME_FRAMING: &str = "I'm playing a game called \"Web of Influence\" where I need to think \
of a chain of direct meetings between two people. Please give me two real people (full names) \
that might be connected through a chain of acquaintances.";

const EASY_CLAUSE: &str = "The connection should be relatively easy to figure out - choose two \
famous people from similar time periods or industries who are likely only 2-4 connections apart. \
Examples could be: two modern celebrities, two politicians, a famous actor and a famous musician, etc.";

const MEDIUM_CLAUSE: &str = "The connection should be moderately challenging - choose two \
well-known people who are likely 3-5 connections apart. They could be from somewhat different \
fields or time periods, like a modern politician and a famous athlete, or a current celebrity and \
a historical figure from the late 20th century.";

const HARD_CLAUSE: &str = "The connection should be very challenging - choose two people who \
would require creative thinking to connect, likely 5-7 connections apart. They could be from \
completely different eras (but with some potential overlap through very old/young people), \
different cultures, or obscure fields. Examples: a historical scientist and a modern artist, an \
ancient philosopher and a current athlete, etc.";

const DEFAULT_CLAUSE: &str = "The connection should be moderately challenging - choose two \
people who are likely 3-5 connections apart.";

const PAIR_FORMAT_INSTRUCTIONS: &str = "YOU MUST RETURN YOUR RESPONSE USING EXACTLY THIS FORMAT \
WITH NO ADDITIONAL TEXT OR EXPLANATION:
Person1: [First Person Full Name]
Person2: [Second Person Full Name]";

const EXPLANATION_INSTRUCTIONS: &str = "KEEP ALL EXPLANATIONS EXTREMELY SHORT - NO MORE THAN 3-5 \
WORDS EACH. For example: \"colleagues\", \"same TV show\", \"both in politics\", etc.";

const PATH_FORMAT_REMINDER: &str =
    "DO NOT ADD ANY OTHER TEXT, INTRODUCTION OR EXPLANATION BEFORE OR AFTER THE NUMBERED LIST.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_prompt_is_deterministic() {
        let first = PairPromptBuilder::new(Difficulty::Hard).build();
        let second = PairPromptBuilder::new(Difficulty::Hard).build();
        assert_eq!(first, second);
    }

    #[test]
    fn test_pair_prompt_includes_format_directive() {
        let prompt = PairPromptBuilder::new(Difficulty::Easy).build();
        assert!(prompt.starts_with("I'm playing a game called \"Web of Influence\""));
        assert!(prompt.ends_with("Person1: [First Person Full Name]\nPerson2: [Second Person Full Name]"));
    }

    #[test]
    fn test_pair_prompt_difficulty_bands() {
        assert!(PairPromptBuilder::new(Difficulty::Easy).build().contains("2-4 connections"));
        assert!(PairPromptBuilder::new(Difficulty::Medium).build().contains("3-5 connections"));
        assert!(PairPromptBuilder::new(Difficulty::Hard).build().contains("5-7 connections"));
    }

    #[test]
    fn test_unspecified_uses_generic_clause() {
        let prompt = PairPromptBuilder::new(Difficulty::Unspecified).build();
        assert!(prompt.contains(DEFAULT_CLAUSE));
        assert!(!prompt.contains("late 20th century"));
    }

    #[test]
    fn test_path_prompt_includes_people() {
        let prompt = PathPromptBuilder::new("Ada Lovelace", "Cristiano Ronaldo", Difficulty::Hard).build();
        assert!(prompt.contains("between Ada Lovelace and Cristiano Ronaldo"));
        assert!(prompt.contains("1. Ada Lovelace\n"));
        assert!(prompt.contains("[Last Number]. Cristiano Ronaldo - [3-5 word explanation]"));
        assert!(prompt.contains("about 5-7 intermediate people"));
    }

    #[test]
    fn test_path_prompt_band_per_difficulty() {
        let easy = PathPromptBuilder::new("A", "B", Difficulty::Easy).build();
        let unspecified = PathPromptBuilder::new("A", "B", Difficulty::Unspecified).build();
        assert!(easy.contains("about 2-4 intermediate people"));
        assert!(unspecified.contains("about 3-5 intermediate people"));
    }

    #[test]
    fn test_path_prompt_ends_with_reminder() {
        let prompt = PathPromptBuilder::new("A", "B", Difficulty::Medium).build();
        assert!(prompt.ends_with(PATH_FORMAT_REMINDER));
        assert!(prompt.contains("NO MORE THAN 3-5 WORDS EACH"));
    }
}
