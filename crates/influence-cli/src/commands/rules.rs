//! Rules command implementation.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::Formatter;
use influence_domain::{ChainEntry, ConnectionPath, Difficulty};

/// The game rules, in order.
pub const STEPS: [&str; 5] = [
    "You are given two people.",
    "Think of a chain of people who have plausibly met in real life.",
    "Everyone in the chain must have plausibly met the people directly before and after them.",
    "The chain starts with the first person and ends with the second.",
    "When you have a chain in mind, say \"got it\" to compare it with ours.",
];

/// What each difficulty asks of the player.
pub fn describe(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "well-known people",
        Difficulty::Medium | Difficulty::Unspecified => "people from somewhat different fields",
        Difficulty::Hard => "people from very different eras or fields",
    }
}

/// A worked example connecting Albert Einstein to Barack Obama.
pub fn example_chain() -> ConnectionPath {
    ConnectionPath::new(vec![
        ChainEntry::new("Albert Einstein"),
        ChainEntry::with_explanation("J. Robert Oppenheimer", "Manhattan Project"),
        ChainEntry::with_explanation("Robert McNamara", "Pentagon colleagues"),
        ChainEntry::with_explanation("Bill Clinton", "political circles"),
        ChainEntry::new("Barack Obama"),
    ])
    .expect("example chain has five entries")
}

/// Render the rules for the selected output format.
pub fn render(formatter: &Formatter) -> Result<String> {
    let example = example_chain();

    if formatter.format() == OutputFormat::Json {
        let difficulties: Vec<serde_json::Value> = Difficulty::SELECTABLE
            .iter()
            .map(|d| {
                serde_json::json!({
                    "difficulty": d.as_str(),
                    "chain_length": d.band_label(),
                    "description": describe(*d),
                })
            })
            .collect();

        let chain: Vec<String> = example.entries().iter().map(ToString::to_string).collect();

        return Ok(serde_json::to_string_pretty(&serde_json::json!({
            "rules": STEPS,
            "example": chain,
            "difficulties": difficulties,
        }))?);
    }

    let mut out = String::new();
    out.push_str("How to play Web of Influence\n\n");
    out.push_str("Find a chain of real-life meetings between two seemingly unrelated people.\n\n");

    for (idx, step) in STEPS.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", idx + 1, step));
    }

    out.push_str(&format!(
        "\nExample: connecting {} to {} might go\n\n",
        example.first().name(),
        example.last().name()
    ));
    out.push_str(&formatter.format_path(&example)?);
    out.push_str("\n\nDifficulty levels:\n");

    for difficulty in Difficulty::SELECTABLE {
        out.push_str(&format!(
            "  {:<7} {} links between {}\n",
            difficulty.as_str(),
            difficulty.band_label(),
            describe(difficulty)
        ));
    }

    out.push_str("\nThere is no single right answer: any chain of plausible meetings counts.");
    Ok(out)
}

/// Execute the rules command.
pub fn execute_rules(formatter: &Formatter) -> Result<()> {
    println!("{}", render(formatter)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_chain_is_anchored() {
        let chain = example_chain();
        assert!(chain.is_anchored("Albert Einstein", "Barack Obama"));
        assert_eq!(chain.link_count(), 4);
        assert_eq!(chain.entries()[1].to_string(), "J. Robert Oppenheimer - Manhattan Project");
    }

    #[test]
    fn test_plain_rules_mention_every_difficulty() {
        let formatter = Formatter::new(OutputFormat::Plain, false);
        let text = render(&formatter).unwrap();
        assert!(text.contains("1. You are given two people."));
        assert!(text.contains("3. Robert McNamara - Pentagon colleagues"));
        assert!(text.contains("easy    2-4 links"));
        assert!(text.contains("hard    5-7 links"));
    }

    #[test]
    fn test_json_rules() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let value: serde_json::Value = serde_json::from_str(&render(&formatter).unwrap()).unwrap();
        assert_eq!(value["rules"].as_array().unwrap().len(), STEPS.len());
        assert_eq!(value["example"][4], "Barack Obama");
        assert_eq!(value["difficulties"][1]["chain_length"], "3-5");
    }
}
