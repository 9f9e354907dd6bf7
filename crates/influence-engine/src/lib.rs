//! Web of Influence Engine
//!
//! Turns free-form completion text into strictly shaped game data.
//!
//! # Overview
//!
//! Two independent pipelines share the same shape: a deterministic prompt,
//! one completion call, a best-effort multi-strategy parse, strict
//! validation, and a deterministic fallback when anything goes wrong.
//!
//! # Architecture
//!
//! ```text
//! Difficulty ─▶ PairPromptBuilder ─▶ provider ─▶ parse_connection_pair ─▶ ConnectionPair
//!                                        │ error           │ error
//!                                        └──────▶ fallback_pair ◀┘
//!
//! Pair ─▶ PathPromptBuilder ─▶ provider ─▶ extract_connection_path ─▶ ConnectionPath
//!                                  │ error           │ error
//!                                  └──────▶ fallback_path ◀┘
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use influence_domain::Difficulty;
//! use influence_engine::Game;
//! use influence_llm::ChatCompletionProvider;
//!
//! # async fn example() {
//! let game = Game::new(ChatCompletionProvider::default_endpoint());
//!
//! let pair = game.connection_pair(Difficulty::Hard).await;
//! println!("Connect {} to {}", pair.person1(), pair.person2());
//!
//! let path = game.sample_connection_for(&pair, Difficulty::Hard).await;
//! for (idx, entry) in path.entries().iter().enumerate() {
//!     println!("{}. {}", idx + 1, entry);
//! }
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod fallback;
mod format;
mod game;
mod pair_parser;
mod path_parser;
mod prompt;


pub use config::EngineConfig;
pub use error::{EngineError, ParseError};
pub use fallback::{
    fallback_names, fallback_pair, fallback_path, intermediate_count, FALLBACK_INTERMEDIATES,
    PARSER_DEFAULT_PAIR,
};
pub use format::{format_entry, format_explanation, shorten_explanation, split_entry, ExplanationLimits};
pub use game::Game;
pub use pair_parser::{parse_connection_pair, Reply};
pub use path_parser::{extract_connection_path, parse_connection_path};
pub use prompt::{PairPromptBuilder, PathPromptBuilder};
