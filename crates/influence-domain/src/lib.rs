//! Web of Influence Domain Layer
//!
//! This crate contains the game model for Web of Influence. It has no external
//! dependencies and defines the value objects that every other layer passes
//! around, plus the trait boundary to the text-completion service.
//!
//! ## Key Concepts
//!
//! - **Difficulty**: How far apart the two people of a challenge should be
//! - **ConnectionPair**: The two distinct people the player must connect
//! - **ChainEntry**: One person in a chain, optionally annotated with how they met
//! - **ConnectionPath**: An ordered chain anchored on both people of a pair
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Invalid pairs and paths are unrepresentable: constructors validate
//! - Infrastructure (HTTP providers, parsing, fallbacks) lives in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod difficulty;
pub mod pair;
pub mod path;
pub mod traits;

// Re-exports for convenience
pub use difficulty::Difficulty;
pub use pair::{ConnectionPair, PairError};
pub use path::{ChainEntry, ConnectionPath, PathError};
pub use traits::CompletionProvider;
