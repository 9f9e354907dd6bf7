//! Command implementations.

pub mod config;
pub mod pair;
pub mod path;
pub mod rules;

pub use config::execute_config;
pub use pair::execute_pair;
pub use path::execute_path;
pub use rules::execute_rules;
