//! CLI command handlers. Each command is in its own file.

mod config;
mod interactive;
mod render;
mod search;

pub use config::run_config;
pub use interactive::run_interactive;
pub use search::{run_search, SearchOptions};
