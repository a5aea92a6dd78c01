//! CLI module
//!
//! # Commands
//!
//! - `serve` - Run the MCP server on stdio
//! - `list` - Print the simplified list of every subject
//! - `search` - Run one detailed search query and print the result

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
