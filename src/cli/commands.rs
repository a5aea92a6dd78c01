//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// ZEN University Syllabus MCP server CLI
#[derive(Parser, Debug)]
#[command(name = "zen-syllabus-mcp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Override the syllabus API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the MCP server on stdio
    Serve,

    /// Print the simplified list of every subject
    List,

    /// Run one search query and print the detailed result
    Search {
        /// Free-text search term
        #[arg(long)]
        freeword: Option<String>,

        /// Expected year of enrollment (1-4)
        #[arg(long)]
        enrollment_grade: Option<u8>,

        /// Show only the first match in full, with the others listed by name
        #[arg(long)]
        first: bool,
    },
}
