//! # ZEN Syllabus MCP Server
//!
//! An MCP (Model Context Protocol) server exposing the ZEN University
//! course-catalog search API as tools for LLM assistants.
//!
//! ## Features
//!
//! - **Exhaustive Pagination**: fetches every page of a search query
//!   sequentially and merges the results into one logical result set
//! - **Field Projection**: simplified and detailed views of course records
//! - **Text Rendering**: deterministic, LLM-readable text blocks
//! - **MCP Tools**: three tools served over stdio via `rmcp`
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                   MCP Tool Surface                    │
//! │  get-list-of-all-subjects   get-subjects-with-detail  │
//! │              get-a-subject-with-detail                │
//! └───────────────────────────┬───────────────────────────┘
//!                             │
//! ┌──────────┬────────────────┴──────────┬────────────────┐
//! │  Query   │       Aggregator          │   Formatter    │
//! ├──────────┼───────────────────────────┼────────────────┤
//! │ page=N   │ page 0 → totalPages       │ Simplified     │
//! │ freeword │ pages 1..N sequentially   │ Detailed       │
//! │ grade    │ concat subjects in order  │ Single detail  │
//! └──────────┴───────────────────────────┴────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Wire data model and search options
pub mod types;

/// Client configuration
pub mod config;

/// HTTP transport
pub mod http;

/// Search URL construction
pub mod query;

/// Page fetching and aggregation
pub mod search;

/// Projection and text rendering
pub mod format;

/// MCP tool surface
pub mod server;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::SyllabusConfig;
pub use error::{Error, Result};
pub use search::SyllabusClient;
pub use types::{SearchOptions, SearchPage, SearchResults, Subject};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
