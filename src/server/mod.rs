//! MCP tool surface
//!
//! Exposes the syllabus search as three MCP tools over stdio. The server is
//! an explicitly constructed context object: it owns its [`SyllabusClient`]
//! and is handed to the transport, so no process-wide singleton exists.
//!
//! Failures never surface as protocol-level faults. Both HTTP status errors
//! and unexpected errors (network faults, malformed JSON) are folded into a
//! successful text response whose body is `Error: <message>`; callers
//! inspect the content text to detect failure.


use crate::config::SyllabusConfig;
use crate::error::Error;
use crate::format;
use crate::search::SyllabusClient;
use crate::types::SearchOptions;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router,
    transport::stdio,
    ErrorData as McpError, ServerHandler, ServiceExt,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

/// Arguments for `get-subjects-with-detail`
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DetailQuery {
    /// Expected year of enrollment (e.g. 1, 2, 3, 4)
    #[schemars(range(min = 1, max = 4))]
    pub enrollment_grade: u8,
    /// The freeword search parameter (e.g. "ITリテラシー")
    pub freeword: String,
}

/// Arguments for `get-a-subject-with-detail`
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SingleDetailQuery {
    /// The freeword search parameter, usually a course name
    pub freeword: String,
    /// Expected year of enrollment (e.g. 1, 2, 3, 4)
    #[schemars(range(min = 1, max = 4))]
    pub enrollment_grade: Option<u8>,
}

/// Map tool arguments onto search options.
///
/// A grade of 0 and an empty freeword both mean "no filter", preserving the
/// upstream API's treatment of falsy values.
pub(crate) fn build_options(enrollment_grade: Option<u8>, freeword: Option<&str>) -> SearchOptions {
    let mut options = SearchOptions::new();
    if let Some(grade) = enrollment_grade.filter(|g| *g != 0) {
        options = options.with_enrollment_grade(grade);
    }
    if let Some(freeword) = freeword.filter(|w| !w.is_empty()) {
        options = options.with_freeword(freeword);
    }
    options
}

/// Wrap rendered text as a tool result
fn text_result(text: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text)])
}

/// Convert a query failure into an `Error: <message>` text result
fn error_result(err: &Error) -> CallToolResult {
    CallToolResult::success(vec![Content::text(format!("Error: {err}"))])
}

/// The MCP server for the ZEN University syllabus
#[derive(Clone)]
pub struct SyllabusServer {
    client: SyllabusClient,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl SyllabusServer {
    /// Create a server backed by the given configuration
    pub fn new(config: &SyllabusConfig) -> crate::error::Result<Self> {
        Ok(Self {
            client: SyllabusClient::new(config)?,
            tool_router: Self::tool_router(),
        })
    }

    #[tool(
        name = "get-list-of-all-subjects",
        description = "Retrieve a simplified list of all courses from the ZEN University syllabus, containing only the essential properties (name, openingYear, enrollmentGrade, teachingMethod, subjectRequirement, quarters)."
    )]
    async fn get_list_of_all_subjects(&self) -> std::result::Result<CallToolResult, McpError> {
        Ok(
            match self.client.fetch_all_pages(&SearchOptions::new()).await {
                Ok(results) => text_result(format::simplified_list(&results.subjects)),
                Err(err) => error_result(&err),
            },
        )
    }

    #[tool(
        name = "get-subjects-with-detail",
        description = "Retrieve detailed course information from the ZEN University syllabus. The numeric intended year of enrollment (enrollment_grade) and the freeword parameter (freeword) must be specified. The freeword parameter is intended for searching course names and similar keywords."
    )]
    async fn get_subjects_with_detail(
        &self,
        Parameters(query): Parameters<DetailQuery>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let options = build_options(Some(query.enrollment_grade), Some(&query.freeword));
        Ok(match self.client.fetch_all_pages(&options).await {
            Ok(results) => text_result(format::detailed_list(&results)),
            Err(err) => error_result(&err),
        })
    }

    #[tool(
        name = "get-a-subject-with-detail",
        description = "Retrieve the full detail of a single course from the ZEN University syllabus. Lists every matching course name and code, then shows the detail of the first match only; re-query with a course name as freeword to see another one."
    )]
    async fn get_a_subject_with_detail(
        &self,
        Parameters(query): Parameters<SingleDetailQuery>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let options = build_options(query.enrollment_grade, Some(&query.freeword));
        Ok(match self.client.fetch_all_pages(&options).await {
            Ok(results) => text_result(format::single_detail(&results)),
            Err(err) => error_result(&err),
        })
    }
}

#[tool_handler]
impl ServerHandler for SyllabusServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "zen-syllabus".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Implementation::default()
            },
            instructions: Some(
                "ZEN University Syllabus API: search the course catalog and read \
                 course details. Use get-list-of-all-subjects for an overview and \
                 the detail tools for specific courses."
                    .into(),
            ),
            ..ServerInfo::default()
        }
    }
}

/// Serve the tool surface on stdio until the client disconnects
pub async fn serve_stdio(config: &SyllabusConfig) -> crate::error::Result<()> {
    let server = SyllabusServer::new(config)?;
    let service = server
        .serve(stdio())
        .await
        .map_err(|err| Error::other(format!("MCP server failed to start: {err}")))?;
    info!("ZEN University Syllabus MCP Server running on stdio");
    service
        .waiting()
        .await
        .map_err(|err| Error::other(format!("MCP server terminated: {err}")))?;
    Ok(())
}
