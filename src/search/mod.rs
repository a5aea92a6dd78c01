//! Page fetching and aggregation
//!
//! [`SyllabusClient`] is the page aggregator: it fetches page 0, reads
//! `totalPages`, then walks pages `1..totalPages` strictly sequentially with
//! the same options. Any page failure aborts the whole query; there is no
//! partial result and no retry. Subjects are concatenated in fetch order and
//! totals/tags are taken from page 0 verbatim.


use crate::config::SyllabusConfig;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use crate::query;
use crate::types::{SearchOptions, SearchPage, SearchResults};
use tracing::debug;

/// Client for the syllabus search API
#[derive(Debug, Clone)]
pub struct SyllabusClient {
    http: HttpClient,
    base_url: String,
}

impl SyllabusClient {
    /// Create a client from a configuration
    pub fn new(config: &SyllabusConfig) -> Result<Self> {
        let http = HttpClient::with_config(HttpClientConfig::from(config))?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one page of search results
    pub async fn fetch_page(&self, page: u32, options: &SearchOptions) -> Result<SearchPage> {
        let url = query::search_url(&self.base_url, page, options)?;
        debug!("fetching page {page}: {url}");
        self.http.get_json(&url).await
    }

    /// Fetch every page of a query and merge the results.
    ///
    /// One request is in flight at a time; each fetch waits for the
    /// previous one. If `totalPages` is 0 or 1, only page 0 is fetched.
    pub async fn fetch_all_pages(&self, options: &SearchOptions) -> Result<SearchResults> {
        let SearchPage {
            total_count,
            page_size,
            total_pages,
            related_tags,
            mut subjects,
            ..
        } = self.fetch_page(0, options).await?;

        for page in 1..total_pages {
            let next = self.fetch_page(page, options).await?;
            subjects.extend(next.subjects);
        }

        debug!(
            "aggregated {} subjects across {total_pages} page(s)",
            subjects.len()
        );

        Ok(SearchResults {
            total_count,
            page_size,
            total_pages,
            related_tags,
            subjects,
        })
    }
}
