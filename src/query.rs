//! Search URL construction
//!
//! Builds one page-scoped request URL against the `/search` endpoint. The
//! page index is always present; filters are appended only when the options
//! carry them (see [`SearchOptions`] for the "falsy means absent"
//! semantics). Parameter order is fixed: `page`, `freeword`,
//! `enrollment_grade`.

use crate::error::Result;
use crate::types::SearchOptions;
use url::Url;

/// Build the fully-qualified search URL for one page.
///
/// `base_url` is scheme + host (no trailing path); percent-encoding of the
/// filter values is handled by the `url` crate's query serializer.
pub fn search_url(base_url: &str, page: u32, options: &SearchOptions) -> Result<String> {
    let mut url = Url::parse(base_url)?;
    url.set_path("search");
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("page", &page.to_string());
        if let Some(freeword) = options.freeword() {
            pairs.append_pair("freeword", freeword);
        }
        if let Some(grade) = options.enrollment_grade() {
            pairs.append_pair("enrollment_grade", &grade.to_string());
        }
    }
    Ok(url.into())
}
