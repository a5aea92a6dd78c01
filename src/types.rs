//! Wire data model for the syllabus search API
//!
//! These structs mirror the JSON returned by
//! `GET https://api.syllabus.zen.ac.jp/search`. Deserialization is lenient:
//! fields the API sometimes omits fall back to defaults instead of failing
//! the whole page.

use serde::{Deserialize, Serialize};

// ============================================================================
// Search options
// ============================================================================

/// Optional filters for one search query.
///
/// Immutable once built; every tool call constructs its own set. The
/// accessors reproduce the upstream API's "falsy means absent" contract: an
/// empty freeword and an enrollment grade of `0` are both treated as no
/// filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    freeword: Option<String>,
    enrollment_grade: Option<u8>,
}

impl SearchOptions {
    /// Create an empty option set (no filters)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text search term
    #[must_use]
    pub fn with_freeword(mut self, freeword: impl Into<String>) -> Self {
        self.freeword = Some(freeword.into());
        self
    }

    /// Set the expected year of enrollment (1-4)
    #[must_use]
    pub fn with_enrollment_grade(mut self, grade: u8) -> Self {
        self.enrollment_grade = Some(grade);
        self
    }

    /// The free-text term, if present and non-empty
    pub fn freeword(&self) -> Option<&str> {
        self.freeword.as_deref().filter(|w| !w.is_empty())
    }

    /// The enrollment grade, if present and non-zero
    pub fn enrollment_grade(&self) -> Option<u8> {
        self.enrollment_grade.filter(|g| *g != 0)
    }
}

// ============================================================================
// Subject records
// ============================================================================

/// A faculty entry attached to a subject
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faculty {
    /// Faculty member identifier
    #[serde(default)]
    pub id: i64,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Name reading (kana)
    #[serde(default)]
    pub reading: String,
    /// Whether the member is based outside Japan
    #[serde(default)]
    pub is_foreign: bool,
    /// Academic title
    #[serde(default)]
    pub title: String,
    /// Field of expertise
    #[serde(default)]
    pub expertise: String,
    /// Avatar image URL
    #[serde(default)]
    pub avatar_url: String,
}

/// One entry of a subject's course plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePlan {
    /// Plan entry title
    #[serde(default)]
    pub title: String,
    /// Plan entry description
    #[serde(default)]
    pub description: String,
    /// Nested section data, passed through verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<serde_json::Value>,
}

/// Nested metadata block of a subject
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectMetadata {
    /// Expected year of enrollment
    #[serde(default)]
    pub enrollment_grade: String,
    /// Teaching method (e.g. on-demand, live)
    #[serde(default)]
    pub teaching_method: String,
    /// Required or elective
    #[serde(default)]
    pub subject_requirement: String,
    /// Credit count
    #[serde(default)]
    pub credit: String,
    /// Quarter labels the subject is offered in
    #[serde(default)]
    pub quarters: Vec<String>,
    /// Free-text course objective
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    /// Ordered course plan entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_plans: Option<Vec<CoursePlan>>,
}

/// One university course record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Course code
    #[serde(default)]
    pub code: String,
    /// Course name
    #[serde(default)]
    pub name: String,
    /// Course description
    #[serde(default)]
    pub description: String,
    /// Thumbnail image URL
    #[serde(default)]
    pub thumbnail_url: String,
    /// Opening year
    #[serde(default)]
    pub opening_year: String,
    /// Ordered faculty entries
    #[serde(default)]
    pub faculty: Vec<Faculty>,
    /// Nested metadata block
    #[serde(default)]
    pub metadata: SubjectMetadata,
    /// Category identifiers, when the API includes them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<i64>>,
}

// ============================================================================
// Pages and aggregates
// ============================================================================

/// A tag related to the current search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelatedTag {
    /// Tag identifier
    #[serde(default)]
    pub id: i64,
    /// Tag display name
    #[serde(default)]
    pub name: String,
}

/// One fetched unit of the paginated search response.
///
/// Transient: pages are discarded after their subjects are merged into a
/// [`SearchResults`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    /// Total record count across all pages
    #[serde(default)]
    pub total_count: u64,
    /// Records per page
    #[serde(default)]
    pub page_size: u32,
    /// Zero-based index of this page
    #[serde(default)]
    pub page: u32,
    /// Total page count
    #[serde(default)]
    pub total_pages: u32,
    /// Tags related to the query
    #[serde(default)]
    pub related_tags: Vec<RelatedTag>,
    /// Subjects on this page, in API order
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

/// The union of all subjects across all pages of one query.
///
/// Totals and tags are taken from page 0 verbatim. The subject sequence is
/// the concatenation of every page's subjects in fetch order, with no dedup
/// and no gap-filling: if the upstream API is inconsistent across pages, the
/// aggregate reflects whatever was returned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    /// Total record count reported by page 0
    pub total_count: u64,
    /// Page size reported by page 0
    pub page_size: u32,
    /// Total page count reported by page 0
    pub total_pages: u32,
    /// Related tags from page 0
    pub related_tags: Vec<RelatedTag>,
    /// All subjects, in fetch order
    pub subjects: Vec<Subject>,
}

impl SearchResults {
    /// Number of aggregated subjects
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    /// Whether the aggregate holds no subjects
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}
