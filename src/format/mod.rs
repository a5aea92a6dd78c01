//! Projection and text rendering
//!
//! Maps full course records down to a projection's field subset and renders
//! them as structured text blocks for LLM consumption. All rendering is pure:
//! the same input structure always yields byte-identical output.
//!
//! Two projections exist, mirroring the two main tool entry points:
//! - **Simplified**: name, opening year, and a metadata subset
//! - **Detailed**: every subject field including faculty and course plans
//!
//! Lists open with a one-line result-count header and join entries with a
//! fixed-width `=` separator (30 chars for simplified, 50 for detailed),
//! with no trailing separator after the last entry.

mod detailed;
mod simplified;

#[cfg(test)]
mod tests;

pub use detailed::render_detailed_subject;
pub use simplified::{SimplifiedMetadata, SimplifiedSubject};

use crate::types::{SearchResults, Subject};

/// Separator width between simplified entries
pub const SIMPLIFIED_SEPARATOR_WIDTH: usize = 30;

/// Separator width between detailed entries
pub const DETAILED_SEPARATOR_WIDTH: usize = 50;

/// The one-line result-count header
fn count_header(count: u64) -> String {
    format!("検索結果: {count}件の科目が見つかりました")
}

/// Join rendered blocks under a count header with a separator line
fn join_blocks(header: String, blocks: &[String], separator_width: usize) -> String {
    let mut text = header;
    text.push_str("\n\n");
    for (index, block) in blocks.iter().enumerate() {
        text.push_str(block);
        if index < blocks.len() - 1 {
            text.push('\n');
            text.push_str(&"=".repeat(separator_width));
            text.push_str("\n\n");
        }
    }
    text
}

/// Render the simplified projection of a subject list.
///
/// The count header reflects the number of rendered subjects.
pub fn simplified_list(subjects: &[Subject]) -> String {
    let blocks: Vec<String> = subjects
        .iter()
        .map(|subject| SimplifiedSubject::from(subject).render())
        .collect();
    join_blocks(
        count_header(subjects.len() as u64),
        &blocks,
        SIMPLIFIED_SEPARATOR_WIDTH,
    )
}

/// Render the detailed projection of an aggregated result.
///
/// The count header uses the aggregate's reported total count, not the
/// number of rendered subjects.
pub fn detailed_list(results: &SearchResults) -> String {
    let blocks: Vec<String> = results
        .subjects
        .iter()
        .map(render_detailed_subject)
        .collect();
    join_blocks(
        count_header(results.total_count),
        &blocks,
        DETAILED_SEPARATOR_WIDTH,
    )
}

/// Render the single-detail view: all matching names/codes, then the full
/// detail of the first subject only, with a prompt to re-query by name.
pub fn single_detail(results: &SearchResults) -> String {
    let mut text = count_header(results.total_count);
    text.push_str("\n\n");

    let Some(first) = results.subjects.first() else {
        text.push_str("該当する科目が見つかりませんでした\n");
        return text;
    };

    text.push_str("一致した科目:\n");
    for subject in &results.subjects {
        text.push_str(&format!("- {} ({})\n", subject.name, subject.code));
    }
    text.push('\n');
    text.push_str("他の科目の詳細を見るには、科目名を freeword に指定して再検索してください。\n");
    text.push('\n');
    text.push_str(&"=".repeat(DETAILED_SEPARATOR_WIDTH));
    text.push_str("\n\n");
    text.push_str(&render_detailed_subject(first));
    text
}
