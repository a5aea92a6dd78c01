//! Detailed projection
//!
//! Keeps every subject field: heading with code, opening year, description,
//! faculty sub-list, full metadata, the free-text objective, and a numbered
//! course-plan list. Sections backed by absent or empty data are omitted
//! entirely rather than rendered as empty headings.

use crate::types::Subject;

/// Render the full detail block for one subject
pub fn render_detailed_subject(subject: &Subject) -> String {
    let mut text = format!("# 科目: {} ({})\n", subject.name, subject.code);
    text.push_str(&format!("開講年度: {}年\n", subject.opening_year));
    text.push_str(&format!("説明: {}\n\n", subject.description));

    if !subject.faculty.is_empty() {
        text.push_str("## 教員情報\n");
        for faculty in &subject.faculty {
            text.push_str(&format!("- {} ({})\n", faculty.name, faculty.title));
        }
        text.push('\n');
    }

    let metadata = &subject.metadata;
    text.push_str("## 科目情報\n");
    text.push_str(&format!("- 想定年次: {}\n", metadata.enrollment_grade));
    text.push_str(&format!("- 授業形態: {}\n", metadata.teaching_method));
    text.push_str(&format!("- 必修/選択: {}\n", metadata.subject_requirement));
    text.push_str(&format!("- 単位数: {}\n", metadata.credit));
    if !metadata.quarters.is_empty() {
        text.push_str(&format!("- 開講時期: {}\n", metadata.quarters.join(", ")));
    }
    text.push('\n');

    if let Some(objective) = metadata.objective.as_deref().filter(|o| !o.is_empty()) {
        text.push_str(&format!("## 授業の目的\n{objective}\n\n"));
    }

    if let Some(plans) = metadata.course_plans.as_deref().filter(|p| !p.is_empty()) {
        text.push_str("## 授業計画\n");
        for (index, plan) in plans.iter().enumerate() {
            text.push_str(&format!(
                "{}. {}: {}\n",
                index + 1,
                plan.title,
                plan.description
            ));
        }
    }

    text
}
