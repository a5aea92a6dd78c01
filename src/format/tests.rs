//! Tests for projection and rendering

use super::*;
use crate::types::{CoursePlan, Faculty, SearchResults, Subject, SubjectMetadata};
use pretty_assertions::assert_eq;

fn full_subject() -> Subject {
    Subject {
        code: "INT-1-A1".to_string(),
        name: "ITリテラシー".to_string(),
        description: "情報技術の基礎を学ぶ".to_string(),
        thumbnail_url: "https://example.com/thumb.png".to_string(),
        opening_year: "2024".to_string(),
        faculty: vec![Faculty {
            id: 7,
            name: "山田太郎".to_string(),
            title: "教授".to_string(),
            ..Default::default()
        }],
        metadata: SubjectMetadata {
            enrollment_grade: "1".to_string(),
            teaching_method: "オンデマンド".to_string(),
            subject_requirement: "必修".to_string(),
            credit: "2".to_string(),
            quarters: vec!["1Q".to_string(), "2Q".to_string()],
            objective: Some("ITの基礎概念を理解する".to_string()),
            course_plans: Some(vec![
                CoursePlan {
                    title: "第1回".to_string(),
                    description: "ガイダンス".to_string(),
                    sections: None,
                },
                CoursePlan {
                    title: "第2回".to_string(),
                    description: "情報の表現".to_string(),
                    sections: None,
                },
            ]),
        },
        categories: None,
    }
}

fn minimal_subject(name: &str) -> Subject {
    Subject {
        name: name.to_string(),
        opening_year: "2024".to_string(),
        metadata: SubjectMetadata {
            enrollment_grade: "1".to_string(),
            teaching_method: "オンデマンド".to_string(),
            subject_requirement: "選択".to_string(),
            credit: "2".to_string(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn results_with(subjects: Vec<Subject>, total_count: u64) -> SearchResults {
    SearchResults {
        total_count,
        page_size: 20,
        total_pages: 1,
        related_tags: vec![],
        subjects,
    }
}

// ============================================================================
// Simplified projection
// ============================================================================

#[test]
fn test_simplified_projection_drops_detail_fields() {
    let subject = full_subject();
    let projected = SimplifiedSubject::from(&subject);

    assert_eq!(projected.name, "ITリテラシー");
    assert_eq!(projected.opening_year, "2024");
    assert_eq!(projected.metadata.quarters, vec!["1Q", "2Q"]);

    let rendered = projected.render();
    // Nothing from the detail-only fields may appear.
    assert!(!rendered.contains("INT-1-A1"));
    assert!(!rendered.contains("情報技術の基礎を学ぶ"));
    assert!(!rendered.contains("山田太郎"));
    assert!(!rendered.contains("ITの基礎概念を理解する"));
    assert!(!rendered.contains("ガイダンス"));
}

#[test]
fn test_simplified_single_subject_render() {
    let subject = Subject {
        name: "Intro to Law".to_string(),
        opening_year: "2024".to_string(),
        metadata: SubjectMetadata {
            enrollment_grade: "1".to_string(),
            teaching_method: "オンデマンド".to_string(),
            subject_requirement: "選択".to_string(),
            credit: "2".to_string(),
            quarters: vec!["3Q".to_string()],
            ..Default::default()
        },
        ..Default::default()
    };

    let text = simplified_list(std::slice::from_ref(&subject));
    assert_eq!(
        text,
        "検索結果: 1件の科目が見つかりました\n\
         \n\
         # 科目: Intro to Law\n\
         開講年度: 2024年\n\
         \n\
         ## 科目情報\n\
         - 想定年次: 1\n\
         - 授業形態: オンデマンド\n\
         - 必修/選択: 選択\n\
         - 単位数: 2\n\
         - 開講時期: 3Q\n"
    );
    // Single-element list: no separator anywhere.
    assert!(!text.contains("=="));
}

#[test]
fn test_simplified_list_separator_and_count() {
    let subjects = vec![minimal_subject("A"), minimal_subject("B")];
    let text = simplified_list(&subjects);

    assert!(text.starts_with("検索結果: 2件の科目が見つかりました\n\n"));
    let separator = format!("\n{}\n\n", "=".repeat(30));
    assert_eq!(text.matches(&separator).count(), 1);
    assert!(!text.ends_with(&separator));
}

#[test]
fn test_simplified_omits_quarters_when_empty() {
    let text = simplified_list(&[minimal_subject("A")]);
    assert!(!text.contains("開講時期"));
}

#[test]
fn test_simplified_is_deterministic() {
    let subjects = vec![full_subject(), minimal_subject("B")];
    assert_eq!(simplified_list(&subjects), simplified_list(&subjects));
}

// ============================================================================
// Detailed projection
// ============================================================================

#[test]
fn test_detailed_render_full_subject() {
    let text = render_detailed_subject(&full_subject());
    assert_eq!(
        text,
        "# 科目: ITリテラシー (INT-1-A1)\n\
         開講年度: 2024年\n\
         説明: 情報技術の基礎を学ぶ\n\
         \n\
         ## 教員情報\n\
         - 山田太郎 (教授)\n\
         \n\
         ## 科目情報\n\
         - 想定年次: 1\n\
         - 授業形態: オンデマンド\n\
         - 必修/選択: 必修\n\
         - 単位数: 2\n\
         - 開講時期: 1Q, 2Q\n\
         \n\
         ## 授業の目的\n\
         ITの基礎概念を理解する\n\
         \n\
         ## 授業計画\n\
         1. 第1回: ガイダンス\n\
         2. 第2回: 情報の表現\n"
    );
}

#[test]
fn test_detailed_omits_objective_when_absent() {
    let mut subject = full_subject();
    subject.metadata.objective = None;
    let text = render_detailed_subject(&subject);
    assert!(!text.contains("授業の目的"));

    subject.metadata.objective = Some(String::new());
    let text = render_detailed_subject(&subject);
    assert!(!text.contains("授業の目的"));
}

#[test]
fn test_detailed_omits_course_plans_when_absent() {
    let mut subject = full_subject();
    subject.metadata.course_plans = None;
    let text = render_detailed_subject(&subject);
    assert!(!text.contains("授業計画"));

    subject.metadata.course_plans = Some(vec![]);
    let text = render_detailed_subject(&subject);
    assert!(!text.contains("授業計画"));
}

#[test]
fn test_detailed_omits_faculty_when_empty() {
    let mut subject = full_subject();
    subject.faculty.clear();
    let text = render_detailed_subject(&subject);
    assert!(!text.contains("教員情報"));
}

#[test]
fn test_detailed_list_uses_total_count_not_rendered_count() {
    let results = results_with(vec![full_subject()], 42);
    let text = detailed_list(&results);
    assert!(text.starts_with("検索結果: 42件の科目が見つかりました\n\n"));
}

#[test]
fn test_detailed_list_separator_is_fifty_chars() {
    let results = results_with(vec![full_subject(), minimal_subject("B")], 2);
    let text = detailed_list(&results);
    let separator = format!("\n{}\n\n", "=".repeat(50));
    assert_eq!(text.matches(&separator).count(), 1);
}

// ============================================================================
// Single-detail view
// ============================================================================

#[test]
fn test_single_detail_lists_matches_and_renders_first_only() {
    let mut second = full_subject();
    second.name = "データベース".to_string();
    second.code = "INT-2-B1".to_string();
    second.metadata.objective = Some("DBを理解する".to_string());

    let results = results_with(vec![full_subject(), second], 2);
    let text = single_detail(&results);

    assert!(text.starts_with("検索結果: 2件の科目が見つかりました\n\n"));
    assert!(text.contains("一致した科目:\n- ITリテラシー (INT-1-A1)\n- データベース (INT-2-B1)\n"));
    assert!(text.contains("再検索してください"));
    // First subject's detail is present, second's is list-only.
    assert!(text.contains("## 授業の目的\nITの基礎概念を理解する"));
    assert!(!text.contains("DBを理解する"));
}

#[test]
fn test_single_detail_empty_results() {
    let results = results_with(vec![], 0);
    let text = single_detail(&results);
    assert_eq!(
        text,
        "検索結果: 0件の科目が見つかりました\n\n該当する科目が見つかりませんでした\n"
    );
}
