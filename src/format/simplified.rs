//! Simplified projection
//!
//! Keeps only the essentials of a subject: name, opening year, and the
//! metadata subset (enrollment grade, teaching method, requirement flag,
//! credit, quarters). Everything else — code, description, faculty,
//! objective, course plans — is dropped before rendering, so it can never
//! leak into the output.

use crate::types::Subject;

/// Metadata subset kept by the simplified projection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimplifiedMetadata {
    /// Expected year of enrollment
    pub enrollment_grade: String,
    /// Teaching method
    pub teaching_method: String,
    /// Required or elective
    pub subject_requirement: String,
    /// Credit count
    pub credit: String,
    /// Quarter labels
    pub quarters: Vec<String>,
}

/// A subject reduced to the simplified field set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimplifiedSubject {
    /// Course name
    pub name: String,
    /// Opening year
    pub opening_year: String,
    /// Metadata subset
    pub metadata: SimplifiedMetadata,
}

impl From<&Subject> for SimplifiedSubject {
    fn from(subject: &Subject) -> Self {
        Self {
            name: subject.name.clone(),
            opening_year: subject.opening_year.clone(),
            metadata: SimplifiedMetadata {
                enrollment_grade: subject.metadata.enrollment_grade.clone(),
                teaching_method: subject.metadata.teaching_method.clone(),
                subject_requirement: subject.metadata.subject_requirement.clone(),
                credit: subject.metadata.credit.clone(),
                quarters: subject.metadata.quarters.clone(),
            },
        }
    }
}

impl SimplifiedSubject {
    /// Render this projection as a compact heading plus key/value list
    pub fn render(&self) -> String {
        let mut text = format!("# 科目: {}\n", self.name);
        text.push_str(&format!("開講年度: {}年\n\n", self.opening_year));

        text.push_str("## 科目情報\n");
        text.push_str(&format!("- 想定年次: {}\n", self.metadata.enrollment_grade));
        text.push_str(&format!("- 授業形態: {}\n", self.metadata.teaching_method));
        text.push_str(&format!(
            "- 必修/選択: {}\n",
            self.metadata.subject_requirement
        ));
        text.push_str(&format!("- 単位数: {}\n", self.metadata.credit));
        if !self.metadata.quarters.is_empty() {
            text.push_str(&format!(
                "- 開講時期: {}\n",
                self.metadata.quarters.join(", ")
            ));
        }
        text
    }
}
