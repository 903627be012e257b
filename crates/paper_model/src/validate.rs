//! Defensive validation and normalization at the formatter boundary
//!
//! Nothing here rejects a paper. The report tells the caller what looks
//! incomplete, and `normalized` produces the copy that gets rendered.

use crate::paper::{default_section_name, ExamPaper};
use std::collections::HashSet;
use std::fmt;

/// Kind of a validation finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// Instruction that is empty or whitespace only
    BlankInstruction,
    /// Section without a name; it will print as "Section N"
    UnnamedSection,
    /// Question without a number label
    MissingNumber,
    /// Question with neither text nor marks
    EmptyQuestion,
    /// Question number repeated within one section
    DuplicateNumber(String),
    /// Subpart that is empty or whitespace only
    BlankSubpart,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::BlankInstruction => write!(f, "blank instruction"),
            IssueKind::UnnamedSection => write!(f, "section has no name"),
            IssueKind::MissingNumber => write!(f, "question has no number"),
            IssueKind::EmptyQuestion => write!(f, "question has no text or marks"),
            IssueKind::DuplicateNumber(n) => write!(f, "question number {:?} repeats", n),
            IssueKind::BlankSubpart => write!(f, "blank subpart"),
        }
    }
}

/// A single finding, located by a JSON-style path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub path: String,
    pub kind: IssueKind,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

/// All findings for one paper, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    fn push(&mut self, path: String, kind: IssueKind) {
        self.issues.push(ValidationIssue { path, kind });
    }
}

impl ExamPaper {
    /// Check the paper for content that will print oddly
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();

        for (i, instruction) in self.instructions.iter().enumerate() {
            if instruction.trim().is_empty() {
                report.push(format!("instructions[{}]", i), IssueKind::BlankInstruction);
            }
        }

        for (si, section) in self.sections.iter().enumerate() {
            if section.section_name.trim().is_empty() {
                report.push(format!("sections[{}]", si), IssueKind::UnnamedSection);
            }

            let mut seen = HashSet::new();
            for (qi, question) in section.questions.iter().enumerate() {
                let path = format!("sections[{}].questions[{}]", si, qi);
                let number = question.number.trim();

                if number.is_empty() {
                    report.push(path.clone(), IssueKind::MissingNumber);
                } else if !seen.insert(number) {
                    report.push(path.clone(), IssueKind::DuplicateNumber(number.to_string()));
                }

                if question.is_blank() {
                    report.push(path.clone(), IssueKind::EmptyQuestion);
                }

                for (pi, subpart) in question.subparts.iter().enumerate() {
                    if subpart.trim().is_empty() {
                        report.push(format!("{}.subparts[{}]", path, pi), IssueKind::BlankSubpart);
                    }
                }
            }
        }

        report
    }

    /// Copy of the paper as it will be rendered
    ///
    /// Header fields are trimmed, blank instructions and blank subparts are
    /// dropped, and unnamed sections get their generated label. Question
    /// numbers, text and marks are kept verbatim and nothing is reordered.
    pub fn normalized(&self) -> ExamPaper {
        let mut paper = self.clone();

        for field in [
            &mut paper.exam_title,
            &mut paper.school_name,
            &mut paper.class_name,
            &mut paper.subject,
            &mut paper.time,
            &mut paper.total_marks,
        ] {
            let trimmed = field.trim();
            if trimmed.len() != field.len() {
                *field = trimmed.to_string();
            }
        }

        paper.instructions = paper
            .instructions
            .iter()
            .map(|i| i.trim())
            .filter(|i| !i.is_empty())
            .map(str::to_string)
            .collect();

        for (si, section) in paper.sections.iter_mut().enumerate() {
            if section.section_name.trim().is_empty() {
                section.section_name = default_section_name(si);
            }
            for question in &mut section.questions {
                question.subparts.retain(|s| !s.trim().is_empty());
            }
        }

        paper
    }
}
