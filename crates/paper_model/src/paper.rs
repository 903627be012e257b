//! Exam paper records - the structured object shared by OCR, editor and formatter

use crate::lenient;
use serde::{Deserialize, Serialize};

/// Root of a structured exam paper
///
/// Every field may be empty; an empty string means "absent". Field names
/// on the wire follow the structuring collaborator's JSON contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamPaper {
    #[serde(default, deserialize_with = "lenient::string")]
    pub exam_title: String,
    /// School name, usually supplied by the editor rather than OCR
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub school_name: String,
    #[serde(rename = "class", default, deserialize_with = "lenient::string")]
    pub class_name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub subject: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub time: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub total_marks: String,
    /// General instructions, numbered 1..N in print order
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub instructions: Vec<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub sections: Vec<Section>,
}

impl ExamPaper {
    /// Create a blank paper with no metadata and no sections
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paper with just a title
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            exam_title: title.into(),
            ..Self::default()
        }
    }

    /// Total number of questions across all sections
    pub fn question_count(&self) -> usize {
        self.sections.iter().map(|s| s.questions.len()).sum()
    }

    /// Get a question by section and question index
    pub fn question(&self, section: usize, question: usize) -> Option<&Question> {
        self.sections.get(section)?.questions.get(question)
    }

    /// Get a mutable question by section and question index
    pub fn question_mut(&mut self, section: usize, question: usize) -> Option<&mut Question> {
        self.sections.get_mut(section)?.questions.get_mut(question)
    }
}

/// A titled group of questions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default, deserialize_with = "lenient::string")]
    pub section_name: String,
    #[serde(default, deserialize_with = "lenient::list")]
    pub questions: Vec<Question>,
}

impl Section {
    /// Create an empty section with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            section_name: name.into(),
            questions: Vec::new(),
        }
    }

    /// Builder-style helper to append a question
    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    /// The heading to print: the name, or `Section {N}` for a blank name
    pub fn display_name(&self, index: usize) -> String {
        if self.section_name.trim().is_empty() {
            default_section_name(index)
        } else {
            self.section_name.clone()
        }
    }
}

/// Generated label for an unnamed section (index is 0-based)
pub fn default_section_name(index: usize) -> String {
    format!("Section {}", index + 1)
}

/// A single question
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Label printed verbatim after "Q" (not necessarily numeric)
    #[serde(default, deserialize_with = "lenient::string")]
    pub number: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub marks: String,
    /// Options, match pairs or sub-questions, in print order
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub subparts: Vec<String>,
}

impl Question {
    /// Create a question with a number and text
    pub fn new(number: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    /// Builder-style helper to set marks
    pub fn with_marks(mut self, marks: impl Into<String>) -> Self {
        self.marks = marks.into();
        self
    }

    /// Builder-style helper to set subparts
    pub fn with_subparts<I, S>(mut self, subparts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subparts = subparts.into_iter().map(Into::into).collect();
        self
    }

    /// True when neither text nor marks carry content
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty() && self.marks.trim().is_empty()
    }
}
