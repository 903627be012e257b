//! Editing session - caller-owned editing context
//!
//! The session owns the paper being edited together with the diagrams
//! attached to its questions. Structural edits keep attachments with their
//! questions: removing question 2 moves question 3's image to key `s_2`.
//! Before formatting, attachments are staged to a temporary directory whose
//! lifetime is bound to the returned guard.

use crate::error::{ModelError, ModelResult};
use crate::image::ImageFormat;
use crate::image_key::ImageKey;
use crate::paper::{ExamPaper, Question, Section};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Placeholder options inserted by "add options"
pub const OPTION_TEMPLATE: [&str; 4] = ["(a) ", "(b) ", "(c) ", "(d) "];

/// A paper under edit plus its per-question image attachments
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    paper: ExamPaper,
    images: BTreeMap<ImageKey, Vec<u8>>,
}

impl EditSession {
    /// Start editing a paper with no attachments
    pub fn new(paper: ExamPaper) -> Self {
        Self {
            paper,
            images: BTreeMap::new(),
        }
    }

    /// Start from a blank paper
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn paper(&self) -> &ExamPaper {
        &self.paper
    }

    /// Direct field access; structural changes should go through the
    /// session methods so attachments stay aligned
    pub fn paper_mut(&mut self) -> &mut ExamPaper {
        &mut self.paper
    }

    pub fn into_paper(self) -> ExamPaper {
        self.paper
    }

    // =========================================================================
    // Field editing
    // =========================================================================

    /// Replace the instructions with one entry per non-blank line
    pub fn set_instructions_from_text(&mut self, text: &str) {
        self.paper.instructions = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();
    }

    /// Replace a question's subparts with one entry per non-blank line
    ///
    /// Lines are kept verbatim so tab-separated match pairs survive.
    pub fn set_subparts_from_text(&mut self, key: ImageKey, text: &str) -> ModelResult<()> {
        let question = self.question_mut(key)?;
        question.subparts = text
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(str::to_string)
            .collect();
        Ok(())
    }

    /// Seed a question with the four-option MCQ template
    pub fn add_option_template(&mut self, key: ImageKey) -> ModelResult<()> {
        let question = self.question_mut(key)?;
        question.subparts = OPTION_TEMPLATE.iter().map(|s| s.to_string()).collect();
        Ok(())
    }

    /// Drop all subparts of a question
    pub fn clear_subparts(&mut self, key: ImageKey) -> ModelResult<()> {
        self.question_mut(key)?.subparts.clear();
        Ok(())
    }

    // =========================================================================
    // Structure editing
    // =========================================================================

    /// Append an empty section labelled "Section A", "Section B", ...
    pub fn add_section(&mut self) -> usize {
        let index = self.paper.sections.len();
        self.paper.sections.push(Section::new(section_letter_label(index)));
        index
    }

    /// Insert a section before `index`; later attachments shift down
    pub fn insert_section(&mut self, index: usize, section: Section) -> ModelResult<()> {
        if index > self.paper.sections.len() {
            return Err(ModelError::NoSuchSection(index));
        }
        self.paper.sections.insert(index, section);
        self.rekey(|key| {
            if key.section >= index {
                Some(ImageKey::new(key.section + 1, key.question))
            } else {
                Some(key)
            }
        });
        Ok(())
    }

    /// Remove a section and its attachments; later attachments shift up
    pub fn remove_section(&mut self, index: usize) -> ModelResult<Section> {
        if index >= self.paper.sections.len() {
            return Err(ModelError::NoSuchSection(index));
        }
        let removed = self.paper.sections.remove(index);
        self.rekey(|key| match key.section.cmp(&index) {
            std::cmp::Ordering::Less => Some(key),
            std::cmp::Ordering::Equal => None,
            std::cmp::Ordering::Greater => Some(ImageKey::new(key.section - 1, key.question)),
        });
        Ok(removed)
    }

    /// Append a blank question to a section and return its key
    ///
    /// The number continues from the previous question when that one is
    /// purely numeric, otherwise it is the question's 1-based position.
    pub fn add_question(&mut self, section: usize) -> ModelResult<ImageKey> {
        let questions = &mut self
            .paper
            .sections
            .get_mut(section)
            .ok_or(ModelError::NoSuchSection(section))?
            .questions;

        let number = next_question_number(questions);
        questions.push(Question::new(number, ""));
        Ok(ImageKey::new(section, questions.len() - 1))
    }

    /// Insert a question at `key`; later attachments in the section shift down
    pub fn insert_question(&mut self, key: ImageKey, question: Question) -> ModelResult<()> {
        let questions = &mut self
            .paper
            .sections
            .get_mut(key.section)
            .ok_or(ModelError::NoSuchSection(key.section))?
            .questions;

        if key.question > questions.len() {
            return Err(ModelError::NoSuchQuestion {
                section: key.section,
                question: key.question,
            });
        }
        questions.insert(key.question, question);
        self.rekey(|k| {
            if k.section == key.section && k.question >= key.question {
                Some(ImageKey::new(k.section, k.question + 1))
            } else {
                Some(k)
            }
        });
        Ok(())
    }

    /// Remove a question and its attachment; later attachments shift up
    pub fn remove_question(&mut self, key: ImageKey) -> ModelResult<Question> {
        self.question_mut(key)?;
        let removed = self.paper.sections[key.section].questions.remove(key.question);
        self.rekey(|k| {
            if k.section != key.section || k.question < key.question {
                Some(k)
            } else if k.question == key.question {
                None
            } else {
                Some(ImageKey::new(k.section, k.question - 1))
            }
        });
        Ok(removed)
    }

    // =========================================================================
    // Attachments
    // =========================================================================

    /// Attach a diagram to a question, replacing any previous one
    pub fn attach_image(&mut self, key: ImageKey, bytes: Vec<u8>) -> ModelResult<()> {
        self.question_mut(key)?;
        let format = ImageFormat::from_bytes(&bytes);
        if !format.is_supported() {
            return Err(ModelError::UnsupportedImage(format!(
                "attachment for question {} is not PNG, JPEG, GIF or BMP",
                key
            )));
        }
        self.images.insert(key, bytes);
        Ok(())
    }

    /// Remove a question's diagram, returning it if there was one
    pub fn detach_image(&mut self, key: ImageKey) -> Option<Vec<u8>> {
        self.images.remove(&key)
    }

    pub fn image(&self, key: ImageKey) -> Option<&[u8]> {
        self.images.get(&key).map(Vec::as_slice)
    }

    /// Keys of all questions that carry a diagram, in print order
    pub fn image_keys(&self) -> impl Iterator<Item = ImageKey> + '_ {
        self.images.keys().copied()
    }

    /// Write all attachments to a fresh temporary directory
    ///
    /// The directory and its files live exactly as long as the returned
    /// guard.
    pub fn stage_images(&self) -> ModelResult<StagedImages> {
        let mut staged = StagedImages::new()?;
        for (key, bytes) in &self.images {
            let ext = ImageFormat::from_bytes(bytes).extension();
            let path = staged.write(&format!("qimg_{}.{}", key, ext), bytes)?;
            staged.images.insert(*key, path);
        }
        tracing::debug!(
            "Staged {} question image(s) in {}",
            staged.images.len(),
            staged.dir.path().display()
        );
        Ok(staged)
    }

    fn question_mut(&mut self, key: ImageKey) -> ModelResult<&mut Question> {
        self.paper
            .question_mut(key.section, key.question)
            .ok_or(ModelError::NoSuchQuestion {
                section: key.section,
                question: key.question,
            })
    }

    fn rekey<F>(&mut self, mut map: F)
    where
        F: FnMut(ImageKey) -> Option<ImageKey>,
    {
        let images = std::mem::take(&mut self.images);
        self.images = images
            .into_iter()
            .filter_map(|(key, bytes)| map(key).map(|k| (k, bytes)))
            .collect();
    }
}

/// Attachments written to a scoped temporary directory
///
/// Dropping the guard deletes the directory and everything in it.
#[derive(Debug)]
pub struct StagedImages {
    dir: TempDir,
    images: BTreeMap<ImageKey, PathBuf>,
    logo: Option<PathBuf>,
}

impl StagedImages {
    fn new() -> ModelResult<Self> {
        let dir = tempfile::Builder::new().prefix("prashna-").tempdir()?;
        Ok(Self {
            dir,
            images: BTreeMap::new(),
            logo: None,
        })
    }

    /// Stage a school logo alongside the question images
    pub fn stage_logo(&mut self, bytes: &[u8]) -> ModelResult<&Path> {
        let ext = ImageFormat::from_bytes(bytes).extension();
        let path = self.write(&format!("logo.{}", ext), bytes)?;
        Ok(self.logo.insert(path))
    }

    /// Directory holding the staged files
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Staged question images keyed by question
    pub fn images(&self) -> &BTreeMap<ImageKey, PathBuf> {
        &self.images
    }

    pub fn logo(&self) -> Option<&Path> {
        self.logo.as_deref()
    }

    fn write(&self, name: &str, bytes: &[u8]) -> ModelResult<PathBuf> {
        let path = self.dir.path().join(name);
        std::fs::write(&path, bytes)?;
        Ok(path)
    }
}

/// "Section A" for index 0, "Section B" for 1, and so on
fn section_letter_label(index: usize) -> String {
    let letter = (b'A' + (index % 26) as u8) as char;
    if index < 26 {
        format!("Section {}", letter)
    } else {
        format!("Section {}{}", letter, index / 26)
    }
}

fn next_question_number(questions: &[Question]) -> String {
    if let Some(last) = questions.last() {
        let n = &last.number;
        if !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(value) = n.parse::<u64>() {
                return (value + 1).to_string();
            }
        }
    }
    (questions.len() + 1).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01,
    ];

    fn session_with_three_questions() -> EditSession {
        let mut session = EditSession::blank();
        let s = session.add_section();
        for _ in 0..3 {
            session.add_question(s).unwrap();
        }
        session
    }

    #[test]
    fn test_add_section_labels() {
        let mut session = EditSession::blank();
        assert_eq!(session.add_section(), 0);
        assert_eq!(session.add_section(), 1);
        let names: Vec<_> = session
            .paper()
            .sections
            .iter()
            .map(|s| s.section_name.as_str())
            .collect();
        assert_eq!(names, vec!["Section A", "Section B"]);
    }

    #[test]
    fn test_add_question_numbering() {
        let mut session = session_with_three_questions();
        let numbers: Vec<_> = session.paper().sections[0]
            .questions
            .iter()
            .map(|q| q.number.clone())
            .collect();
        assert_eq!(numbers, vec!["1", "2", "3"]);

        session.paper_mut().sections[0].questions[2].number = "21".into();
        let key = session.add_question(0).unwrap();
        assert_eq!(key, ImageKey::new(0, 3));
        assert_eq!(session.paper().sections[0].questions[3].number, "22");

        // Non-numeric label falls back to position
        session.paper_mut().sections[0].questions[3].number = "Q5".into();
        session.add_question(0).unwrap();
        assert_eq!(session.paper().sections[0].questions[4].number, "5");
    }

    #[test]
    fn test_add_question_missing_section() {
        let mut session = EditSession::blank();
        assert!(matches!(
            session.add_question(0),
            Err(ModelError::NoSuchSection(0))
        ));
    }

    #[test]
    fn test_remove_question_shifts_images() {
        let mut session = session_with_three_questions();
        session.attach_image(ImageKey::new(0, 0), PNG.to_vec()).unwrap();
        session.attach_image(ImageKey::new(0, 1), PNG.to_vec()).unwrap();
        session.attach_image(ImageKey::new(0, 2), PNG.to_vec()).unwrap();

        session.remove_question(ImageKey::new(0, 1)).unwrap();

        let keys: Vec<_> = session.image_keys().collect();
        assert_eq!(keys, vec![ImageKey::new(0, 0), ImageKey::new(0, 1)]);
        assert_eq!(session.paper().sections[0].questions.len(), 2);
        assert_eq!(session.paper().sections[0].questions[1].number, "3");
    }

    #[test]
    fn test_insert_and_remove_section_shift_images() {
        let mut session = session_with_three_questions();
        session.add_section();
        session.add_question(1).unwrap();
        session.attach_image(ImageKey::new(1, 0), PNG.to_vec()).unwrap();

        session.insert_section(0, Section::new("Intro")).unwrap();
        assert!(session.image(ImageKey::new(2, 0)).is_some());
        assert!(session.image(ImageKey::new(1, 0)).is_none());

        session.remove_section(2).unwrap();
        assert_eq!(session.image_keys().count(), 0);
        assert!(session.remove_section(5).is_err());
    }

    #[test]
    fn test_insert_question_shifts_images() {
        let mut session = session_with_three_questions();
        session.attach_image(ImageKey::new(0, 1), PNG.to_vec()).unwrap();
        session
            .insert_question(ImageKey::new(0, 0), Question::new("0", "Warm-up"))
            .unwrap();
        assert!(session.image(ImageKey::new(0, 2)).is_some());
        assert!(session
            .insert_question(ImageKey::new(0, 9), Question::default())
            .is_err());
    }

    #[test]
    fn test_attach_rejects_bad_input() {
        let mut session = session_with_three_questions();
        assert!(matches!(
            session.attach_image(ImageKey::new(0, 7), PNG.to_vec()),
            Err(ModelError::NoSuchQuestion { section: 0, question: 7 })
        ));
        assert!(matches!(
            session.attach_image(ImageKey::new(0, 0), b"not an image".to_vec()),
            Err(ModelError::UnsupportedImage(_))
        ));
    }

    #[test]
    fn test_text_editing_helpers() {
        let mut session = session_with_three_questions();
        session.set_instructions_from_text("All questions are compulsory.\n\n  Use blue ink.  \n");
        assert_eq!(
            session.paper().instructions,
            vec!["All questions are compulsory.", "Use blue ink."]
        );

        let key = ImageKey::new(0, 0);
        session
            .set_subparts_from_text(key, "(i) Tundra\tCold\n\n(ii) Desert\tDry")
            .unwrap();
        assert_eq!(
            session.paper().sections[0].questions[0].subparts,
            vec!["(i) Tundra\tCold", "(ii) Desert\tDry"]
        );

        session.add_option_template(key).unwrap();
        assert_eq!(session.paper().sections[0].questions[0].subparts.len(), 4);
        session.clear_subparts(key).unwrap();
        assert!(session.paper().sections[0].questions[0].subparts.is_empty());
    }

    #[test]
    fn test_staged_images_are_cleaned_up() {
        let mut session = session_with_three_questions();
        session.attach_image(ImageKey::new(0, 2), PNG.to_vec()).unwrap();

        let mut staged = session.stage_images().unwrap();
        let dir = staged.path().to_path_buf();
        let image_path = staged.images()[&ImageKey::new(0, 2)].clone();
        assert!(image_path.ends_with("qimg_0_2.png"));
        assert_eq!(std::fs::read(&image_path).unwrap(), PNG);

        let logo = staged.stage_logo(PNG).unwrap().to_path_buf();
        assert!(logo.exists());
        assert_eq!(staged.logo(), Some(logo.as_path()));

        drop(staged);
        assert!(!dir.exists());
    }

    #[test]
    fn test_section_letter_label() {
        assert_eq!(section_letter_label(0), "Section A");
        assert_eq!(section_letter_label(25), "Section Z");
        assert_eq!(section_letter_label(26), "Section A1");
    }
}
