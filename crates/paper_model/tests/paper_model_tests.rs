//! Integration tests for the paper model
//! Covers ingest of collaborator output, validation, and editing sessions
//! that keep image attachments aligned with their questions.

use paper_model::{
    parse_structured_response, sample::demo_paper, EditSession, ExamPaper, ImageKey, IssueKind,
    Question,
};
use proptest::prelude::*;

const PNG_1X1: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00,
];

#[test]
fn test_collaborator_response_with_loose_types() {
    let response = r#"```json
{
  "exam_title": "Pre-Board Examination",
  "class": 10,
  "subject": "Mathematics",
  "time": null,
  "total_marks": 80,
  "instructions": "Use of calculators is not permitted.",
  "sections": [
    {
      "section_name": "Section A",
      "questions": [
        {"number": 1, "text": "Find the HCF of 96 and 404.", "marks": 2, "subparts": null},
        {"number": "2", "text": "Solve:", "marks": "3", "subparts": ["(i) x + 1 = 2", null]}
      ]
    }
  ]
}
```"#;

    let paper = parse_structured_response(response).unwrap();
    assert_eq!(paper.class_name, "10");
    assert_eq!(paper.time, "");
    assert_eq!(paper.total_marks, "80");
    assert_eq!(paper.instructions, vec!["Use of calculators is not permitted."]);

    let q1 = paper.question(0, 0).unwrap();
    assert_eq!(q1.number, "1");
    assert!(q1.subparts.is_empty());

    let q2 = paper.question(0, 1).unwrap();
    assert_eq!(q2.subparts, vec!["(i) x + 1 = 2"]);

    assert!(paper.validate().is_clean());
}

#[test]
fn test_garbage_response_is_an_error() {
    assert!(parse_structured_response("Sorry, I could not read the image.").is_err());
}

#[test]
fn test_demo_paper_shape() {
    let paper = demo_paper();
    assert_eq!(paper.sections.len(), 3);
    assert_eq!(paper.question_count(), 7);
    assert_eq!(paper.instructions.len(), 5);
    assert!(paper.validate().is_clean());
}

#[test]
fn test_validation_flags_duplicates_per_section_only() {
    let mut paper = demo_paper();
    // Same number in another section is fine
    paper.sections[1].questions[0].number = "1".into();
    assert!(paper.validate().is_clean());

    paper.sections[1].questions[1].number = "1".into();
    let report = paper.validate();
    assert_eq!(report.len(), 1);
    assert_eq!(report.issues[0].path, "sections[1].questions[1]");
    assert_eq!(report.issues[0].kind, IssueKind::DuplicateNumber("1".into()));
}

#[test]
fn test_session_edit_flow() {
    let mut session = EditSession::new(demo_paper());

    // Attach a diagram to Q27 and insert a question before it
    let q27 = ImageKey::new(2, 1);
    session.attach_image(q27, PNG_1X1.to_vec()).unwrap();
    session
        .insert_question(ImageKey::new(2, 1), Question::new("26A", "Label the map."))
        .unwrap();
    assert!(session.image(ImageKey::new(2, 2)).is_some());

    // Removing the whole first section moves it up one section
    session.remove_section(0).unwrap();
    let keys: Vec<_> = session.image_keys().collect();
    assert_eq!(keys, vec![ImageKey::new(1, 2)]);
    assert_eq!(session.paper().question(1, 2).unwrap().number, "27");

    let staged = session.stage_images().unwrap();
    assert_eq!(staged.images().len(), 1);
    assert!(staged.images()[&ImageKey::new(1, 2)].exists());
}

#[test]
fn test_json_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("paper.json");
    std::fs::write(&path, demo_paper().to_json_pretty().unwrap()).unwrap();

    let file = std::fs::File::open(&path).unwrap();
    let paper = ExamPaper::from_json_reader(file).unwrap();
    assert_eq!(paper, demo_paper());
}

proptest! {
    #[test]
    fn image_key_text_form_roundtrips(section in 0usize..1000, question in 0usize..1000) {
        let key = ImageKey::new(section, question);
        let parsed: ImageKey = key.to_string().parse().unwrap();
        prop_assert_eq!(parsed, key);
    }

    #[test]
    fn normalized_paper_validates_without_blank_entries(
        instructions in proptest::collection::vec("[ a-z]{0,6}", 0..6),
        subparts in proptest::collection::vec("[ a-z()]{0,6}", 0..6),
    ) {
        let mut paper = demo_paper();
        paper.instructions = instructions;
        paper.sections[0].questions[0].subparts = subparts;
        let report = paper.normalized().validate();
        let no_blank_issues = report.issues.iter().all(|i| {
            i.kind != IssueKind::BlankInstruction && i.kind != IssueKind::BlankSubpart
        });
        prop_assert!(no_blank_issues);
    }
}
