//! Demo paper used by the CLI `demo` command and by tests

use crate::paper::{ExamPaper, Question, Section};

/// School name shown with the demo paper
pub const DEMO_SCHOOL_NAME: &str = "Delhi Public School";

/// A small mixed-script paper exercising every subpart layout
pub fn demo_paper() -> ExamPaper {
    ExamPaper {
        exam_title: "Half Yearly Examination 2024-25".into(),
        school_name: String::new(),
        class_name: "IX".into(),
        subject: "Social Science".into(),
        time: "3 Hours".into(),
        total_marks: "80".into(),
        instructions: vec![
            "All questions are compulsory.".into(),
            "This paper has 5 sections — A, B, C, D and E.".into(),
            "Section A has 20 MCQs carrying 1 mark each.".into(),
            "Section B has 5 questions carrying 2 marks each.".into(),
            "Draw neat diagrams wherever required.".into(),
        ],
        sections: vec![
            Section::new("Section A — Multiple Choice Questions")
                .with_question(
                    Question::new("1", "Which of the following is NOT a feature of democracy?")
                        .with_marks("1")
                        .with_subparts([
                            "(a) Elected representatives",
                            "(b) Free and fair elections",
                            "(c) Military rule",
                            "(d) Rule of law",
                        ]),
                )
                .with_question(
                    Question::new("2", "The French Revolution began in:")
                        .with_marks("1")
                        .with_subparts(["(a) 1776", "(b) 1789", "(c) 1799", "(d) 1804"]),
                )
                .with_question(
                    Question::new("3", "भारत का सबसे लंबा समुद्र तट किस राज्य में है?")
                        .with_marks("1")
                        .with_subparts([
                            "(a) केरल",
                            "(b) गुजरात",
                            "(c) तमिलनाडु",
                            "(d) महाराष्ट्र",
                        ]),
                ),
            Section::new("Section B — Short Answer")
                .with_question(
                    Question::new("21", "Describe any three features of the Indian Constitution.")
                        .with_marks("2"),
                )
                .with_question(
                    Question::new("22", "भारत की प्रमुख नदियों के नाम बताइए।").with_marks("2"),
                ),
            Section::new("Section C — Long Answer")
                .with_question(
                    Question::new("26", "Match the following:")
                        .with_marks("4")
                        .with_subparts([
                            "(i) Tundra\tExtremely cold",
                            "(ii) Monsoon\tSeasonal rainfall",
                            "(iii) Desert\tHot and dry",
                            "(iv) Equatorial\tHot and humid",
                        ]),
                )
                .with_question(
                    Question::new("27", "Explain the storming of the Bastille.")
                        .with_marks("5")
                        .with_subparts([
                            "(a) Political significance",
                            "(b) Social impact",
                            "(c) Symbolic meaning",
                        ]),
                ),
        ],
    }
}
