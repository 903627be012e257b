//! Subpart classification and layout
//!
//! A question's subparts are classified once into a [`SubpartLayout`] and
//! rendering dispatches on the variant. Classification is a pure function
//! of the entries and the presentation mode. It never fails: anything not
//! recognized as a matching set or an option set is a plain list.

use crate::layout::model::{
    Alignment, Block, BorderLine, Cell, Paragraph, RunFormat, Table, TableBorders,
};
use crate::layout::page::Presentation;
use regex_lite::Regex;
use std::sync::OnceLock;

/// Column separators in split preference order
const MATCH_SEPARATORS: [&str; 5] = ["\t", " → ", " -> ", " — ", " – "];

/// Labels that open a multiple-choice option
const OPTION_LABELS: [&str; 16] = [
    "(a)", "(b)", "(c)", "(d)", "a)", "b)", "c)", "d)", "A)", "B)", "C)", "D)", "(A)", "(B)",
    "(C)", "(D)",
];

const MCQ_CELL_INDENT_CM: f32 = 0.3;
const MCQ_ROW_MIN_HEIGHT: u32 = 280;
const MATCH_CELL_INDENT_CM: f32 = 0.2;
const MATCH_CELL_SPACING: f32 = 1.0;
const MATCH_ROW_MIN_HEIGHT: u32 = 300;
const MATCH_BORDER: BorderLine = BorderLine::new(4, "CCCCCC");
const PLAIN_INDENT_CM: f32 = 1.2;

/// One row of a two-column matching table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRow {
    pub left: String,
    pub right: String,
}

/// How a question's subparts are printed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubpartLayout {
    /// Four options in a 2x2 grid, row-major
    MultipleChoice { options: [String; 4] },
    /// Two-column table, one row per entry
    Matching { rows: Vec<MatchRow> },
    /// One indented line per entry
    Plain { items: Vec<String> },
}

impl SubpartLayout {
    pub fn kind(&self) -> &'static str {
        match self {
            SubpartLayout::MultipleChoice { .. } => "multiple-choice",
            SubpartLayout::Matching { .. } => "matching",
            SubpartLayout::Plain { .. } => "plain",
        }
    }
}

fn whitespace_run() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s{3,}").ok()).as_ref()
}

/// Classify a subpart list
///
/// Matching takes precedence: any entry with a tab, a spaced arrow or dash,
/// or a run of three or more whitespace characters makes the whole list a
/// matching set. Otherwise exactly four entries that all open with an
/// option label form a multiple-choice set, but only in compact mode.
/// Detection looks at the raw entries, so a leading or trailing tab still
/// counts. Entries are trimmed for printing; input order is kept.
pub fn classify_subparts(items: &[String], compact: bool) -> SubpartLayout {
    if items.iter().any(|e| is_match_entry(e)) {
        return SubpartLayout::Matching {
            rows: items.iter().map(|e| split_match_row(e.trim())).collect(),
        };
    }

    let entries: Vec<&str> = items.iter().map(|s| s.trim()).collect();

    if compact {
        if let [a, b, c, d] = entries.as_slice() {
            if entries.iter().all(|e| is_option_entry(e)) {
                return SubpartLayout::MultipleChoice {
                    options: [a, b, c, d].map(|s| s.to_string()),
                };
            }
        }
    }

    SubpartLayout::Plain {
        items: entries.into_iter().map(str::to_string).collect(),
    }
}

fn is_match_entry(entry: &str) -> bool {
    MATCH_SEPARATORS.iter().any(|sep| entry.contains(sep))
        || whitespace_run().is_some_and(|re| re.is_match(entry))
}

fn is_option_entry(entry: &str) -> bool {
    OPTION_LABELS.iter().any(|label| entry.starts_with(label))
}

/// Split a trimmed entry on the first occurrence of the preferred separator
///
/// An entry that does not yield two non-empty halves becomes a one-column
/// row with an empty right cell.
pub fn split_match_row(entry: &str) -> MatchRow {
    let halves = MATCH_SEPARATORS
        .iter()
        .find_map(|sep| entry.split_once(sep))
        .or_else(|| {
            let m = whitespace_run()?.find(entry)?;
            Some((&entry[..m.start()], &entry[m.end()..]))
        });

    match halves.map(|(l, r)| (l.trim(), r.trim())) {
        Some((left, right)) if !left.is_empty() && !right.is_empty() => MatchRow {
            left: left.to_string(),
            right: right.to_string(),
        },
        _ => MatchRow {
            left: entry.to_string(),
            right: String::new(),
        },
    }
}

/// Blocks for a classified subpart list
pub fn layout_subparts(layout: &SubpartLayout, style: &Presentation) -> Vec<Block> {
    let text_format = RunFormat::sized(style.subpart_size);
    let half_width = style.text_width_cm() / 2.0;

    match layout {
        SubpartLayout::MultipleChoice { options } => {
            let cell = |text: &str| {
                Cell::new(
                    half_width,
                    Paragraph::new()
                        .spacing(0.0, 0.0)
                        .indent_cm(MCQ_CELL_INDENT_CM)
                        .text(text, text_format.clone()),
                )
            };
            let table = Table::new(
                Alignment::Left,
                vec![half_width, half_width],
                TableBorders::None,
            )
            .with_row(
                Some(MCQ_ROW_MIN_HEIGHT),
                vec![cell(options[0].as_str()), cell(options[1].as_str())],
            )
            .with_row(
                Some(MCQ_ROW_MIN_HEIGHT),
                vec![cell(options[2].as_str()), cell(options[3].as_str())],
            );
            vec![Block::Table(table)]
        }
        SubpartLayout::Matching { rows } => {
            let cell = |text: &str| {
                Cell::new(
                    half_width,
                    Paragraph::new()
                        .spacing(MATCH_CELL_SPACING, MATCH_CELL_SPACING)
                        .indent_cm(MATCH_CELL_INDENT_CM)
                        .text(text, text_format.clone()),
                )
            };
            let table = rows.iter().fold(
                Table::new(
                    Alignment::Left,
                    vec![half_width, half_width],
                    TableBorders::All(MATCH_BORDER),
                ),
                |table, row| {
                    table.with_row(
                        Some(MATCH_ROW_MIN_HEIGHT),
                        vec![cell(row.left.as_str()), cell(row.right.as_str())],
                    )
                },
            );
            vec![Block::Table(table)]
        }
        SubpartLayout::Plain { items } => items
            .iter()
            .map(|item| {
                Block::Paragraph(
                    Paragraph::new()
                        .indent_cm(PLAIN_INDENT_CM)
                        .spacing(0.0, 0.0)
                        .line_spacing(1.0)
                        .text(item.as_str(), text_format.clone()),
                )
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn row(left: &str, right: &str) -> MatchRow {
        MatchRow {
            left: left.into(),
            right: right.into(),
        }
    }

    #[test]
    fn test_mcq_in_compact_mode() {
        let items = strings(&["(a) X", "(b) Y", "(c) Z", "(d) W"]);
        assert_eq!(
            classify_subparts(&items, true),
            SubpartLayout::MultipleChoice {
                options: ["(a) X", "(b) Y", "(c) Z", "(d) W"].map(String::from),
            }
        );
    }

    #[test]
    fn test_mcq_label_variants() {
        let items = strings(&["  a) one", "B) two", "(C) three", "(d)four"]);
        assert_eq!(classify_subparts(&items, true).kind(), "multiple-choice");
    }

    #[test]
    fn test_mcq_falls_back_to_plain_in_normal_mode() {
        let items = strings(&["(a) X", "(b) Y", "(c) Z", "(d) W"]);
        assert_eq!(
            classify_subparts(&items, false),
            SubpartLayout::Plain { items }
        );
    }

    #[test]
    fn test_mcq_needs_exactly_four_labelled_entries() {
        let three = strings(&["(a) X", "(b) Y", "(c) Z"]);
        assert_eq!(classify_subparts(&three, true).kind(), "plain");

        let five = strings(&["(a) X", "(b) Y", "(c) Z", "(d) W", "(e) V"]);
        assert_eq!(classify_subparts(&five, true).kind(), "plain");

        let unlabelled = strings(&["(a) X", "(b) Y", "(c) Z", "none of these"]);
        assert_eq!(classify_subparts(&unlabelled, true).kind(), "plain");
    }

    #[test]
    fn test_matching_by_tab() {
        let items = strings(&["Tundra\tCold", "Desert\tDry"]);
        assert_eq!(
            classify_subparts(&items, true),
            SubpartLayout::Matching {
                rows: vec![row("Tundra", "Cold"), row("Desert", "Dry")],
            }
        );
    }

    #[test]
    fn test_matching_wins_over_mcq() {
        let items = strings(&["(a) Tundra\tCold", "(b) X", "(c) Y", "(d) Z"]);
        let layout = classify_subparts(&items, true);
        assert_eq!(layout.kind(), "matching");
        if let SubpartLayout::Matching { rows } = layout {
            assert_eq!(rows[0], row("(a) Tundra", "Cold"));
            assert_eq!(rows[1], row("(b) X", ""));
        }
    }

    #[test]
    fn test_edge_separators_still_mean_matching() {
        let items = strings(&["Tundra\t", "Desert\t"]);
        assert_eq!(
            classify_subparts(&items, true),
            SubpartLayout::Matching {
                rows: vec![row("Tundra", ""), row("Desert", "")],
            }
        );

        let leading_tab = strings(&["\tCold", "Desert"]);
        assert_eq!(
            classify_subparts(&leading_tab, true),
            SubpartLayout::Matching {
                rows: vec![row("Cold", ""), row("Desert", "")],
            }
        );

        let trailing_run = strings(&["Delhi   ", "Paris"]);
        assert_eq!(classify_subparts(&trailing_run, false).kind(), "matching");
    }

    #[test]
    fn test_separator_variants() {
        assert_eq!(split_match_row("Delhi → Capital"), row("Delhi", "Capital"));
        assert_eq!(split_match_row("Delhi -> Capital"), row("Delhi", "Capital"));
        assert_eq!(split_match_row("Delhi — Capital"), row("Delhi", "Capital"));
        assert_eq!(split_match_row("Delhi – Capital"), row("Delhi", "Capital"));
        assert_eq!(split_match_row("Delhi     Capital"), row("Delhi", "Capital"));
    }

    #[test]
    fn test_tab_takes_priority() {
        assert_eq!(split_match_row("A -> B\tC"), row("A -> B", "C"));
        // First occurrence only
        assert_eq!(split_match_row("A\tB\tC"), row("A", "B\tC"));
    }

    #[test]
    fn test_unsplittable_entry_gets_empty_column() {
        assert_eq!(split_match_row("Heading only"), row("Heading only", ""));
        assert_eq!(split_match_row("A\t"), row("A\t", ""));
    }

    #[test]
    fn test_unspaced_hyphen_is_not_a_separator() {
        let items = strings(&["Well-being", "Self-help"]);
        assert_eq!(classify_subparts(&items, true).kind(), "plain");
    }

    #[test]
    fn test_plain_fallback() {
        let items = strings(&["Explain briefly.", "Give one example."]);
        let layout = classify_subparts(&items, true);
        assert_eq!(layout, SubpartLayout::Plain { items: items.clone() });

        let blocks = layout_subparts(&layout, &Presentation::compact());
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|b| matches!(b, Block::Paragraph(_))));
    }

    #[test]
    fn test_mcq_grid_is_row_major() {
        let layout = classify_subparts(&strings(&["(a) X", "(b) Y", "(c) Z", "(d) W"]), true);
        let blocks = layout_subparts(&layout, &Presentation::compact());
        let Block::Table(table) = &blocks[0] else {
            panic!("expected a table");
        };
        assert_eq!(table.borders, TableBorders::None);
        assert_eq!(
            table.cell_texts(),
            vec![vec!["(a) X", "(b) Y"], vec!["(c) Z", "(d) W"]]
        );
    }

    #[test]
    fn test_matching_table_rows() {
        let layout = classify_subparts(&strings(&["Tundra\tCold", "Desert\tDry"]), true);
        let blocks = layout_subparts(&layout, &Presentation::normal());
        let Block::Table(table) = &blocks[0] else {
            panic!("expected a table");
        };
        assert_eq!(table.borders, TableBorders::All(MATCH_BORDER));
        assert_eq!(table.rows.len(), 2);
        assert_eq!(
            table.cell_texts(),
            vec![vec!["Tundra", "Cold"], vec!["Desert", "Dry"]]
        );
    }

    proptest! {
        #[test]
        fn classification_is_deterministic(
            items in proptest::collection::vec("[ a-d()\t>-]{0,12}", 0..6),
            compact in any::<bool>(),
        ) {
            prop_assert_eq!(
                classify_subparts(&items, compact),
                classify_subparts(&items, compact)
            );
        }

        #[test]
        fn classification_preserves_entry_count_and_order(
            items in proptest::collection::vec("[a-z ]{1,10}(\t[a-z ]{1,10})?", 1..8),
            compact in any::<bool>(),
        ) {
            match classify_subparts(&items, compact) {
                SubpartLayout::MultipleChoice { options } => {
                    prop_assert_eq!(items.len(), 4);
                    for (option, item) in options.iter().zip(&items) {
                        prop_assert_eq!(option.as_str(), item.trim());
                    }
                }
                SubpartLayout::Matching { rows } => {
                    prop_assert_eq!(rows.len(), items.len());
                    for (row, item) in rows.iter().zip(&items) {
                        prop_assert!(item.trim().starts_with(row.left.as_str()));
                    }
                }
                SubpartLayout::Plain { items: plain } => {
                    let trimmed: Vec<&str> = items.iter().map(|s| s.trim()).collect();
                    prop_assert_eq!(plain, trimmed);
                }
            }
        }
    }
}
