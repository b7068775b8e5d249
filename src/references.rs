//! `references_at` (spec §4.6): delegates to [`hover_at`] for the name,
//! then scans every line with a word-boundary, case-insensitive match.

use regex::{escape, Regex};

use crate::hover::hover_at;
use crate::model::SemanticModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceLocation {
    pub line: usize,
    pub character_start: usize,
    pub character_end: usize,
}

/// Returns one location per `\b<name>\b` match across all lines (including
/// the declaration itself), or an empty vector if the cursor isn't on a
/// known name.
pub fn references_at(
    model: &SemanticModel,
    lines: &[&str],
    line: usize,
    column: usize,
) -> Vec<ReferenceLocation> {
    let Some(payload) = hover_at(model, lines, line, column) else {
        return Vec::new();
    };

    let pattern = match Regex::new(&format!(r"(?i)\b{}\b", escape(payload.name()))) {
        Ok(re) => re,
        Err(_) => return Vec::new(),
    };

    let mut out = Vec::new();
    for (i, source_line) in lines.iter().enumerate() {
        for m in pattern.find_iter(source_line) {
            out.push(ReferenceLocation {
                line: i,
                character_start: m.start(),
                character_end: m.end(),
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    const SCENARIO_B: &str =
        "TABLE WAYPOINTS (1:100);\nBEGIN\n  ITEM LAT F 32;\n  ITEM LON F 32;\nEND\n";

    fn scenario_b_lines() -> Vec<&'static str> {
        vec![
            "TABLE WAYPOINTS (1:100);",
            "BEGIN",
            "  ITEM LAT F 32;",
            "  ITEM LON F 32;",
            "END",
        ]
    }

    #[test]
    fn find_references_to_table_entry() {
        let model = parse(SCENARIO_B);
        let lines = scenario_b_lines();
        let refs = references_at(&model, &lines, 2, 7);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].line, 2);
    }

    #[test]
    fn find_references_scans_raw_lines_including_comment_text() {
        // references_at scans the raw source lines as given, not the
        // comment-stripped text the parser works from: a "LAT" appearing
        // after a `"` still counts as a match.
        let model = parse(SCENARIO_B);
        let mut lines = scenario_b_lines();
        lines.push("  \" note: LAT is the latitude entry");
        let refs = references_at(&model, &lines, 2, 7);
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[1].line, 5);
    }

    #[test]
    fn find_references_unknown_word_returns_empty() {
        let model = parse(SCENARIO_B);
        let lines = scenario_b_lines();
        assert!(references_at(&model, &lines, 0, 0).is_empty());
    }

    #[test]
    fn find_references_case_insensitive() {
        let model = parse("ITEM ALTITUDE S 16;\nITEM OTHER S 16;\n");
        let lines = ["ITEM ALTITUDE S 16;", "ITEM OTHER S 16;", "  altitude used here"];
        let refs = references_at(&model, &lines, 0, 6);
        assert_eq!(refs.len(), 2);
    }

    #[test]
    fn find_references_respects_word_boundary() {
        let model = parse("ITEM LAT F 32;\n");
        let lines = ["ITEM LAT F 32;", "ITEM LATITUDE F 32;"];
        let refs = references_at(&model, &lines, 0, 6);
        assert_eq!(refs.len(), 1);
    }
}
