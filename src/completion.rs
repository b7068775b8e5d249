//! `completions_at` (spec §4.6): prefix completion over the fixed keyword
//! set plus every symbol currently in the model.
//!
//! Each entry also carries an LSP-compatible `CompletionItemKind` code and
//! a human-readable detail string, mirroring the classification the
//! original Python server performs (`Keyword=14, Function/PROC=3,
//! Class/TABLE=7, Variable/ITEM=6, Constant/DEFINE=21`; SPEC_FULL.md §3).

use crate::keywords;
use crate::model::SemanticModel;

/// LSP-compatible completion item kind (subset actually produced here).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionKind {
    Keyword,
    Item,
    Table,
    Proc,
    Define,
}

impl CompletionKind {
    /// LSP `CompletionItemKind` integer code (spec §6).
    pub fn as_u32(&self) -> u32 {
        match self {
            CompletionKind::Keyword => 14,
            CompletionKind::Proc => 3,
            CompletionKind::Table => 7,
            CompletionKind::Item => 6,
            CompletionKind::Define => 21,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionEntry {
    pub label: String,
    pub kind: CompletionKind,
    pub detail: String,
}

/// Last whitespace-separated run of characters ending at (not including)
/// `column` on `line`, empty if `column` sits right after whitespace or at
/// the start of the line.
fn prefix_upto(line: &str, column: usize) -> String {
    let column = column.min(line.len());
    let head = &line[..column];
    head.rsplit(char::is_whitespace).next().unwrap_or("").to_string()
}

/// Classify a model symbol the same way `hover_at` would, but in the
/// original server's completion precedence (keyword-set membership is
/// handled by the caller before this is reached): PROC → TABLE → ITEM →
/// DEFINE.
fn symbol_entry(model: &SemanticModel, name: &str) -> CompletionEntry {
    if let Some(proc) = model.get_proc(name) {
        return CompletionEntry {
            label: proc.name.clone(),
            kind: CompletionKind::Proc,
            detail: format!("PROC ({})", proc.parameters_str()),
        };
    }
    if let Some(table) = model.get_table(name) {
        return CompletionEntry {
            label: table.name.clone(),
            kind: CompletionKind::Table,
            detail: format!("TABLE ({})", table.dimensions_str()),
        };
    }
    if let Some(item) = model.get_item(name) {
        let mut type_str = item.jovial_type.as_str().to_string();
        if let Some(size) = item.size {
            type_str.push(' ');
            type_str.push_str(&size.to_string());
        }
        return CompletionEntry {
            label: item.name.clone(),
            kind: CompletionKind::Item,
            detail: format!("ITEM {type_str}"),
        };
    }
    if let Some(define) = model.defines.get(&crate::model::fold(name)) {
        return CompletionEntry {
            label: define.name.clone(),
            kind: CompletionKind::Define,
            detail: format!("DEFINE = {}", define.value),
        };
    }
    // Unreachable in practice: `name` always came from `get_all_symbols()`,
    // which only yields names drawn from these four collections.
    CompletionEntry {
        label: name.to_string(),
        kind: CompletionKind::Item,
        detail: String::new(),
    }
}

/// Keywords and model symbols whose upper-cased name starts with the
/// prefix at the cursor, sorted by label and de-duplicated. An empty
/// prefix matches everything.
pub fn completions_at(
    model: &SemanticModel,
    lines: &[&str],
    line: usize,
    column: usize,
) -> Vec<CompletionEntry> {
    let Some(source_line) = lines.get(line) else {
        return Vec::new();
    };
    let prefix = prefix_upto(source_line, column).to_ascii_uppercase();

    let mut out: Vec<CompletionEntry> = Vec::new();

    for kw in keywords::KEYWORDS {
        if prefix.is_empty() || kw.starts_with(&prefix) {
            out.push(CompletionEntry {
                label: (*kw).to_string(),
                kind: CompletionKind::Keyword,
                detail: keywords::describe(kw).to_string(),
            });
        }
    }

    for name in model.get_all_symbols() {
        if prefix.is_empty() || name.to_ascii_uppercase().starts_with(&prefix) {
            out.push(symbol_entry(model, &name));
        }
    }

    out.sort_by(|a, b| a.label.cmp(&b.label));
    out.dedup_by(|a, b| a.label == b.label);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    const SCENARIO_A: &str = "START FLIGHT'CONTROL;\nDEFINE MAX'ALT = 50000;\nITEM ALTITUDE STATIC S 16;\nITEM MODE STATUS (V(NORMAL), V(WARN));\nTERM\n";

    fn labels(entries: &[CompletionEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.label.as_str()).collect()
    }

    #[test]
    fn prefix_completion_matches_symbol_and_excludes_unrelated() {
        let model = parse(SCENARIO_A);
        let lines = ["  ALT"];
        let results = completions_at(&model, &lines, 0, 5);
        assert!(labels(&results).contains(&"ALTITUDE"));
        assert!(!labels(&results).contains(&"MODE"));
    }

    #[test]
    fn empty_prefix_returns_every_keyword() {
        let model = parse(SCENARIO_A);
        let lines = [""];
        let results = completions_at(&model, &lines, 0, 0);
        let found = labels(&results);
        for kw in keywords::KEYWORDS {
            assert!(found.contains(kw), "missing keyword {kw}");
        }
    }

    #[test]
    fn results_are_sorted_and_deduplicated() {
        let model = parse("ITEM S S 16;\n");
        let lines = [""];
        let results = completions_at(&model, &lines, 0, 0);
        let found = labels(&results);
        let mut sorted = found.clone();
        sorted.sort();
        assert_eq!(found, sorted);
        let unique: std::collections::HashSet<_> = found.iter().collect();
        assert_eq!(unique.len(), found.len());
    }

    #[test]
    fn out_of_range_line_returns_empty() {
        let model = parse(SCENARIO_A);
        let lines = ["ITEM X S 16;"];
        assert!(completions_at(&model, &lines, 9, 0).is_empty());
    }

    #[test]
    fn prefix_after_whitespace_is_empty() {
        let model = parse(SCENARIO_A);
        let lines = ["ITEM "];
        let results = completions_at(&model, &lines, 0, 5);
        let found = labels(&results);
        assert!(found.contains(&"ITEM"));
        assert!(found.contains(&"ALTITUDE"));
    }

    #[test]
    fn keyword_entry_has_keyword_kind() {
        let model = parse(SCENARIO_A);
        let lines = ["ITE"];
        let results = completions_at(&model, &lines, 0, 3);
        let item_kw = results.iter().find(|e| e.label == "ITEM").unwrap();
        assert_eq!(item_kw.kind, CompletionKind::Keyword);
        assert_eq!(item_kw.detail, keywords::describe("ITEM"));
    }

    #[test]
    fn item_entry_has_variable_kind_and_type_detail() {
        let model = parse(SCENARIO_A);
        let lines = ["ALT"];
        let results = completions_at(&model, &lines, 0, 3);
        let altitude = results.iter().find(|e| e.label == "ALTITUDE").unwrap();
        assert_eq!(altitude.kind, CompletionKind::Item);
        assert_eq!(altitude.detail, "ITEM S 16");
    }

    #[test]
    fn table_entry_has_class_kind_and_dimension_detail() {
        let src = "TABLE WAYPOINTS (1:100);\nBEGIN\n  ITEM LAT F 32;\nEND\n";
        let model = parse(src);
        let lines = ["WAY"];
        let results = completions_at(&model, &lines, 0, 3);
        let table = results.iter().find(|e| e.label == "WAYPOINTS").unwrap();
        assert_eq!(table.kind, CompletionKind::Table);
        assert_eq!(table.detail, "TABLE (1:100)");
    }

    #[test]
    fn proc_entry_has_function_kind_and_param_detail() {
        let model = parse("PROC UPDATE'POS (A : B);\n");
        let lines = ["UPD"];
        let results = completions_at(&model, &lines, 0, 3);
        let proc = results.iter().find(|e| e.label == "UPDATE'POS").unwrap();
        assert_eq!(proc.kind, CompletionKind::Proc);
        assert!(proc.detail.contains("IN"));
        assert!(proc.detail.contains("OUT"));
    }

    #[test]
    fn define_entry_has_constant_kind_and_value_detail() {
        let model = parse(SCENARIO_A);
        let lines = ["MAX"];
        let results = completions_at(&model, &lines, 0, 3);
        let define = results.iter().find(|e| e.label == "MAX'ALT").unwrap();
        assert_eq!(define.kind, CompletionKind::Define);
        assert_eq!(define.detail, "DEFINE = 50000");
    }

    #[test]
    fn completion_kind_codes_match_lsp_mapping() {
        assert_eq!(CompletionKind::Keyword.as_u32(), 14);
        assert_eq!(CompletionKind::Proc.as_u32(), 3);
        assert_eq!(CompletionKind::Table.as_u32(), 7);
        assert_eq!(CompletionKind::Item.as_u32(), 6);
        assert_eq!(CompletionKind::Define.as_u32(), 21);
    }
}
