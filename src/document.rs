//! Per-document bookkeeping: source text, its line array, and the
//! [`SemanticModel`] rebuilt from it. Analogous to the teacher's own
//! `document.rs`, but with no token stream or interner — the model is
//! rebuilt wholesale on every open/change (spec §3 Lifecycle, §5).

use crate::model::SemanticModel;
use crate::parser;

pub struct DocumentState {
    pub source: String,
    lines: Vec<String>,
    pub model: SemanticModel,
    pub version: i32,
}

impl DocumentState {
    pub fn new(source: String, version: i32) -> Self {
        let model = parser::parse(&source);
        let lines = split_lines(&source);
        DocumentState {
            source,
            lines,
            model,
            version,
        }
    }

    /// Re-run the parser over `source` and replace both the model and the
    /// cached line array. The previous model is discarded wholesale, never
    /// patched (spec §3 Lifecycle).
    pub fn update(&mut self, source: String, version: i32) {
        self.model = parser::parse(&source);
        self.lines = split_lines(&source);
        self.source = source;
        self.version = version;
    }

    /// Borrowed view of the document's lines, the shape every QueryLayer
    /// function expects (spec §4.6 "(model, source lines, line, column)").
    pub fn line_refs(&self) -> Vec<&str> {
        self.lines.iter().map(String::as_str).collect()
    }
}

fn split_lines(source: &str) -> Vec<String> {
    source.split('\n').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_document_parses_source() {
        let doc = DocumentState::new("ITEM X S 16;\n".to_string(), 1);
        assert!(doc.model.get_item("X").is_some());
        assert_eq!(doc.version, 1);
    }

    #[test]
    fn update_replaces_model_and_lines() {
        let mut doc = DocumentState::new("ITEM X S 16;\n".to_string(), 1);
        doc.update("ITEM Y F 32;\n".to_string(), 2);
        assert!(doc.model.get_item("X").is_none());
        assert!(doc.model.get_item("Y").is_some());
        assert_eq!(doc.version, 2);
        assert_eq!(doc.line_refs()[0], "ITEM Y F 32;");
    }

    #[test]
    fn empty_document_has_empty_model() {
        let doc = DocumentState::new(String::new(), 0);
        assert!(doc.model.items.is_empty());
    }
}
