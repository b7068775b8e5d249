//! `hover_at` (spec §4.6): the query every other navigation query delegates
//! to. Finds the identifier token under the cursor and classifies it
//! against the model, falling back to the keyword table.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::keywords;
use crate::model::{JovialType, SemanticModel};

static IDENTIFIER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z][A-Za-z0-9']*").unwrap());

/// The tagged sum every hover/definition/references query produces or
/// consumes (spec §6 "Query payloads", spec §9 "Dynamic dispatch on entity
/// kind").
#[derive(Debug, Clone, PartialEq)]
pub enum HoverPayload {
    Item {
        name: String,
        jovial_type: JovialType,
        size: Option<i64>,
        is_constant: bool,
        is_static: bool,
        status_values: Vec<String>,
        initial_value: Option<String>,
        line: usize,
    },
    Table {
        name: String,
        dimensions: String,
        entries: Vec<String>,
        wordsize: Option<i64>,
        line_start: usize,
        line_end: usize,
    },
    Proc {
        name: String,
        parameters: String,
        line_start: usize,
        line_end: usize,
    },
    Keyword {
        name: String,
        description: &'static str,
    },
}

impl HoverPayload {
    pub fn name(&self) -> &str {
        match self {
            HoverPayload::Item { name, .. }
            | HoverPayload::Table { name, .. }
            | HoverPayload::Proc { name, .. }
            | HoverPayload::Keyword { name, .. } => name,
        }
    }
}

/// Find the identifier token (`\b[A-Za-z][A-Za-z0-9']*\b`, spec §4.6) whose
/// span contains `column` on `line`. Columns are plain character offsets,
/// matching the core's lack of UTF-16 bookkeeping (spec §6: positions are
/// plain data, transport encoding is the host's concern).
pub(crate) fn identifier_at(line: &str, column: usize) -> Option<(String, usize, usize)> {
    IDENTIFIER_RE.find_iter(line).find_map(|m| {
        if m.start() <= column && column < m.end() {
            Some((m.as_str().to_string(), m.start(), m.end()))
        } else {
            None
        }
    })
}

/// Look up `Item → Table → Proc → keyword`, in that order (spec §4.6).
pub fn hover_at(
    model: &SemanticModel,
    lines: &[&str],
    line: usize,
    column: usize,
) -> Option<HoverPayload> {
    let source_line = *lines.get(line)?;
    let (name, _, _) = identifier_at(source_line, column)?;

    if let Some(item) = model.get_item(&name) {
        return Some(HoverPayload::Item {
            name: item.name.clone(),
            jovial_type: item.jovial_type,
            size: item.size,
            is_constant: item.is_constant,
            is_static: item.is_static,
            status_values: item.status_values.clone(),
            initial_value: item.initial_value.clone(),
            line: item.line,
        });
    }

    if let Some(table) = model.get_table(&name) {
        return Some(HoverPayload::Table {
            name: table.name.clone(),
            dimensions: table.dimensions_str(),
            entries: table.entries.values().map(|i| i.name.clone()).collect(),
            wordsize: table.wordsize,
            line_start: table.line_start,
            line_end: table.line_end,
        });
    }

    if let Some(proc) = model.get_proc(&name) {
        return Some(HoverPayload::Proc {
            name: proc.name.clone(),
            parameters: proc.parameters_str(),
            line_start: proc.line_start,
            line_end: proc.line_end,
        });
    }

    if keywords::is_keyword(&name) {
        return Some(HoverPayload::Keyword {
            name: name.to_ascii_uppercase(),
            description: keywords::describe(&name),
        });
    }

    None
}
