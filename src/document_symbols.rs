//! `document_symbols` (spec §4.6): flat enumeration of top-level items,
//! tables, procs, and defines with LSP-compatible symbol-kind codes
//! (spec §6 "Symbol-kind mapping").

use crate::model::SemanticModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Variable,
    Constant,
    Class,
    Function,
}

impl SymbolKind {
    /// LSP-compatible integer code (spec §6).
    pub fn as_u32(&self) -> u32 {
        match self {
            SymbolKind::Variable => 13,
            SymbolKind::Constant => 14,
            SymbolKind::Class => 5,
            SymbolKind::Function => 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSymbol {
    pub name: String,
    pub kind: SymbolKind,
    pub detail: String,
    pub line_start: usize,
    pub line_end: usize,
}

/// Names containing `.` mark a scoped duplicate (spec §4.6) and are
/// skipped; this crate's model never produces such names (see DESIGN.md),
/// but the guard is kept since the operation names it explicitly.
fn is_scoped_duplicate(name: &str) -> bool {
    name.contains('.')
}

pub fn document_symbols(model: &SemanticModel) -> Vec<DocumentSymbol> {
    let mut out = Vec::new();

    for item in model.items.values() {
        if is_scoped_duplicate(&item.name) {
            continue;
        }
        let kind = if item.is_constant {
            SymbolKind::Constant
        } else {
            SymbolKind::Variable
        };
        let mut detail = item.jovial_type.as_str().to_string();
        if let Some(size) = item.size {
            detail.push(' ');
            detail.push_str(&size.to_string());
        }
        out.push(DocumentSymbol {
            name: item.name.clone(),
            kind,
            detail,
            line_start: item.line,
            line_end: item.line,
        });
    }

    for table in model.tables.values() {
        if is_scoped_duplicate(&table.name) {
            continue;
        }
        out.push(DocumentSymbol {
            name: table.name.clone(),
            kind: SymbolKind::Class,
            detail: format!("TABLE ({})", table.dimensions_str()),
            line_start: table.line_start,
            line_end: table.line_end,
        });
    }

    for proc in model.procs.values() {
        if is_scoped_duplicate(&proc.name) {
            continue;
        }
        let params = proc
            .parameters
            .iter()
            .map(|(name, _)| name.clone())
            .collect::<Vec<_>>()
            .join(", ");
        out.push(DocumentSymbol {
            name: proc.name.clone(),
            kind: SymbolKind::Function,
            detail: format!("PROC ({params})"),
            line_start: proc.line_start,
            line_end: proc.line_end,
        });
    }

    for define in model.defines.values() {
        if is_scoped_duplicate(&define.name) {
            continue;
        }
        out.push(DocumentSymbol {
            name: define.name.clone(),
            kind: SymbolKind::Constant,
            detail: format!("DEFINE = {}", define.value),
            line_start: define.line,
            line_end: define.line,
        });
    }

    out
}
