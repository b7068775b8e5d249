//! Folding ranges for `BEGIN`…`END` delimited `TABLE` and `PROC` bodies.
//!
//! Not part of spec.md's distillation or the original Python server; added
//! because it falls directly out of the line-span bookkeeping the parser
//! already performs and needs no expression parsing, type checking, or
//! codegen (see SPEC_FULL.md §3).

use crate::model::SemanticModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldingRange {
    pub start_line: usize,
    pub end_line: usize,
}

pub fn folding_ranges(model: &SemanticModel) -> Vec<FoldingRange> {
    let mut out = Vec::new();

    for table in model.tables.values() {
        if table.line_end > table.line_start {
            out.push(FoldingRange {
                start_line: table.line_start,
                end_line: table.line_end,
            });
        }
    }

    for proc in model.procs.values() {
        if proc.body_start > 0 && proc.line_end > proc.body_start {
            out.push(FoldingRange {
                start_line: proc.body_start,
                end_line: proc.line_end,
            });
        }
    }

    out.sort_by_key(|r| r.start_line);
    out
}
