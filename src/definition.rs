//! `definition_at` (spec §4.6): delegates to [`hover_at`] and re-expresses
//! the result as a fixed-width line range (spec §6).

use crate::hover::{hover_at, HoverPayload};
use crate::model::SemanticModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefinitionLocation {
    pub line: usize,
    pub character_start: usize,
    pub character_end: usize,
}

/// Item → its declaration line; Table/Proc → `line_start`; keywords yield
/// no definition.
pub fn definition_at(
    model: &SemanticModel,
    lines: &[&str],
    line: usize,
    column: usize,
) -> Option<DefinitionLocation> {
    let payload = hover_at(model, lines, line, column)?;
    let def_line = match payload {
        HoverPayload::Item { line, .. } => line,
        HoverPayload::Table { line_start, .. } => line_start,
        HoverPayload::Proc { line_start, .. } => line_start,
        HoverPayload::Keyword { .. } => return None,
    };

    Some(DefinitionLocation {
        line: def_line,
        character_start: 0,
        character_end: 100,
    })
}
