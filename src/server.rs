//! Thin `tower-lsp` host shell. Every handler fetches the relevant
//! [`crate::document::DocumentState`] and delegates to the matching
//! QueryLayer module (spec §4.6) — no logic lives here beyond translating
//! between `lsp_types` and this crate's own query/result types.
//!
//! Deliberately does not implement diagnostics, semantic tokens, code
//! actions, rename, inlay hints, code lens, signature help, or formatting:
//! none of those have a basis in a pure declaration-structure model, and
//! expression parsing/type checking/codegen/diagnostics are explicit
//! non-goals of the core (spec §1, SPEC_FULL.md §2).

use std::sync::Arc;

use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use crate::state::ServerState;
use crate::{completion, definition, document_symbols, folding, hover, references};

pub struct JovialLanguageServer {
    #[allow(dead_code)]
    client: Client,
    state: Arc<ServerState>,
}

impl JovialLanguageServer {
    pub fn new(client: Client) -> Self {
        JovialLanguageServer {
            client,
            state: Arc::new(ServerState::new()),
        }
    }
}

fn position_to_line_col(position: Position) -> (usize, usize) {
    (position.line as usize, position.character as usize)
}

fn line_range(line: usize, character_start: usize, character_end: usize) -> Range {
    Range {
        start: Position {
            line: line as u32,
            character: character_start as u32,
        },
        end: Position {
            line: line as u32,
            character: character_end as u32,
        },
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for JovialLanguageServer {
    async fn initialize(&self, _: InitializeParams) -> Result<InitializeResult> {
        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                completion_provider: Some(CompletionOptions {
                    trigger_characters: Some(vec![
                        " ".to_string(),
                        "'".to_string(),
                        ".".to_string(),
                        "(".to_string(),
                    ]),
                    ..Default::default()
                }),
                definition_provider: Some(OneOf::Left(true)),
                references_provider: Some(OneOf::Left(true)),
                document_symbol_provider: Some(OneOf::Left(true)),
                folding_range_provider: Some(FoldingRangeProviderCapability::Simple(true)),
                ..Default::default()
            },
            ..Default::default()
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        log::info!("jovial-lsp initialized");
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        log::info!("opened {uri}");
        self.state
            .open_document(uri, params.text_document.text, params.text_document.version);
    }

    async fn did_change(&self, mut params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;
        if let Some(change) = params.content_changes.pop() {
            self.state.update_document(&uri, change.text, version);
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.state.close_document(&params.text_document.uri);
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = params.text_document_position_params.text_document.uri;
        let (line, column) = position_to_line_col(params.text_document_position_params.position);
        let Some(doc) = self.state.documents.get(&uri) else {
            return Ok(None);
        };
        let lines = doc.line_refs();
        Ok(hover::hover_at(&doc.model, &lines, line, column).map(render_hover))
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = params.text_document_position.text_document.uri;
        let (line, column) = position_to_line_col(params.text_document_position.position);
        let Some(doc) = self.state.documents.get(&uri) else {
            return Ok(None);
        };
        let lines = doc.line_refs();
        let items = completion::completions_at(&doc.model, &lines, line, column)
            .into_iter()
            .map(render_completion_entry)
            .collect();
        Ok(Some(CompletionResponse::Array(items)))
    }

    async fn goto_definition(
        &self,
        params: GotoDefinitionParams,
    ) -> Result<Option<GotoDefinitionResponse>> {
        let uri = params.text_document_position_params.text_document.uri;
        let (line, column) = position_to_line_col(params.text_document_position_params.position);
        let Some(doc) = self.state.documents.get(&uri) else {
            return Ok(None);
        };
        let lines = doc.line_refs();
        Ok(definition::definition_at(&doc.model, &lines, line, column).map(|loc| {
            GotoDefinitionResponse::Scalar(Location {
                uri: uri.clone(),
                range: line_range(loc.line, loc.character_start, loc.character_end),
            })
        }))
    }

    async fn references(&self, params: ReferenceParams) -> Result<Option<Vec<Location>>> {
        let uri = params.text_document_position.text_document.uri;
        let (line, column) = position_to_line_col(params.text_document_position.position);
        let Some(doc) = self.state.documents.get(&uri) else {
            return Ok(None);
        };
        let lines = doc.line_refs();
        let locations = references::references_at(&doc.model, &lines, line, column)
            .into_iter()
            .map(|loc| Location {
                uri: uri.clone(),
                range: line_range(loc.line, loc.character_start, loc.character_end),
            })
            .collect();
        Ok(Some(locations))
    }

    async fn document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> Result<Option<DocumentSymbolResponse>> {
        let uri = params.text_document.uri;
        let Some(doc) = self.state.documents.get(&uri) else {
            return Ok(None);
        };
        let symbols = document_symbols::document_symbols(&doc.model)
            .into_iter()
            .map(render_symbol)
            .collect();
        Ok(Some(DocumentSymbolResponse::Nested(symbols)))
    }

    async fn folding_range(&self, params: FoldingRangeParams) -> Result<Option<Vec<FoldingRange>>> {
        let uri = params.text_document.uri;
        let Some(doc) = self.state.documents.get(&uri) else {
            return Ok(None);
        };
        let ranges = folding::folding_ranges(&doc.model)
            .into_iter()
            .map(|r| FoldingRange {
                start_line: r.start_line as u32,
                start_character: None,
                end_line: r.end_line as u32,
                end_character: None,
                kind: Some(FoldingRangeKind::Region),
                collapsed_text: None,
            })
            .collect();
        Ok(Some(ranges))
    }
}

fn render_completion_entry(entry: completion::CompletionEntry) -> CompletionItem {
    let kind = match entry.kind {
        completion::CompletionKind::Keyword => CompletionItemKind::KEYWORD,
        completion::CompletionKind::Proc => CompletionItemKind::FUNCTION,
        completion::CompletionKind::Table => CompletionItemKind::CLASS,
        completion::CompletionKind::Item => CompletionItemKind::VARIABLE,
        completion::CompletionKind::Define => CompletionItemKind::CONSTANT,
    };
    CompletionItem {
        label: entry.label,
        kind: Some(kind),
        detail: Some(entry.detail),
        ..Default::default()
    }
}

fn render_hover(payload: hover::HoverPayload) -> Hover {
    let text = match payload {
        hover::HoverPayload::Item {
            name,
            jovial_type,
            size,
            is_constant,
            is_static,
            status_values,
            initial_value,
            ..
        } => {
            let mut s = format!("**{name}**: {}", jovial_type.as_str());
            if let Some(size) = size {
                s.push_str(&format!(" {size}"));
            }
            if is_constant {
                s.push_str(" CONSTANT");
            }
            if is_static {
                s.push_str(" STATIC");
            }
            if !status_values.is_empty() {
                s.push_str(&format!("\n\nValues: {}", status_values.join(", ")));
            }
            if let Some(v) = initial_value {
                s.push_str(&format!("\n\nInitial value: {v}"));
            }
            s
        }
        hover::HoverPayload::Table {
            name,
            dimensions,
            entries,
            wordsize,
            ..
        } => {
            let mut s = format!(
                "**{name}**: TABLE ({dimensions})\n\nEntries: {}",
                entries.join(", ")
            );
            if let Some(w) = wordsize {
                s.push_str(&format!("\n\nWordsize: {w}"));
            }
            s
        }
        hover::HoverPayload::Proc {
            name, parameters, ..
        } => format!("**{name}**: PROC ({parameters})"),
        hover::HoverPayload::Keyword { name, description } => {
            format!("**{name}**: {description}")
        }
    };

    Hover {
        contents: HoverContents::Scalar(MarkedString::String(text)),
        range: None,
    }
}

fn render_symbol(symbol: document_symbols::DocumentSymbol) -> tower_lsp::lsp_types::DocumentSymbol {
    let kind = match symbol.kind {
        document_symbols::SymbolKind::Variable => SymbolKind::VARIABLE,
        document_symbols::SymbolKind::Constant => SymbolKind::CONSTANT,
        document_symbols::SymbolKind::Class => SymbolKind::CLASS,
        document_symbols::SymbolKind::Function => SymbolKind::FUNCTION,
    };

    #[allow(deprecated)]
    tower_lsp::lsp_types::DocumentSymbol {
        name: symbol.name,
        detail: Some(symbol.detail),
        kind,
        tags: None,
        deprecated: None,
        range: line_range(symbol.line_start, 0, 100),
        selection_range: line_range(symbol.line_start, 0, 100),
        children: None,
    }
}
