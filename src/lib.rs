//! # jovial-lsp
//!
//! Language Server Protocol implementation for JOVIAL J73 (MIL-STD-1589B/C).
//!
//! The crate's core is a semantic model of one JOVIAL translation unit and
//! a line-oriented statement recogniser that populates it; every IDE
//! feature below is a pure query over the resulting model. The model is
//! rebuilt from scratch on every document change — there is no incremental
//! parsing and no cross-document state.
//!
//! ## Modules
//!
//! - [`model`] — the semantic model: `Item`, `Table`, `Proc`,
//!   `CompoolReference`, `Define`, `TypeDecl`, `SemanticModel`.
//! - [`parser`] — `SemanticParser`, the statement recogniser that builds a
//!   `SemanticModel` from source text.
//! - [`keywords`] — the fixed J73 keyword set and their hover descriptions.
//! - [`hover`] — identifier lookup and hover payload construction.
//! - [`completion`] — prefix completion over keywords and model symbols.
//! - [`definition`] — go-to-definition, built on [`hover`].
//! - [`references`] — find-all-references, built on [`hover`].
//! - [`document_symbols`] — outline/breadcrumb symbol enumeration.
//! - [`folding`] — `BEGIN`/`END` block folding ranges.
//! - [`document`] — per-document source + line array + rebuilt model.
//! - [`state`] — multi-document server state (`DashMap<Url, DocumentState>`).
//! - [`server`] — the `tower-lsp` `LanguageServer` implementation wiring
//!   the above together.
//!
//! ## Non-goals
//!
//! The JSON-RPC framing loop and capability handshake are handled by
//! `tower-lsp`; expression-level parsing, type checking, code generation,
//! and diagnostics beyond what declaration structure implies are out of
//! scope for this crate entirely.

pub mod completion;
pub mod definition;
pub mod document;
pub mod document_symbols;
pub mod folding;
pub mod hover;
pub mod keywords;
pub mod model;
pub mod parser;
pub mod references;
pub mod server;
pub mod state;

use tower_lsp::{LspService, Server};

use server::JovialLanguageServer;

/// Run the JOVIAL LSP server on stdin/stdout until the client disconnects.
///
/// This is the sole entry point called by `main.rs`: it wires up the
/// `tower-lsp` service and serves the protocol loop.
pub async fn run_server() {
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(JovialLanguageServer::new);
    Server::new(stdin, stdout, socket).serve(service).await;
}
