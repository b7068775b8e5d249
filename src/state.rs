//! Host-level, multi-document state. Mirrors the teacher's own
//! `state.rs` shape (a `DashMap` keyed by document URI) even though the
//! core parser/model itself is single-threaded cooperative (spec §5) —
//! concurrency here is about serving many open documents at once, not
//! about the core.

use dashmap::DashMap;
use tower_lsp::lsp_types::Url;

use crate::document::DocumentState;

#[derive(Default)]
pub struct ServerState {
    pub documents: DashMap<Url, DocumentState>,
}

impl ServerState {
    pub fn new() -> Self {
        ServerState::default()
    }

    pub fn open_document(&self, uri: Url, source: String, version: i32) {
        self.documents.insert(uri, DocumentState::new(source, version));
    }

    pub fn update_document(&self, uri: &Url, source: String, version: i32) {
        match self.documents.get_mut(uri) {
            Some(mut doc) => doc.update(source, version),
            None => {
                self.documents
                    .insert(uri.clone(), DocumentState::new(source, version));
            }
        }
    }

    pub fn close_document(&self, uri: &Url) {
        self.documents.remove(uri);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn open_then_update_then_close() {
        let state = ServerState::new();
        let u = uri("file:///a.jov");
        state.open_document(u.clone(), "ITEM X S 16;\n".to_string(), 1);
        assert!(state.documents.get(&u).unwrap().model.get_item("X").is_some());

        state.update_document(&u, "ITEM Y F 32;\n".to_string(), 2);
        assert!(state.documents.get(&u).unwrap().model.get_item("Y").is_some());

        state.close_document(&u);
        assert!(state.documents.get(&u).is_none());
    }

    #[test]
    fn update_on_unopened_document_opens_it() {
        let state = ServerState::new();
        let u = uri("file:///b.jov");
        state.update_document(&u, "ITEM Z S 8;\n".to_string(), 1);
        assert!(state.documents.get(&u).unwrap().model.get_item("Z").is_some());
    }
}
