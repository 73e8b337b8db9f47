// Copyright 2026 The Matrix.org Foundation C.I.C.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use tracing::{debug, warn};

use super::DocumentStats;
use crate::actions::EditorAction;
use crate::parser::parse_lenient;
use crate::selection::Selection;
use crate::store::{DocumentStore, MemoryStore, STORAGE_KEY};
use crate::style_tree::StyleTree;
use crate::to_html::ToHtml;

/// What the host needs after a mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditUpdate {
    /// The document markup, as just persisted.
    pub html: String,
    pub stats: DocumentStats,
}

#[derive(Debug)]
pub struct EditorSession<S: DocumentStore> {
    pub(crate) tree: StyleTree,
    pub(crate) selection: Option<Selection>,
    pub(crate) store: S,
}

impl<S: DocumentStore> EditorSession<S> {
    /// Open a session on the document persisted in `store`, or on an empty
    /// document if nothing is stored yet.
    pub fn new(store: S) -> Self {
        let tree = match store.get(STORAGE_KEY) {
            Some(markup) => load_markup(&markup),
            None => StyleTree::new(),
        };
        debug!(len = tree.len(), "opened editor session");
        Self {
            tree,
            selection: None,
            store,
        }
    }

    pub fn tree(&self) -> &StyleTree {
        &self.tree
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Run the toolbar action `action`.
    pub fn perform(&mut self, action: EditorAction) -> EditUpdate {
        match action {
            EditorAction::Bold => self.bold(),
            EditorAction::Italic => self.italic(),
            EditorAction::Underline => self.underline(),
            EditorAction::ResetFormat => self.clear_formatting(),
            EditorAction::Uppercase => self.uppercase(),
            EditorAction::Lowercase => self.lowercase(),
            EditorAction::CapitalizeWords => self.capitalize_words(),
            EditorAction::CapitalizeSentences => self.capitalize_sentences(),
        }
    }

    /// Persist the document and describe its new state.
    pub(crate) fn create_update(&mut self) -> EditUpdate {
        let html = self.tree.to_html();
        if let Err(err) = self.store.set(STORAGE_KEY, html.clone()) {
            warn!(%err, "failed to persist document");
        }
        EditUpdate {
            html,
            stats: self.stats(),
        }
    }
}

impl EditorSession<MemoryStore> {
    /// A session over `html`, backed by an in-memory store.
    pub fn from_html(html: &str) -> Self {
        Self::new(MemoryStore::with_document(html))
    }
}

/// Parse markup from the store or the host, keeping whatever could be
/// recovered from malformed input.
pub(crate) fn load_markup(markup: &str) -> StyleTree {
    let (tree, error) = parse_lenient(markup);
    if let Some(err) = error {
        warn!(%err, "recovered document from malformed markup");
    }
    tree
}
