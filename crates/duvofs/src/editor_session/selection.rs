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

//! Selection management.

use super::EditorSession;
use crate::selection::{resolve, ResolvedRange, Selection};
use crate::store::DocumentStore;

impl<S: DocumentStore> EditorSession<S> {
    /// Record the host's selection (UTF-16 code unit offsets). `anchor`
    /// may come after `focus`.
    pub fn select(&mut self, anchor: usize, focus: usize) {
        self.selection = Some(Selection::new(anchor, focus));
    }

    /// Forget the selection, so operations apply to the whole document.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Whether a non-collapsed selection is recorded.
    pub fn has_selection(&self) -> bool {
        self.selection.is_some_and(|sel| !sel.is_collapsed())
    }

    /// The range the next operation will apply to.
    pub fn resolved_range(&self) -> ResolvedRange {
        resolve(self.selection, self.tree.len())
    }
}

#[cfg(test)]
mod tests {
    use crate::selection::Scope;
    use crate::{EditorSession, TextRange};

    #[test]
    fn select_stores_selection() {
        let mut session = EditorSession::from_html("abcdefgh");
        session.select(1, 3);
        assert!(session.has_selection());
        assert_eq!(session.resolved_range().range, TextRange::new(1, 3));
    }

    #[test]
    fn backward_selection_resolves_forwards() {
        let mut session = EditorSession::from_html("abcdef");
        session.select(5, 2);
        assert_eq!(session.resolved_range().range, TextRange::new(2, 5));
    }

    #[test]
    fn collapsed_selection_targets_whole_document() {
        let mut session = EditorSession::from_html("abc");
        session.select(2, 2);
        assert!(!session.has_selection());
        let resolved = session.resolved_range();
        assert_eq!(resolved.range, TextRange::new(0, 3));
        assert_eq!(resolved.scope, Scope::Document);
    }

    #[test]
    fn clearing_selection_targets_whole_document() {
        let mut session = EditorSession::from_html("abc");
        session.select(0, 1);
        session.clear_selection();
        assert_eq!(session.resolved_range().scope, Scope::Document);
    }

    #[test]
    fn selection_counts_utf16_code_units() {
        let mut session =
            EditorSession::from_html("\u{1F4A9}\u{1F4A9}\u{1F4A9}");
        session.select(2, 4);
        assert_eq!(session.resolved_range().range, TextRange::new(2, 4));
        session.bold();
        assert_eq!(
            session.get_content_as_html(),
            "\u{1F4A9}<strong>\u{1F4A9}</strong>\u{1F4A9}"
        );
    }
}
