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

//! Reading the document back out, and accepting raw edits from the host.

use tracing::debug;

use super::base::load_markup;
use super::{EditUpdate, EditorSession};
use crate::case_transform::is_space;
use crate::export::ExportPayload;
use crate::store::DocumentStore;
use crate::text_range::utf16_len;
use crate::to_html::ToHtml;
use crate::unicode_styler::UnicodeStyler;

/// Character and word counts shown alongside the document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DocumentStats {
    /// UTF-16 code units, matching selection offsets.
    pub chars: usize,
    /// Whitespace-separated words.
    pub words: usize,
}

impl DocumentStats {
    pub fn of(text: &str) -> Self {
        Self {
            chars: utf16_len(text),
            words: text.split(is_space).filter(|w| !w.is_empty()).count(),
        }
    }
}

impl<S: DocumentStore> EditorSession<S> {
    pub fn get_content_as_html(&self) -> String {
        self.tree.to_html()
    }

    pub fn get_content_as_plain_text(&self) -> String {
        self.tree.flatten_text()
    }

    /// The text with bold and italic rendered as Unicode letterforms.
    pub fn get_content_as_styled_unicode(&self) -> String {
        UnicodeStyler::new(&self.tree).render()
    }

    pub fn stats(&self) -> DocumentStats {
        DocumentStats::of(&self.tree.flatten_text())
    }

    pub fn export(&self) -> ExportPayload {
        ExportPayload::from_tree(&self.tree)
    }

    /// Replace the document with markup the host produced by direct
    /// editing. The selection is kept as recorded; offsets past the new
    /// end are clamped when next used.
    pub fn on_raw_edit(&mut self, markup: &str) -> EditUpdate {
        self.tree = load_markup(markup);
        debug!(len = self.tree.len(), "applied raw edit");
        self.create_update()
    }
}
