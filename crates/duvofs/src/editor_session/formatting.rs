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

//! Inline formatting: bold, italic, underline, and resetting it all.

use tracing::debug;

use super::{EditUpdate, EditorSession};
use crate::store::DocumentStore;
use crate::style::{Style, StyleMode};
use crate::style_tree::StyleTree;

impl<S: DocumentStore> EditorSession<S> {
    /// Toggle `style` over the selection, or over the whole document when
    /// nothing is selected.
    ///
    /// The toggle is all-or-nothing: if every character in the range
    /// already has `style` it is removed everywhere, otherwise it is added
    /// everywhere.
    pub fn toggle_style(&mut self, style: Style) -> EditUpdate {
        let resolved = self.resolved_range();
        debug!(
            %style,
            start = resolved.range.start(),
            end = resolved.range.end(),
            scope = ?resolved.scope,
            "toggle style"
        );
        self.tree
            .apply_style(resolved.range, style, StyleMode::Toggle);
        self.create_update()
    }

    pub fn bold(&mut self) -> EditUpdate {
        self.toggle_style(Style::Bold)
    }

    pub fn italic(&mut self) -> EditUpdate {
        self.toggle_style(Style::Italic)
    }

    pub fn underline(&mut self) -> EditUpdate {
        self.toggle_style(Style::Underline)
    }

    /// Drop all formatting from the whole document, whatever is selected.
    pub fn clear_formatting(&mut self) -> EditUpdate {
        debug!("clear formatting");
        self.tree = StyleTree::from_plain_text(&self.tree.flatten_text());
        self.selection = None;
        self.create_update()
    }
}
