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

//! Case transforms applied to the document.

use tracing::debug;

use super::{EditUpdate, EditorSession};
use crate::case_transform::CaseTransform;
use crate::selection::{Scope, Selection};
use crate::store::DocumentStore;
use crate::style_tree::ReplaceStyle;

impl<S: DocumentStore> EditorSession<S> {
    /// Apply `transform` to the selected text, or to the whole document
    /// when nothing is selected.
    ///
    /// Either way the transformed text replaces the original as a single
    /// unstyled run: formatting inside the range is lost. Text outside a
    /// selection keeps its styles. A selection is moved to cover the
    /// replacement; a whole-document transform clears it.
    pub fn transform(&mut self, transform: CaseTransform) -> EditUpdate {
        let resolved = self.resolved_range();
        debug!(
            %transform,
            start = resolved.range.start(),
            end = resolved.range.end(),
            scope = ?resolved.scope,
            "transform text"
        );

        let original = self.tree.text_in(resolved.range);
        let replacement = transform.apply(&original);
        let inserted = self.tree.replace_range(
            resolved.range,
            &replacement,
            ReplaceStyle::Empty,
        );

        self.selection = match resolved.scope {
            Scope::Selection => {
                Some(Selection::new(inserted.start(), inserted.end()))
            }
            Scope::Document => None,
        };
        self.create_update()
    }

    pub fn uppercase(&mut self) -> EditUpdate {
        self.transform(CaseTransform::Uppercase)
    }

    pub fn lowercase(&mut self) -> EditUpdate {
        self.transform(CaseTransform::Lowercase)
    }

    pub fn capitalize_words(&mut self) -> EditUpdate {
        self.transform(CaseTransform::CapitalizeWords)
    }

    pub fn capitalize_sentences(&mut self) -> EditUpdate {
        self.transform(CaseTransform::CapitalizeSentences)
    }
}
