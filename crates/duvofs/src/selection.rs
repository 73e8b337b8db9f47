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

//! Resolving host selections into document ranges.
//!
//! A missing or collapsed selection resolves to the whole document, so
//! whole-document operations are the default rather than an error path.

use crate::text_range::TextRange;

/// A selection as the host reports it. `anchor` may lie after `focus`
/// when the user selected backwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub anchor: usize,
    pub focus: usize,
}

impl Selection {
    pub fn new(anchor: usize, focus: usize) -> Self {
        Self { anchor, focus }
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }

    pub fn range(&self) -> TextRange {
        TextRange::new(self.anchor, self.focus)
    }
}

/// Whether a resolved range came from the user's selection or is the
/// whole-document default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    Selection,
    Document,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedRange {
    pub range: TextRange,
    pub scope: Scope,
}

/// Resolve `selection` against a document of `doc_len` code units.
///
/// A selection that is absent, collapsed, or collapses once clamped to the
/// document resolves to `[0, doc_len)`.
pub fn resolve(selection: Option<Selection>, doc_len: usize) -> ResolvedRange {
    let range = selection
        .filter(|sel| !sel.is_collapsed())
        .map(|sel| sel.range().clamped(doc_len))
        .filter(|range| !range.is_empty());

    match range {
        Some(range) => ResolvedRange {
            range,
            scope: Scope::Selection,
        },
        None => ResolvedRange {
            range: TextRange::whole(doc_len),
            scope: Scope::Document,
        },
    }
}
