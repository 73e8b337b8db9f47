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

//! The document model: an ordered list of styled runs.
//!
//! Nested markup such as `<strong><em>x</em></strong>` is flattened into
//! runs that each carry the full [`StyleSet`] active on their text. Nesting
//! is only reconstructed when serializing, see [`crate::to_html`].
//!
//! Two invariants hold after every public mutation:
//! - no run is empty;
//! - no two adjacent runs have equal style sets.

use crate::style::{Style, StyleMode, StyleSet};
use crate::text_range::{utf16_len, utf16_to_byte, TextRange};

/// A non-empty piece of text sharing one [`StyleSet`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyledRun {
    text: String,
    styles: StyleSet,
}

impl StyledRun {
    pub fn new(text: impl Into<String>, styles: StyleSet) -> Self {
        Self {
            text: text.into(),
            styles,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn styles(&self) -> StyleSet {
        self.styles
    }

    /// Length in UTF-16 code units.
    pub fn len(&self) -> usize {
        utf16_len(&self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// What style a run inserted by [`StyleTree::replace_range`] carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplaceStyle {
    /// The new run is unstyled.
    Empty,
    /// The new run gets the styles shared by every run the range covered.
    KeepCommon,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleTree {
    runs: Vec<StyledRun>,
}

impl StyleTree {
    /// An empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from arbitrary runs, dropping empty ones and merging
    /// neighbours with equal styles.
    pub fn from_runs(runs: impl IntoIterator<Item = StyledRun>) -> Self {
        let mut tree = Self {
            runs: runs.into_iter().collect(),
        };
        tree.normalize();
        tree
    }

    /// A document holding `text` without any style.
    pub fn from_plain_text(text: &str) -> Self {
        Self::from_runs([StyledRun::new(text, StyleSet::new())])
    }

    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    /// Document length in UTF-16 code units.
    pub fn len(&self) -> usize {
        self.runs.iter().map(StyledRun::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// The document text with all styling removed.
    pub fn flatten_text(&self) -> String {
        self.runs.iter().map(StyledRun::text).collect()
    }

    /// The text within `range`, clamped to the document.
    pub fn text_in(&self, range: TextRange) -> String {
        let text = self.flatten_text();
        let range = range.clamped(utf16_len(&text));
        let start = utf16_to_byte(&text, range.start());
        let end = utf16_to_byte(&text, range.end());
        text[start..end].to_owned()
    }

    /// Styles of the run containing `offset`. At (or past) the end of the
    /// document this is the style of the last run.
    pub fn style_at(&self, offset: usize) -> StyleSet {
        let mut pos = 0;
        for run in &self.runs {
            pos += run.len();
            if offset < pos {
                return run.styles;
            }
        }
        self.runs.last().map(|run| run.styles).unwrap_or_default()
    }

    /// The styles shared by every run overlapping `range`. An empty range
    /// reports the style at its position.
    pub fn common_style(&self, range: TextRange) -> StyleSet {
        let range = range.clamped(self.len());
        if range.is_empty() {
            return self.style_at(range.start());
        }

        let mut common: Option<StyleSet> = None;
        let mut pos = 0;
        for run in &self.runs {
            let run_start = pos;
            pos += run.len();
            if run_start < range.end() && pos > range.start() {
                common = Some(match common {
                    Some(c) => c.intersection(&run.styles),
                    None => run.styles,
                });
            }
        }
        common.unwrap_or_default()
    }

    /// Add or remove `style` over `range`.
    ///
    /// Runs straddling the range ends are split so the range falls on run
    /// boundaries, the covered runs are updated according to `mode`, then
    /// equal neighbours are merged again. [`StyleMode::Toggle`] is
    /// all-or-nothing: the style is removed only if every covered run
    /// already has it, otherwise the whole range gains it.
    pub fn apply_style(
        &mut self,
        range: TextRange,
        style: Style,
        mode: StyleMode,
    ) {
        let range = range.clamped(self.len());
        if range.is_empty() {
            return;
        }

        let first = self.split_at(range.start());
        let last = self.split_at(range.end());
        let covered = &mut self.runs[first..last];
        if covered.is_empty() {
            return;
        }

        let on = match mode {
            StyleMode::Set => true,
            StyleMode::Clear => false,
            StyleMode::Toggle => {
                !covered.iter().all(|run| run.styles.contains(style))
            }
        };
        for run in covered.iter_mut() {
            run.styles.set(style, on);
        }

        self.normalize();
    }

    /// Replace the text in `range` with `new_text` as a single run.
    ///
    /// An empty range inserts. Returns the range the new text occupies.
    pub fn replace_range(
        &mut self,
        range: TextRange,
        new_text: &str,
        style: ReplaceStyle,
    ) -> TextRange {
        let range = range.clamped(self.len());
        let styles = match style {
            ReplaceStyle::Empty => StyleSet::new(),
            ReplaceStyle::KeepCommon => self.common_style(range),
        };

        let first = self.split_at(range.start());
        let last = self.split_at(range.end());
        let start: usize = self.runs[..first].iter().map(StyledRun::len).sum();

        let replacement = (!new_text.is_empty())
            .then(|| StyledRun::new(new_text, styles));
        self.runs.splice(first..last, replacement);
        self.normalize();

        TextRange::new(start, start + utf16_len(new_text))
    }

    /// Split the run containing `offset` so that a run starts exactly
    /// there, and return that run's index (`runs.len()` at the end).
    fn split_at(&mut self, offset: usize) -> usize {
        let mut pos = 0;
        for i in 0..self.runs.len() {
            if offset == pos {
                return i;
            }
            let run_len = self.runs[i].len();
            if offset < pos + run_len {
                let byte = utf16_to_byte(&self.runs[i].text, offset - pos);
                if byte == 0 {
                    return i;
                }
                let tail = self.runs[i].text.split_off(byte);
                let styles = self.runs[i].styles;
                self.runs.insert(i + 1, StyledRun::new(tail, styles));
                return i + 1;
            }
            pos += run_len;
        }
        self.runs.len()
    }

    /// Drop empty runs and merge adjacent runs with equal styles.
    fn normalize(&mut self) {
        let mut merged: Vec<StyledRun> = Vec::with_capacity(self.runs.len());
        for run in self.runs.drain(..) {
            if run.text.is_empty() {
                continue;
            }
            match merged.last_mut() {
                Some(prev) if prev.styles == run.styles => {
                    prev.text.push_str(&run.text);
                }
                _ => merged.push(run),
            }
        }
        self.runs = merged;
        self.assert_invariants();
    }

    fn assert_invariants(&self) {
        cfg_if::cfg_if! {
            if #[cfg(feature = "assert-invariants")] {
                self.explicitly_assert_invariants();
            }
        }
    }

    /// Panic if a normalization invariant is broken.
    pub fn explicitly_assert_invariants(&self) {
        for run in &self.runs {
            assert!(!run.is_empty(), "empty run in {}", self.to_tree());
        }
        for pair in self.runs.windows(2) {
            assert_ne!(
                pair[0].styles,
                pair[1].styles,
                "adjacent runs share a style set in {}",
                self.to_tree()
            );
        }
    }

    /// A line-per-run dump of the document, for debugging.
    pub fn to_tree(&self) -> String {
        let mut out = String::from("\n");
        let count = self.runs.len();
        for (i, run) in self.runs.iter().enumerate() {
            let branch = if i + 1 == count { "└>" } else { "├>" };
            out.push_str(&format!(
                "{branch}\"{}\" {}\n",
                run.text.escape_debug(),
                run.styles
            ));
        }
        out
    }
}
