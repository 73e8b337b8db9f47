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

//! Character-level styles and sets of them.

use std::fmt;

use strum::IntoEnumIterator;
use strum_macros::{
    AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
};

/// A character-level style.
///
/// Declaration order is the canonical nesting order used when a set of
/// styles is serialized to markup: bold outermost, underline innermost.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Style {
    Bold,
    Italic,
    Underline,
}

impl Style {
    /// The tag this style serializes to.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Bold => "strong",
            Self::Italic => "em",
            Self::Underline => "u",
        }
    }

    /// The style a formatting tag stands for. Both the semantic tags we
    /// write and the presentational ones browsers emit are accepted.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "b" | "strong" => Some(Self::Bold),
            "i" | "em" => Some(Self::Italic),
            "u" => Some(Self::Underline),
            _ => None,
        }
    }
}

/// How [`crate::StyleTree::apply_style`] changes a style over a range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleMode {
    /// Remove the style if every run in the range has it, otherwise add it
    /// to every run.
    Toggle,
    Set,
    Clear,
}

/// The set of styles active on a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleSet {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl StyleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_styles(styles: &[Style]) -> Self {
        styles.iter().fold(Self::new(), |set, style| set.with(*style))
    }

    pub fn contains(&self, style: Style) -> bool {
        match style {
            Style::Bold => self.bold,
            Style::Italic => self.italic,
            Style::Underline => self.underline,
        }
    }

    pub fn set(&mut self, style: Style, on: bool) {
        match style {
            Style::Bold => self.bold = on,
            Style::Italic => self.italic = on,
            Style::Underline => self.underline = on,
        }
    }

    pub fn insert(&mut self, style: Style) {
        self.set(style, true);
    }

    pub fn remove(&mut self, style: Style) {
        self.set(style, false);
    }

    #[must_use]
    pub fn with(mut self, style: Style) -> Self {
        self.insert(style);
        self
    }

    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self {
            bold: self.bold && other.bold,
            italic: self.italic && other.italic,
            underline: self.underline && other.underline,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.bold || self.italic || self.underline)
    }

    /// The active styles in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Style> + '_ {
        Style::iter().filter(|style| self.contains(*style))
    }
}

impl fmt::Display for StyleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&'static str> =
            self.iter().map(<&'static str>::from).collect();
        write!(f, "[{}]", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn styles_iterate_in_canonical_order() {
        let set = StyleSet::from_styles(&[
            Style::Underline,
            Style::Bold,
            Style::Italic,
        ]);
        let order: Vec<Style> = set.iter().collect();
        assert_eq!(order, vec![Style::Bold, Style::Italic, Style::Underline]);
    }

    #[test]
    fn equality_is_set_equality() {
        let a = StyleSet::from_styles(&[Style::Bold, Style::Italic]);
        let b = StyleSet::from_styles(&[Style::Italic, Style::Bold]);
        assert_eq!(a, b);
        assert_ne!(a, StyleSet::new().with(Style::Bold));
    }

    #[test]
    fn presentational_and_semantic_tags_map_to_the_same_style() {
        assert_eq!(Style::from_tag("b"), Some(Style::Bold));
        assert_eq!(Style::from_tag("STRONG"), Some(Style::Bold));
        assert_eq!(Style::from_tag("i"), Some(Style::Italic));
        assert_eq!(Style::from_tag("em"), Some(Style::Italic));
        assert_eq!(Style::from_tag("u"), Some(Style::Underline));
        assert_eq!(Style::from_tag("span"), None);
    }

    #[test]
    fn style_names_round_trip_through_strum() {
        assert_eq!(Style::Underline.to_string(), "underline");
        assert_eq!(Style::from_str("italic"), Ok(Style::Italic));
    }

    #[test]
    fn intersection_keeps_shared_styles() {
        let a = StyleSet::from_styles(&[Style::Bold, Style::Underline]);
        let b = StyleSet::from_styles(&[Style::Bold, Style::Italic]);
        assert_eq!(a.intersection(&b), StyleSet::new().with(Style::Bold));
    }

    #[test]
    fn display_lists_styles() {
        let set = StyleSet::from_styles(&[Style::Italic, Style::Bold]);
        assert_eq!(set.to_string(), "[bold, italic]");
        assert_eq!(StyleSet::new().to_string(), "[]");
    }

    #[test]
    fn display_lists_every_style_in_canonical_order() {
        let set = StyleSet::from_styles(&[
            Style::Underline,
            Style::Italic,
            Style::Bold,
        ]);
        assert_eq!(set.to_string(), "[bold, italic, underline]");
        assert_eq!(<&'static str>::from(Style::Underline), "underline");
    }
}
