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

//! "Styled" plain text for places that cannot render markup.
//!
//! Bold and italic are emulated with the letterforms of the Mathematical
//! Alphanumeric Symbols block. Only ASCII letters have a styled form;
//! everything else passes through. Underline has no such form and is
//! dropped.

use strum_macros::EnumIter;

use crate::style::StyleSet;
use crate::style_tree::StyleTree;

/// Unicode assigns the italic small h outside the mathematical block; its
/// slot there (U+1D455) is reserved.
const ITALIC_SMALL_H: char = '\u{210E}';

/// The visual family a run's styles resolve to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter)]
pub enum GlyphFamily {
    Plain,
    Bold,
    Italic,
    BoldItalic,
}

impl GlyphFamily {
    /// Bold and italic together win over either alone.
    pub fn for_styles(styles: StyleSet) -> Self {
        match (styles.bold, styles.italic) {
            (true, true) => Self::BoldItalic,
            (true, false) => Self::Bold,
            (false, true) => Self::Italic,
            (false, false) => Self::Plain,
        }
    }

    /// Code point of the styled capital A; the 26 capitals are followed
    /// by the 26 small letters.
    fn base(self) -> Option<u32> {
        match self {
            Self::Plain => None,
            Self::Bold => Some(0x1D400),
            Self::Italic => Some(0x1D434),
            Self::BoldItalic => Some(0x1D468),
        }
    }

    /// The styled form of `c`, or `c` itself when it has none.
    pub fn glyph(self, c: char) -> char {
        let Some(base) = self.base() else {
            return c;
        };
        if self == Self::Italic && c == 'h' {
            return ITALIC_SMALL_H;
        }
        let index = match c {
            'A'..='Z' => c as u32 - 'A' as u32,
            'a'..='z' => 26 + c as u32 - 'a' as u32,
            _ => return c,
        };
        char::from_u32(base + index).unwrap_or(c)
    }

    /// The ASCII letter `c` is the styled form of, if any.
    fn letter(self, c: char) -> Option<char> {
        if self == Self::Italic && c == ITALIC_SMALL_H {
            return Some('h');
        }
        let index = (c as u32).checked_sub(self.base()?)?;
        let letter = match index {
            0..=25 => 'A' as u32 + index,
            26..=51 => 'a' as u32 + index - 26,
            _ => return None,
        };
        char::from_u32(letter)
    }
}

/// Renders a [`StyleTree`] as styled plain text.
#[derive(Debug)]
pub struct UnicodeStyler<'a> {
    tree: &'a StyleTree,
}

impl<'a> UnicodeStyler<'a> {
    pub fn new(tree: &'a StyleTree) -> Self {
        Self { tree }
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.tree.len());
        for run in self.tree.runs() {
            let family = GlyphFamily::for_styles(run.styles());
            out.extend(run.text().chars().map(|c| family.glyph(c)));
        }
        out
    }
}

/// Map styled letters back to ASCII, leaving every other character alone.
pub fn unstyle(text: &str) -> String {
    let families =
        [GlyphFamily::Bold, GlyphFamily::Italic, GlyphFamily::BoldItalic];
    text.chars()
        .map(|c| {
            families
                .iter()
                .find_map(|family| family.letter(c))
                .unwrap_or(c)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::style::Style;
    use crate::style_tree::StyledRun;

    fn styles(list: &[Style]) -> StyleSet {
        StyleSet::from_styles(list)
    }

    #[test]
    fn bold_letters_use_the_bold_table() {
        assert_eq!(GlyphFamily::Bold.glyph('A'), '\u{1D400}');
        assert_eq!(GlyphFamily::Bold.glyph('Z'), '\u{1D419}');
        assert_eq!(GlyphFamily::Bold.glyph('a'), '\u{1D41A}');
        assert_eq!(GlyphFamily::Bold.glyph('z'), '\u{1D433}');
    }

    #[test]
    fn italic_and_bold_italic_tables() {
        assert_eq!(GlyphFamily::Italic.glyph('A'), '\u{1D434}');
        assert_eq!(GlyphFamily::Italic.glyph('a'), '\u{1D44E}');
        assert_eq!(GlyphFamily::Italic.glyph('h'), '\u{210E}');
        assert_eq!(GlyphFamily::BoldItalic.glyph('A'), '\u{1D468}');
        assert_eq!(GlyphFamily::BoldItalic.glyph('z'), '\u{1D49B}');
    }

    #[test]
    fn characters_outside_the_table_pass_through() {
        for family in GlyphFamily::iter() {
            for c in ['7', ' ', '!', 'é', 'Ω', '\n'] {
                assert_eq!(family.glyph(c), c);
            }
        }
    }

    #[test]
    fn both_bold_and_italic_resolve_to_bold_italic() {
        let both = styles(&[Style::Bold, Style::Italic]);
        assert_eq!(GlyphFamily::for_styles(both), GlyphFamily::BoldItalic);
        let all = styles(&[Style::Bold, Style::Italic, Style::Underline]);
        assert_eq!(GlyphFamily::for_styles(all), GlyphFamily::BoldItalic);
    }

    #[test]
    fn underline_alone_is_plain() {
        assert_eq!(
            GlyphFamily::for_styles(styles(&[Style::Underline])),
            GlyphFamily::Plain
        );
    }

    #[test]
    fn render_styles_each_run() {
        let tree = StyleTree::from_runs([
            StyledRun::new("Hi ", styles(&[Style::Bold])),
            StyledRun::new("there", styles(&[Style::Italic])),
            StyledRun::new("!", StyleSet::new()),
            StyledRun::new("ok", styles(&[Style::Bold, Style::Italic])),
        ]);
        assert_eq!(
            UnicodeStyler::new(&tree).render(),
            "\u{1D407}\u{1D422} \u{1D461}\u{210E}\u{1D452}\u{1D45F}\u{1D452}!\
             \u{1D490}\u{1D48C}"
        );
    }

    #[test]
    fn render_of_unstyled_text_is_the_plain_text() {
        let tree = StyleTree::from_runs([
            StyledRun::new("plain ", StyleSet::new()),
            StyledRun::new("underlined", styles(&[Style::Underline])),
        ]);
        assert_eq!(UnicodeStyler::new(&tree).render(), tree.flatten_text());
    }

    #[test]
    fn unstyle_inverts_every_family() {
        let letters: String =
            ('A'..='Z').chain('a'..='z').collect::<String>() + " 42!";
        for family in GlyphFamily::iter() {
            let styled: String =
                letters.chars().map(|c| family.glyph(c)).collect();
            assert_eq!(unstyle(&styled), letters);
        }
    }
}
