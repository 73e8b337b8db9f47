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

//! Pure case transforms over text.
//!
//! A "word character" is an ASCII letter, digit or underscore. Letters
//! outside ASCII are not word characters, so they neither start a word
//! nor get capitalized.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// A string-to-string case transform offered to the user.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum CaseTransform {
    Uppercase,
    Lowercase,
    CapitalizeWords,
    CapitalizeSentences,
}

impl CaseTransform {
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Uppercase => text.to_uppercase(),
            Self::Lowercase => text.to_lowercase(),
            Self::CapitalizeWords => capitalize_words(text),
            Self::CapitalizeSentences => capitalize_sentences(text),
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Whitespace as the host's regular expressions see it: Unicode space
/// separators plus the line terminators, tab, vertical tab, form feed and
/// the byte order mark. Unlike [`char::is_whitespace`], U+0085 is not
/// included.
pub(crate) fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{B}' | '\u{C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn is_sentence_end(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Lowercase `text`, then uppercase the first character of every maximal
/// run of word characters.
pub fn capitalize_words(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut in_word = false;
    for c in lowered.chars() {
        let word = is_word_char(c);
        if word && !in_word {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        in_word = word;
    }
    out
}

/// Lowercase `text`, then uppercase the first word character of the text
/// and the first word character after each `.`, `!` or `?`. Only
/// whitespace may sit between the start (or the punctuation) and that
/// character.
pub fn capitalize_sentences(text: &str) -> String {
    #[derive(PartialEq)]
    enum State {
        /// Looking for a sentence's first word character.
        SentenceStart,
        InSentence,
    }

    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut state = State::SentenceStart;
    for c in lowered.chars() {
        if state == State::SentenceStart && is_space(c) {
            out.push(c);
            continue;
        }
        if state == State::SentenceStart && is_word_char(c) {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        state = if is_sentence_end(c) {
            State::SentenceStart
        } else {
            State::InSentence
        };
    }
    out
}
