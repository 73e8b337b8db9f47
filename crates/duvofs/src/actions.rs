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

//! Toolbar actions the host can dispatch by name.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::case_transform::CaseTransform;
use crate::style::Style;

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
pub enum EditorAction {
    Bold,
    Italic,
    Underline,
    ResetFormat,
    Uppercase,
    Lowercase,
    CapitalizeWords,
    CapitalizeSentences,
}

impl EditorAction {
    /// The action bound to a keyboard shortcut. Only Ctrl+B, Ctrl+I and
    /// Ctrl+U are bound.
    pub fn from_shortcut(ctrl: bool, key: char) -> Option<Self> {
        if !ctrl {
            return None;
        }
        match key {
            'b' => Some(Self::Bold),
            'i' => Some(Self::Italic),
            'u' => Some(Self::Underline),
            _ => None,
        }
    }

    pub fn style(self) -> Option<Style> {
        match self {
            Self::Bold => Some(Style::Bold),
            Self::Italic => Some(Style::Italic),
            Self::Underline => Some(Style::Underline),
            _ => None,
        }
    }

    pub fn case_transform(self) -> Option<CaseTransform> {
        match self {
            Self::Uppercase => Some(CaseTransform::Uppercase),
            Self::Lowercase => Some(CaseTransform::Lowercase),
            Self::CapitalizeWords => Some(CaseTransform::CapitalizeWords),
            Self::CapitalizeSentences => {
                Some(CaseTransform::CapitalizeSentences)
            }
            _ => None,
        }
    }
}
