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

//! A styled-text document model for a small rich text editor.
//!
//! The document is a [`StyleTree`]: a flat list of runs, each carrying a
//! [`StyleSet`] of bold, italic and underline. Markup goes in through
//! [`parse`] and comes out through [`ToHtml`]. [`EditorSession`] ties the
//! document to a selection and a [`DocumentStore`], applying inline
//! formatting and case transforms the way a toolbar would.
//!
//! All offsets are UTF-16 code units, as reported by browser selections.

mod actions;
mod case_transform;
mod editor_session;
mod export;
mod html_parse_error;
mod parser;
mod selection;
mod store;
mod style;
mod style_tree;
mod text_range;
mod to_html;
mod unicode_styler;

pub use crate::actions::EditorAction;
pub use crate::case_transform::capitalize_sentences;
pub use crate::case_transform::capitalize_words;
pub use crate::case_transform::CaseTransform;
pub use crate::editor_session::DocumentStats;
pub use crate::editor_session::EditUpdate;
pub use crate::editor_session::EditorSession;
pub use crate::export::export_file_name;
pub use crate::export::ExportFormat;
pub use crate::export::ExportPayload;
pub use crate::export::EXPORT_FILE_PREFIX;
pub use crate::html_parse_error::HtmlParseError;
pub use crate::parser::parse;
pub use crate::parser::parse_lenient;
pub use crate::selection::resolve;
pub use crate::selection::ResolvedRange;
pub use crate::selection::Scope;
pub use crate::selection::Selection;
pub use crate::store::DocumentStore;
pub use crate::store::MemoryStore;
pub use crate::store::StoreError;
pub use crate::store::STORAGE_KEY;
pub use crate::style::Style;
pub use crate::style::StyleMode;
pub use crate::style::StyleSet;
pub use crate::style_tree::ReplaceStyle;
pub use crate::style_tree::StyleTree;
pub use crate::style_tree::StyledRun;
pub use crate::text_range::TextRange;
pub use crate::to_html::ToHtml;
pub use crate::unicode_styler::unstyle;
pub use crate::unicode_styler::GlyphFamily;
pub use crate::unicode_styler::UnicodeStyler;
