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

//! Serializing a [`StyleTree`] to markup.
//!
//! Each style maps to one tag and tags always nest in canonical order:
//! `<strong>` outside `<em>` outside `<u>`. A tag stays open across
//! consecutive runs for as long as it remains part of the open prefix, so
//! the output is deterministic for a given tree.

use crate::style::Style;
use crate::style_tree::StyleTree;

pub trait ToHtml {
    fn to_html(&self) -> String;
}

impl ToHtml for StyleTree {
    fn to_html(&self) -> String {
        let mut html = String::new();
        let mut open_tags: Vec<Style> = Vec::new();

        for run in self.runs() {
            let desired: Vec<Style> = run.styles().iter().collect();

            // Keep the longest open prefix that the new run also starts
            // with, close everything above it.
            let keep = open_tags
                .iter()
                .zip(&desired)
                .take_while(|(open, want)| open == want)
                .count();
            close_tags(&mut html, &mut open_tags, keep);

            for style in &desired[keep..] {
                html.push('<');
                html.push_str(style.tag());
                html.push('>');
                open_tags.push(*style);
            }

            emit_text(&mut html, run.text());
        }

        close_tags(&mut html, &mut open_tags, 0);
        html
    }
}

/// Close open tags, innermost first, until only `keep` remain.
fn close_tags(html: &mut String, open_tags: &mut Vec<Style>, keep: usize) {
    while open_tags.len() > keep {
        if let Some(style) = open_tags.pop() {
            html.push_str("</");
            html.push_str(style.tag());
            html.push('>');
        }
    }
}

/// Escape `text`, writing line breaks as `<br />`.
fn emit_text(html: &mut String, text: &str) {
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            html.push_str("<br />");
        }
        html.push_str(&html_escape::encode_text(line));
    }
}
