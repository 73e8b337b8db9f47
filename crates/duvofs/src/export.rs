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

//! Payloads handed to external document generators.

use strum_macros::{AsRefStr, Display, EnumString};

use crate::style_tree::StyleTree;
use crate::to_html::ToHtml;

/// Prefix of exported file names.
pub const EXPORT_FILE_PREFIX: &str = "duvofs";

#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    Docx,
    Pdf,
}

/// Snapshot of the document for export. Generators receive these strings
/// unmodified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportPayload {
    /// A complete HTML document wrapping the markup, for DOCX generation.
    pub document_html: String,
    /// The plain text, for PDF generation. Never empty: an empty document
    /// exports as a single space.
    pub plain_text: String,
}

impl ExportPayload {
    pub fn from_tree(tree: &StyleTree) -> Self {
        let text = tree.flatten_text();
        Self {
            document_html: format!(
                "<html><body>{}</body></html>",
                tree.to_html()
            ),
            plain_text: if text.is_empty() { String::from(" ") } else { text },
        }
    }
}

/// File name for an export taken at `timestamp_millis`.
pub fn export_file_name(format: ExportFormat, timestamp_millis: u64) -> String {
    format!("{EXPORT_FILE_PREFIX}-{timestamp_millis}.{format}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Style, StyleSet};
    use crate::style_tree::StyledRun;

    #[test]
    fn payload_wraps_markup_in_a_document() {
        let tree = StyleTree::from_runs([
            StyledRun::new("Hi ", StyleSet::new()),
            StyledRun::new("there", StyleSet::new().with(Style::Bold)),
        ]);
        let payload = ExportPayload::from_tree(&tree);
        assert_eq!(
            payload.document_html,
            "<html><body>Hi <strong>there</strong></body></html>"
        );
        assert_eq!(payload.plain_text, "Hi there");
    }

    #[test]
    fn empty_document_exports_a_space() {
        let payload = ExportPayload::from_tree(&StyleTree::new());
        assert_eq!(payload.document_html, "<html><body></body></html>");
        assert_eq!(payload.plain_text, " ");
    }

    #[test]
    fn file_names_carry_timestamp_and_extension() {
        assert_eq!(
            export_file_name(ExportFormat::Docx, 1700000000000),
            "duvofs-1700000000000.docx"
        );
        assert_eq!(export_file_name(ExportFormat::Pdf, 7), "duvofs-7.pdf");
    }
}
