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

use regex::Regex;

use html5ever::QualName;

use super::PaDomHandle;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PaNodeContainer {
    pub(crate) name: QualName,
    pub(crate) attrs: Vec<(String, String)>,
    pub(crate) children: Vec<PaDomHandle>,
}

impl PaNodeContainer {
    pub(crate) fn tag(&self) -> &str {
        self.name.local.as_ref()
    }

    pub(crate) fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _v)| n == name)
            .map(|(_n, v)| v.as_str())
    }

    /// Whether the inline `style` attribute sets CSS property `name` to a
    /// value containing the keyword `value`.
    pub(crate) fn contains_style(&self, name: &str, value: &str) -> bool {
        self.get_attr("style")
            .map(|v| {
                Regex::new(&format!(
                    r"(?i)(?:^|;)\s*{}\s*:[^;]*\b{}\b",
                    regex::escape(name),
                    regex::escape(value)
                ))
                .map(|re| re.is_match(v))
                .unwrap_or(false)
            })
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::paqual_name;

    fn span_with_style(style: &str) -> PaNodeContainer {
        PaNodeContainer {
            name: paqual_name("span"),
            attrs: vec![("style".into(), style.into())],
            children: Vec::new(),
        }
    }

    #[test]
    fn contains_style_matches_declarations() {
        let node = span_with_style("font-weight:bold;");
        assert!(node.contains_style("font-weight", "bold"));
        assert!(!node.contains_style("font-weight", "normal"));
    }

    #[test]
    fn contains_style_tolerates_spacing_and_missing_semicolon() {
        let node = span_with_style("color: red; Font-Style : italic");
        assert!(node.contains_style("font-style", "italic"));
    }

    #[test]
    fn contains_style_matches_one_keyword_of_several() {
        let node = span_with_style("text-decoration: underline line-through;");
        assert!(node.contains_style("text-decoration", "underline"));
    }

    #[test]
    fn contains_style_does_not_match_longer_keywords() {
        let node = span_with_style("font-weight: bolder;");
        assert!(!node.contains_style("font-weight", "bold"));
    }

    #[test]
    fn contains_style_without_style_attribute_is_false() {
        let node = PaNodeContainer {
            name: paqual_name("b"),
            attrs: Vec::new(),
            children: Vec::new(),
        };
        assert!(!node.contains_style("font-weight", "bold"));
        assert_eq!(node.tag(), "b");
    }
}
