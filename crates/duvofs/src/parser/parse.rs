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

use crate::html_parse_error::HtmlParseError;
use crate::style_tree::StyleTree;

/// Parse `html` into a [`StyleTree`], failing if the parser reported any
/// error.
pub fn parse(html: &str) -> Result<StyleTree, HtmlParseError> {
    match parse_lenient(html) {
        (tree, None) => Ok(tree),
        (_, Some(err)) => Err(err),
    }
}

/// Parse `html` into a [`StyleTree`], recovering from malformed markup the
/// way a browser would. Any errors the parser reported are returned next
/// to the recovered tree.
pub fn parse_lenient(html: &str) -> (StyleTree, Option<HtmlParseError>) {
    convert::HtmlParser::default().parse(html)
}

impl StyleTree {
    /// Parse markup produced by [`crate::ToHtml`] or by the host's editing
    /// surface.
    pub fn from_html(html: &str) -> Result<Self, HtmlParseError> {
        parse(html)
    }
}

mod convert {
    use once_cell::sync::Lazy;
    use regex::Regex;

    use super::super::{PaDom, PaDomCreator, PaDomNode, PaNodeContainer};
    use crate::html_parse_error::HtmlParseError;
    use crate::style::{Style, StyleSet};
    use crate::style_tree::{StyleTree, StyledRun};

    static SURROUNDING_INDENT: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(\s*\n\s*)+|(\s*\n\s*)+$").expect("valid regex")
    });
    static INTERNAL_INDENT: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\s*\n\s*").expect("valid regex"));

    /// Elements whose content is never document text.
    const SKIPPED_TAGS: &[&str] =
        &["head", "noscript", "script", "style", "template", "title"];

    /// Elements rendered on lines of their own.
    const BLOCK_TAGS: &[&str] = &[
        "blockquote", "div", "h1", "h2", "h3", "h4", "h5", "h6", "li", "p",
        "pre", "tr",
    ];

    fn is_block(tag: &str) -> bool {
        BLOCK_TAGS.contains(&tag)
    }

    /// Flattens a [`PaDom`] into styled runs.
    ///
    /// Formatting elements add their style to everything beneath them.
    /// Unknown elements are transparent. `<br>` and block boundaries become
    /// `\n`, the way `innerText` reads a contentEditable surface.
    #[derive(Default)]
    pub(super) struct HtmlParser {
        runs: Vec<StyledRun>,
        at_line_start: bool,
        pending_break: bool,
    }

    impl HtmlParser {
        pub(super) fn parse(
            mut self,
            html: &str,
        ) -> (StyleTree, Option<HtmlParseError>) {
            let (padom, error) = match PaDomCreator::parse(html) {
                Ok(padom) => (padom, None),
                Err(err) => {
                    (err.dom, Some(HtmlParseError::new(err.parse_errors)))
                }
            };
            self.at_line_start = true;
            self.convert_dom(&padom);
            (StyleTree::from_runs(self.runs), error)
        }

        fn convert_dom(&mut self, padom: &PaDom) {
            if let PaDomNode::Document(document) = padom.get_document() {
                self.convert(padom, document, StyleSet::new());
            }
        }

        /// Convert the children of `container`.
        fn convert(
            &mut self,
            padom: &PaDom,
            container: &PaNodeContainer,
            styles: StyleSet,
        ) {
            let in_block = is_block(container.tag());
            let count = container.children.len();
            for (i, handle) in container.children.iter().enumerate() {
                match padom.get_node(handle) {
                    PaDomNode::Container(child) if child.tag() == "br" => {
                        // A trailing <br> only terminates its block's line.
                        let terminates_line =
                            in_block && i > 0 && i + 1 == count;
                        if !terminates_line {
                            self.push_text("\n", styles);
                        }
                    }
                    PaDomNode::Container(child) => {
                        self.convert_container(padom, child, styles);
                    }
                    PaDomNode::Text(text) => {
                        self.push_text(&normalize_text(&text.content), styles);
                    }
                    PaDomNode::Document(_) | PaDomNode::Ignored => {}
                }
            }
        }

        fn convert_container(
            &mut self,
            padom: &PaDom,
            child: &PaNodeContainer,
            styles: StyleSet,
        ) {
            let tag = child.tag();
            if SKIPPED_TAGS.contains(&tag) {
                return;
            }

            let inner_styles = styles_for(child, styles);
            if is_block(tag) {
                self.break_line(styles);
                self.convert(padom, child, inner_styles);
                self.pending_break = true;
            } else {
                self.convert(padom, child, inner_styles);
            }
        }

        /// Start a new line unless we are already at the start of one.
        fn break_line(&mut self, styles: StyleSet) {
            self.pending_break = false;
            if !self.at_line_start {
                self.push_raw("\n", styles);
            }
        }

        fn push_text(&mut self, text: &str, styles: StyleSet) {
            if text.is_empty() {
                return;
            }
            if self.pending_break {
                self.break_line(styles);
            }
            self.push_raw(text, styles);
        }

        fn push_raw(&mut self, text: &str, styles: StyleSet) {
            self.runs.push(StyledRun::new(text, styles));
            self.at_line_start = text.ends_with('\n');
        }
    }

    /// `styles` plus whatever `node` adds through its tag or inline CSS.
    fn styles_for(node: &PaNodeContainer, styles: StyleSet) -> StyleSet {
        let mut styles = styles;
        if let Some(style) = Style::from_tag(node.tag()) {
            styles.insert(style);
        }
        if node.contains_style("font-weight", "bold")
            || node.contains_style("font-weight", "700")
        {
            styles.insert(Style::Bold);
        }
        if node.contains_style("font-style", "italic") {
            styles.insert(Style::Italic);
        }
        if node.contains_style("text-decoration", "underline")
            || node.contains_style("text-decoration-line", "underline")
        {
            styles.insert(Style::Underline);
        }
        styles
    }

    /// Collapse the newline-and-indentation of pretty-printed markup.
    fn normalize_text(text: &str) -> String {
        if !text.contains('\n') {
            return text.to_owned();
        }
        let trimmed = SURROUNDING_INDENT.replace_all(text, "");
        INTERNAL_INDENT.replace_all(&trimmed, " ").into_owned()
    }

    #[cfg(test)]
    mod tests {
        use indoc::indoc;
        use speculoos::{assert_that, AssertionFailure, Spec};

        use super::super::parse;
        use crate::style::{Style, StyleSet};
        use crate::style_tree::StyleTree;
        use crate::to_html::ToHtml;

        trait Roundtrips<T> {
            fn roundtrips(&self);
        }

        impl<'s, T> Roundtrips<T> for Spec<'s, T>
        where
            T: AsRef<str>,
        {
            fn roundtrips(&self) {
                let subject = self.subject.as_ref();
                let tree = match parse(subject) {
                    Ok(tree) => tree,
                    Err(err) => {
                        AssertionFailure::from_spec(self)
                            .with_expected(String::from("a clean parse"))
                            .with_actual(err.to_string())
                            .fail();
                        return;
                    }
                };
                tree.explicitly_assert_invariants();

                let output = tree.to_html();
                if output != subject {
                    AssertionFailure::from_spec(self)
                        .with_expected(String::from(subject))
                        .with_actual(output)
                        .fail();
                }
            }
        }

        fn tree_of(html: &str) -> StyleTree {
            super::super::parse_lenient(html).0
        }

        fn runs_of(html: &str) -> Vec<(String, StyleSet)> {
            tree_of(html)
                .runs()
                .iter()
                .map(|run| (run.text().to_owned(), run.styles()))
                .collect()
        }

        fn set(styles: &[Style]) -> StyleSet {
            StyleSet::from_styles(styles)
        }

        #[test]
        fn parse_plain_text() {
            assert_that!("some text").roundtrips();
        }

        #[test]
        fn parse_simple_tag() {
            assert_that!("<strong>sdfds</strong>").roundtrips();
        }

        #[test]
        fn parse_tag_with_surrounding_text() {
            assert_that!("before <strong>within</strong> after").roundtrips();
        }

        #[test]
        fn parse_nested_tags() {
            assert_that!("<strong>a<em>b<u>c</u></em>d</strong>e").roundtrips();
        }

        #[test]
        fn parse_br_tag() {
            assert_that!("one<br />two").roundtrips();
        }

        #[test]
        fn parse_escaped_text() {
            assert_that!("a &amp; b &lt;i&gt;").roundtrips();
        }

        #[test]
        fn presentational_tags_become_styles() {
            assert_eq!(
                runs_of("<b>x</b><i>y</i>"),
                vec![
                    ("x".to_owned(), set(&[Style::Bold])),
                    ("y".to_owned(), set(&[Style::Italic])),
                ]
            );
        }

        #[test]
        fn nesting_order_does_not_matter() {
            assert_eq!(
                runs_of("<em><strong>text</strong></em>"),
                runs_of("<strong><em>text</em></strong>")
            );
            assert_eq!(
                tree_of("<em><strong>text</strong></em>").to_html(),
                "<strong><em>text</em></strong>"
            );
        }

        #[test]
        fn adjacent_equal_runs_are_merged() {
            assert_eq!(
                runs_of("<strong>foo</strong><b>bar</b>"),
                vec![("foobar".to_owned(), set(&[Style::Bold]))]
            );
        }

        #[test]
        fn styled_spans_become_styles() {
            assert_eq!(
                runs_of(
                    "<span style=\"font-weight: bold;\">a</span>\
                     <span style=\"font-style:italic\">b</span>\
                     <span style=\"text-decoration: underline;\">c</span>\
                     <span style=\"color: red\">d</span>"
                ),
                vec![
                    ("a".to_owned(), set(&[Style::Bold])),
                    ("b".to_owned(), set(&[Style::Italic])),
                    ("c".to_owned(), set(&[Style::Underline])),
                    ("d".to_owned(), StyleSet::new()),
                ]
            );
        }

        #[test]
        fn unknown_elements_are_transparent() {
            assert_eq!(
                runs_of("<font color=\"red\">a<strong>b</strong></font>"),
                vec![
                    ("a".to_owned(), StyleSet::new()),
                    ("b".to_owned(), set(&[Style::Bold])),
                ]
            );
        }

        #[test]
        fn script_content_is_dropped() {
            assert_eq!(
                tree_of("a<script>alert(1)</script>b").flatten_text(),
                "ab"
            );
        }

        #[test]
        fn div_lines_become_newlines() {
            assert_eq!(
                tree_of("first<div>second</div><div>third</div>")
                    .flatten_text(),
                "first\nsecond\nthird"
            );
        }

        #[test]
        fn empty_div_line_is_kept() {
            assert_eq!(
                tree_of("<div>a</div><div><br></div><div>b</div>")
                    .flatten_text(),
                "a\n\nb"
            );
        }

        #[test]
        fn trailing_br_in_a_block_only_ends_the_line() {
            assert_eq!(
                tree_of("<div>a<br></div><div>b</div>").flatten_text(),
                "a\nb"
            );
        }

        #[test]
        fn text_after_block_starts_a_new_line() {
            assert_eq!(tree_of("<p>a</p>b").flatten_text(), "a\nb");
        }

        #[test]
        fn pretty_printed_markup_is_collapsed() {
            let html = indoc! {"
                <strong>
                    bold
                </strong> and
                plain
            "};
            assert_eq!(tree_of(html).flatten_text(), "bold and plain");
        }

        #[test]
        fn empty_markup_is_an_empty_tree() {
            assert!(tree_of("").is_empty());
        }

        #[test]
        fn misnested_markup_is_recovered() {
            let (tree, _) = super::super::parse_lenient("<b>1<i>2</b>3</i>");
            assert_eq!(tree.flatten_text(), "123");
            assert_eq!(tree.style_at(0), set(&[Style::Bold]));
            assert_eq!(tree.style_at(1), set(&[Style::Bold, Style::Italic]));
        }
    }
}
