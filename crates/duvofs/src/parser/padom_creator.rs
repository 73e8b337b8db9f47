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

use std::borrow::Cow;
use std::cell::{Ref, RefCell};

use html5ever::interface::NextParserState;
use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::tree_builder::{ElementFlags, NodeOrText, QuirksMode, TreeSink};
use html5ever::{parse_fragment, Attribute, QualName};

use super::{
    paqual_name, PaDom, PaDomCreationError, PaDomHandle, PaDomNode,
    PaNodeContainer, PaNodeText,
};

pub(crate) type DomCreationResult = Result<PaDom, PaDomCreationError>;

/// Builds a [`PaDom`] from html5ever's tree construction callbacks.
pub(crate) struct PaDomCreator {
    state: RefCell<PaDomCreationError>,
}

impl PaDomCreator {
    pub fn parse(html: &str) -> DomCreationResult {
        parse_fragment(
            PaDomCreator::default(),
            Default::default(),
            paqual_name(""),
            vec![],
        )
        .from_utf8()
        .one(html.as_bytes())
    }

    /// Append `child` to `parent`, merging text into a trailing text node.
    fn append_to(&self, parent: &PaDomHandle, child: NodeOrText<PaDomHandle>) {
        let dom = &mut self.state.borrow_mut().dom;
        match child {
            NodeOrText::AppendNode(child) => {
                if let Some(children) = dom.get_mut_node(parent).children_mut()
                {
                    children.push(child);
                }
            }
            NodeOrText::AppendText(tendril) => {
                let last_text = dom
                    .get_node(parent)
                    .children()
                    .and_then(|children| children.last().cloned())
                    .filter(|last| {
                        matches!(dom.get_node(last), PaDomNode::Text(_))
                    });

                if let Some(last) = last_text {
                    if let PaDomNode::Text(text) = dom.get_mut_node(&last) {
                        text.content += tendril.as_ref();
                    }
                } else {
                    let new_handle = dom.add_node(PaDomNode::Text(PaNodeText {
                        content: tendril.as_ref().to_owned(),
                    }));
                    if let Some(children) =
                        dom.get_mut_node(parent).children_mut()
                    {
                        children.push(new_handle);
                    }
                }
            }
        }
    }

    fn node_for(&self, new_node: NodeOrText<PaDomHandle>) -> PaDomHandle {
        match new_node {
            NodeOrText::AppendNode(handle) => handle,
            NodeOrText::AppendText(tendril) => {
                self.state.borrow_mut().dom.add_node(PaDomNode::Text(
                    PaNodeText {
                        content: tendril.as_ref().to_owned(),
                    },
                ))
            }
        }
    }

    fn add_ignored(&self) -> PaDomHandle {
        self.state.borrow_mut().dom.add_node(PaDomNode::Ignored)
    }
}

impl Default for PaDomCreator {
    fn default() -> Self {
        Self {
            state: RefCell::new(PaDomCreationError::new()),
        }
    }
}

impl TreeSink for PaDomCreator {
    type Handle = PaDomHandle;
    type Output = DomCreationResult;
    type ElemName<'a> = Ref<'a, QualName>;

    fn finish(self) -> Self::Output {
        let state = self.state.into_inner();
        if state.parse_errors.is_empty() {
            Ok(state.dom)
        } else {
            Err(state)
        }
    }

    fn parse_error(&self, msg: Cow<'static, str>) {
        self.state.borrow_mut().parse_errors.push(String::from(msg));
    }

    fn get_document(&self) -> Self::Handle {
        self.state.borrow().dom.document_handle()
    }

    fn elem_name<'a>(&'a self, target: &'a Self::Handle) -> Self::ElemName<'a> {
        Ref::map(self.state.borrow(), |state| state.dom.name(target))
    }

    fn create_element(
        &self,
        name: QualName,
        attrs: Vec<Attribute>,
        _flags: ElementFlags,
    ) -> Self::Handle {
        let attrs = attrs
            .into_iter()
            .map(|attr| {
                (attr.name.local.as_ref().to_owned(), attr.value.to_string())
            })
            .collect();
        self.state.borrow_mut().dom.add_node(PaDomNode::Container(
            PaNodeContainer {
                name,
                attrs,
                children: Vec::new(),
            },
        ))
    }

    fn create_comment(&self, _text: StrTendril) -> Self::Handle {
        self.add_ignored()
    }

    fn create_pi(
        &self,
        _target: StrTendril,
        _data: StrTendril,
    ) -> Self::Handle {
        self.add_ignored()
    }

    fn append(&self, parent: &Self::Handle, child: NodeOrText<Self::Handle>) {
        self.append_to(parent, child);
    }

    fn append_based_on_parent_node(
        &self,
        element: &Self::Handle,
        prev_element: &Self::Handle,
        child: NodeOrText<Self::Handle>,
    ) {
        let has_parent = self.state.borrow().dom.parent_of(element).is_some();
        if has_parent {
            self.append_before_sibling(element, child);
        } else {
            self.append_to(prev_element, child);
        }
    }

    fn append_doctype_to_document(
        &self,
        _name: StrTendril,
        _public_id: StrTendril,
        _system_id: StrTendril,
    ) {
        // Doctypes carry no text.
    }

    fn mark_script_already_started(&self, _node: &Self::Handle) {}

    fn pop(&self, _node: &Self::Handle) {}

    fn get_template_contents(&self, target: &Self::Handle) -> Self::Handle {
        target.clone()
    }

    fn same_node(&self, x: &Self::Handle, y: &Self::Handle) -> bool {
        x == y
    }

    fn set_quirks_mode(&self, _mode: QuirksMode) {}

    fn append_before_sibling(
        &self,
        sibling: &Self::Handle,
        new_node: NodeOrText<Self::Handle>,
    ) {
        let new_handle = self.node_for(new_node);
        let dom = &mut self.state.borrow_mut().dom;
        dom.detach(&new_handle);
        let Some(parent) = dom.parent_of(sibling) else {
            return;
        };
        if let Some(children) = dom.get_mut_node(&parent).children_mut() {
            let index = children
                .iter()
                .position(|child| child == sibling)
                .unwrap_or(children.len());
            children.insert(index, new_handle);
        }
    }

    fn add_attrs_if_missing(
        &self,
        target: &Self::Handle,
        attrs: Vec<Attribute>,
    ) {
        let dom = &mut self.state.borrow_mut().dom;
        if let PaDomNode::Container(node) = dom.get_mut_node(target) {
            for attr in attrs {
                let name = attr.name.local.as_ref();
                if !node.attrs.iter().any(|(existing, _)| existing == name) {
                    node.attrs.push((name.to_owned(), attr.value.to_string()));
                }
            }
        }
    }

    fn associate_with_form(
        &self,
        _target: &Self::Handle,
        _form: &Self::Handle,
        _nodes: (&Self::Handle, Option<&Self::Handle>),
    ) {
    }

    fn remove_from_parent(&self, target: &Self::Handle) {
        self.state.borrow_mut().dom.detach(target);
    }

    fn reparent_children(
        &self,
        node: &Self::Handle,
        new_parent: &Self::Handle,
    ) {
        let dom = &mut self.state.borrow_mut().dom;
        let moved = dom
            .get_mut_node(node)
            .children_mut()
            .map(std::mem::take)
            .unwrap_or_default();
        if let Some(children) = dom.get_mut_node(new_parent).children_mut() {
            children.extend(moved);
        }
    }

    fn is_mathml_annotation_xml_integration_point(
        &self,
        _handle: &Self::Handle,
    ) -> bool {
        false
    }

    fn set_current_line(&self, _line_number: u64) {}

    fn complete_script(&self, _node: &Self::Handle) -> NextParserState {
        NextParserState::Continue
    }

    fn allow_declarative_shadow_roots(
        &self,
        _intended_parent: &Self::Handle,
    ) -> bool {
        false
    }

    fn attach_declarative_shadow(
        &self,
        _location: &Self::Handle,
        _template: &Self::Handle,
        _attrs: Vec<Attribute>,
    ) -> Result<(), String> {
        Err(String::from("declarative shadow roots are not supported"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(dom: &PaDom, handle: &PaDomHandle) -> String {
        match dom.get_node(handle) {
            PaDomNode::Text(text) => text.content.clone(),
            PaDomNode::Document(c) | PaDomNode::Container(c) => c
                .children
                .iter()
                .map(|child| text_of(dom, child))
                .collect(),
            PaDomNode::Ignored => String::new(),
        }
    }

    #[test]
    fn parses_nested_formatting() {
        let dom = PaDomCreator::parse("a<strong>b<em>c</em></strong>")
            .unwrap_or_else(|e| panic!("{:?}", e.parse_errors));
        assert_eq!(text_of(&dom, &dom.document_handle()), "abc");
    }

    #[test]
    fn comments_are_ignored() {
        let dom = PaDomCreator::parse("a<!-- hidden -->b")
            .unwrap_or_else(|e| e.dom);
        assert_eq!(text_of(&dom, &dom.document_handle()), "ab");
    }

    #[test]
    fn entities_are_decoded() {
        let dom = PaDomCreator::parse("a &amp; b &lt;c&gt;")
            .unwrap_or_else(|e| panic!("{:?}", e.parse_errors));
        assert_eq!(text_of(&dom, &dom.document_handle()), "a & b <c>");
    }

    #[test]
    fn misnested_tags_keep_their_text() {
        let dom = match PaDomCreator::parse("<b>1<i>2</b>3</i>") {
            Ok(dom) => dom,
            Err(e) => {
                assert!(!e.parse_errors.is_empty());
                e.dom
            }
        };
        assert_eq!(text_of(&dom, &dom.document_handle()), "123");
    }
}
