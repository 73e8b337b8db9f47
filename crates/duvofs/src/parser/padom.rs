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

//! A throwaway arena DOM that html5ever builds into.
//!
//! Nodes own nothing: parents refer to children by [`PaDomHandle`] and all
//! nodes live in one list. Nodes detached during parsing stay in the list
//! but are unreachable from the document, so conversion never sees them.

use html5ever::{LocalName, Namespace, QualName};

use super::PaNodeContainer;

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// An HTML-namespaced element name.
pub(crate) fn paqual_name(local: &str) -> QualName {
    QualName::new(
        None,
        Namespace::from(HTML_NAMESPACE),
        LocalName::from(local),
    )
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PaDomHandle(pub(crate) usize);

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PaNodeText {
    pub(crate) content: String,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum PaDomNode {
    Document(PaNodeContainer),
    Container(PaNodeContainer),
    Text(PaNodeText),
    /// Comments, processing instructions and doctypes.
    Ignored,
}

impl PaDomNode {
    pub(crate) fn children(&self) -> Option<&Vec<PaDomHandle>> {
        match self {
            Self::Document(c) | Self::Container(c) => Some(&c.children),
            Self::Text(_) | Self::Ignored => None,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<PaDomHandle>> {
        match self {
            Self::Document(c) | Self::Container(c) => Some(&mut c.children),
            Self::Text(_) | Self::Ignored => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PaDom {
    pub(crate) nodes: Vec<PaDomNode>,
    /// Reported as the name of anything that is not an element.
    placeholder_name: QualName,
}

impl PaDom {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![PaDomNode::Document(PaNodeContainer {
                name: paqual_name("#document"),
                attrs: Vec::new(),
                children: Vec::new(),
            })],
            placeholder_name: paqual_name(""),
        }
    }

    pub(crate) fn document_handle(&self) -> PaDomHandle {
        PaDomHandle(0)
    }

    pub(crate) fn get_document(&self) -> &PaDomNode {
        &self.nodes[0]
    }

    pub(crate) fn get_node(&self, handle: &PaDomHandle) -> &PaDomNode {
        &self.nodes[handle.0]
    }

    pub(crate) fn get_mut_node(
        &mut self,
        handle: &PaDomHandle,
    ) -> &mut PaDomNode {
        &mut self.nodes[handle.0]
    }

    pub(crate) fn add_node(&mut self, node: PaDomNode) -> PaDomHandle {
        self.nodes.push(node);
        PaDomHandle(self.nodes.len() - 1)
    }

    pub(crate) fn name(&self, handle: &PaDomHandle) -> &QualName {
        match self.get_node(handle) {
            PaDomNode::Document(c) | PaDomNode::Container(c) => &c.name,
            PaDomNode::Text(_) | PaDomNode::Ignored => &self.placeholder_name,
        }
    }

    /// The node whose children include `handle`.
    pub(crate) fn parent_of(
        &self,
        handle: &PaDomHandle,
    ) -> Option<PaDomHandle> {
        self.nodes
            .iter()
            .position(|node| {
                node.children()
                    .is_some_and(|children| children.contains(handle))
            })
            .map(PaDomHandle)
    }

    /// Unlink `handle` from its parent, if it has one.
    pub(crate) fn detach(&mut self, handle: &PaDomHandle) {
        if let Some(parent) = self.parent_of(handle) {
            if let Some(children) = self.get_mut_node(&parent).children_mut()
            {
                children.retain(|child| child != handle);
            }
        }
    }
}

impl Default for PaDom {
    fn default() -> Self {
        Self::new()
    }
}

/// The dom html5ever produced, together with the errors it reported.
#[derive(Clone, Debug)]
pub(crate) struct PaDomCreationError {
    pub(crate) dom: PaDom,
    pub(crate) parse_errors: Vec<String>,
}

impl PaDomCreationError {
    pub(crate) fn new() -> Self {
        Self {
            dom: PaDom::new(),
            parse_errors: Vec::new(),
        }
    }
}
