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

//! Parsing persisted or host-edited markup into a [`crate::StyleTree`].

mod padom;
mod padom_creator;
mod panode_container;
mod parse;

pub(crate) use padom::{
    paqual_name, PaDom, PaDomCreationError, PaDomHandle, PaDomNode,
    PaNodeText,
};
pub(crate) use padom_creator::PaDomCreator;
pub(crate) use panode_container::PaNodeContainer;

pub use parse::{parse, parse_lenient};
