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

//! An editing session over one document.
//!
//! [`EditorSession`] owns the [`crate::StyleTree`], the current selection
//! and the host's [`crate::DocumentStore`]. Every mutation persists the new
//! markup and returns an [`EditUpdate`] for the host to re-render from.

mod base;
mod content_access;
mod formatting;
mod selection;
mod transforms;

pub use base::{EditUpdate, EditorSession};
pub use content_access::DocumentStats;
