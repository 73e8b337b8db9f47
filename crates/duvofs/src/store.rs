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

//! Key-value persistence for the serialized document.

use std::collections::HashMap;

use thiserror::Error;

/// Key the document markup is persisted under.
pub const STORAGE_KEY: &str = "duvofs_text_content";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("failed to store `{key}`: {reason}")]
pub struct StoreError {
    pub key: String,
    pub reason: String,
}

/// Opaque string storage provided by the host, such as browser local
/// storage.
pub trait DocumentStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

/// A [`DocumentStore`] kept in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `markup` as the persisted document.
    pub fn with_document(markup: &str) -> Self {
        let mut store = Self::new();
        store
            .entries
            .insert(STORAGE_KEY.to_owned(), markup.to_owned());
        store
    }
}

impl DocumentStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_returns_what_was_set() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(STORAGE_KEY), None);
        store.set(STORAGE_KEY, "<em>x</em>".to_owned()).unwrap();
        assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("<em>x</em>"));
    }

    #[test]
    fn with_document_seeds_the_storage_key() {
        let store = MemoryStore::with_document("abc");
        assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("abc"));
    }

    #[test]
    fn store_error_names_the_key() {
        let err = StoreError {
            key: STORAGE_KEY.to_owned(),
            reason: "quota exceeded".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to store `duvofs_text_content`: quota exceeded"
        );
    }
}
