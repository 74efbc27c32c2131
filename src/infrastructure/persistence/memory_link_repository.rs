//! In-memory implementation of the link repository.

use parking_lot::RwLock;
use std::collections::HashMap;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::utils::short_url::extract_code;

/// Both directions of the mapping, updated together under one lock.
#[derive(Debug, Default)]
struct Mappings {
    code_to_full: HashMap<String, String>,
    full_to_short: HashMap<String, String>,
}

impl Mappings {
    fn insert(&mut self, full_url: &str, code: &str, short_url: &str) -> Option<String> {
        self.full_to_short
            .insert(full_url.to_string(), short_url.to_string());
        let replaced = self
            .code_to_full
            .insert(code.to_string(), full_url.to_string());

        if let Some(previous) = &replaced {
            tracing::warn!(
                code,
                previous_url = %previous,
                new_url = %full_url,
                "Short code collision, previous mapping overwritten"
            );
        }

        replaced
    }
}

/// Process-local link store.
///
/// Lives for the lifetime of the process and starts empty. Reads share a read
/// lock; every write takes the write lock for the paired map update, so no
/// reader observes one direction without the other.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    mappings: RwLock<Mappings>,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LinkRepository for InMemoryLinkRepository {
    fn find_full_url(&self, code: &str) -> Option<String> {
        self.mappings.read().code_to_full.get(code).cloned()
    }

    fn find_short_url(&self, full_url: &str) -> Option<String> {
        self.mappings.read().full_to_short.get(full_url).cloned()
    }

    fn insert(&self, full_url: &str, code: &str, short_url: &str) -> Option<String> {
        self.mappings.write().insert(full_url, code, short_url)
    }

    fn insert_if_absent(&self, full_url: &str, code: &str, short_url: &str) -> Link {
        let mut mappings = self.mappings.write();

        if let Some(existing) = mappings.full_to_short.get(full_url) {
            let existing_code = extract_code(existing).to_string();
            return Link::new(existing_code, full_url, existing.clone());
        }

        mappings.insert(full_url, code, short_url);
        Link::new(code, full_url, short_url)
    }

    fn len(&self) -> usize {
        self.mappings.read().code_to_full.len()
    }
}
