use std::collections::HashSet;

use crate::parse::Document;

/// Mints `prefix-00001` style identifiers that do not collide with any id
/// already recorded. Owned by the caller; nothing is shared between allocators.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    used: HashSet<String>,
    width: usize,
}

impl Default for IdAllocator {
    fn default() -> Self {
        IdAllocator {
            used: HashSet::new(),
            width: 5,
        }
    }
}

impl IdAllocator {
    pub fn new() -> IdAllocator {
        IdAllocator::default()
    }

    pub fn from_document(document: &Document) -> IdAllocator {
        let mut allocator = IdAllocator::new();
        for id in document.ids() {
            allocator.reserve(id);
        }
        allocator
    }

    /// Zero-padding width of the numeric suffix.
    pub fn with_width(mut self, width: usize) -> IdAllocator {
        self.width = width;
        self
    }

    /// Marks `id` as taken. Returns false if it already was.
    pub fn reserve(&mut self, id: impl Into<String>) -> bool {
        self.used.insert(id.into())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.used.contains(id)
    }

    pub fn allocate(&mut self, prefix: &str) -> String {
        let mut number = 1usize;
        loop {
            let candidate = format!("{}-{:0width$}", prefix, number, width = self.width);
            if !self.used.contains(&candidate) {
                self.used.insert(candidate.clone());
                return candidate;
            }
            number += 1;
        }
    }
}
