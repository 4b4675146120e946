//! Shared in-memory file backing store for port-scoped test doubles.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// In-memory file storage shared across test doubles.
///
/// Tests seed files via this handle before passing `MemoryFilesystem` to
/// production code, then read the results back through the same handle.
#[derive(Clone, Debug, Default)]
pub struct TestFiles {
    pub(crate) files: Arc<Mutex<HashMap<String, String>>>,
    pub(crate) failing_writes: Arc<Mutex<HashSet<String>>>,
}

impl TestFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file into the in-memory store.
    pub fn add(&self, path: &str, content: &str) {
        self.files.lock().unwrap().insert(path.to_string(), content.to_string());
    }

    /// Current content of a file, if present.
    pub fn get(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }
}
