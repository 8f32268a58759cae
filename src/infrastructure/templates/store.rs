//! Storage backends that template loaders read from

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Read access to template sources by slash-separated relative path
pub trait TemplateStore: fmt::Debug + Send + Sync {
    /// Returns `Ok(None)` when the path does not exist in the store
    fn read(&self, path: &str) -> io::Result<Option<String>>;
}

/// Template store rooted at a directory on disk
#[derive(Debug, Clone)]
pub struct FileSystemTemplateStore {
    root: PathBuf,
}

impl FileSystemTemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TemplateStore for FileSystemTemplateStore {
    fn read(&self, path: &str) -> io::Result<Option<String>> {
        let full_path = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |acc, segment| acc.join(segment));

        match std::fs::read_to_string(&full_path) {
            Ok(content) => {
                debug!(path = %full_path.display(), "Read template");
                Ok(Some(content))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Template store held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplateStore {
    files: HashMap<String, String>,
}

impl InMemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    pub fn with(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }
}

impl TemplateStore for InMemoryTemplateStore {
    fn read(&self, path: &str) -> io::Result<Option<String>> {
        Ok(self.files.get(path).cloned())
    }
}
