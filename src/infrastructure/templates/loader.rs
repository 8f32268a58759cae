//! Layered template lookup for a single generator

use serde_json::{Map, Value as JsonValue, json};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use super::{TemplateError, TemplateStore};

/// A template source resolved by a [`CodegenLoader`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTemplate {
    /// Name the binding asked for
    pub name: String,
    /// Store path that provided it
    pub path: String,
    pub content: String,
}

/// Template loader with a primary package layer and prefix-mapped shared layers.
///
/// A template name is first looked up under the generator's own package. If
/// its leading segment names a registered prefix, the shared layer mapped to
/// that prefix is consulted next, so a generator may override any shared
/// template by shipping a file at the same relative path.
#[derive(Clone)]
pub struct CodegenLoader {
    store: Arc<dyn TemplateStore>,
    package: String,
    prefixes: Vec<(String, String)>,
}

impl CodegenLoader {
    pub fn new(store: Arc<dyn TemplateStore>, package: impl Into<String>) -> Self {
        Self {
            store,
            package: package.into(),
            prefixes: Vec::new(),
        }
    }

    /// Map names starting with `prefix/` onto a shared template directory
    pub fn with_prefix(mut self, prefix: impl Into<String>, path: impl Into<String>) -> Self {
        self.prefixes.push((prefix.into(), path.into()));
        self
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Store paths consulted for `name`, highest priority first
    pub fn candidates(&self, name: &str) -> Vec<String> {
        let mut candidates = vec![join(&self.package, name)];
        if let Some((head, rest)) = name.split_once('/') {
            candidates.extend(
                self.prefixes
                    .iter()
                    .filter(|(prefix, _)| prefix == head)
                    .map(|(_, path)| join(path, rest)),
            );
        }
        candidates
    }

    pub fn load(&self, name: &str) -> Result<LoadedTemplate, TemplateError> {
        let candidates = self.candidates(name);
        for path in &candidates {
            if let Some(content) = self.store.read(path)? {
                debug!(template = name, path = %path, "Resolved template");
                return Ok(LoadedTemplate {
                    name: name.to_string(),
                    path: path.clone(),
                    content,
                });
            }
        }
        Err(TemplateError::not_found(name, candidates))
    }

    /// Layer layout for plan summaries
    pub fn layout(&self) -> JsonValue {
        let prefixes: Map<String, JsonValue> = self
            .prefixes
            .iter()
            .map(|(prefix, path)| (prefix.clone(), json!(path)))
            .collect();
        json!({
            "package": self.package,
            "prefixes": prefixes,
        })
    }
}

impl fmt::Debug for CodegenLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodegenLoader")
            .field("package", &self.package)
            .field("prefixes", &self.prefixes)
            .finish()
    }
}

fn join(base: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", base.trim_end_matches('/'), name)
    }
}
