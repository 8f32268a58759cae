//! Core types for the generation domain

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Supported implementation languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Java,
    Python,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::Python => "python",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = crate::generation::GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "java" => Ok(Language::Java),
            "python" | "py" => Ok(Language::Python),
            _ => Err(crate::generation::GenerationError::InvalidLanguage(
                s.to_string(),
            )),
        }
    }
}

/// Kind of file a template produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "language")]
pub enum FileKind {
    Shell,
    Autoconf,
    Automake,
    Specfile,
    Source(Language),
}

/// Binds a source template to an output file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateBinding {
    pub template: String,
    pub filename: String,
    pub kind: FileKind,
    pub executable: bool,
}

impl TemplateBinding {
    pub fn new(template: impl Into<String>, filename: impl Into<String>, kind: FileKind) -> Self {
        Self {
            template: template.into(),
            filename: filename.into(),
            kind,
            executable: false,
        }
    }

    /// Source file in the given language
    pub fn source(
        language: Language,
        template: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self::new(template, filename, FileKind::Source(language))
    }

    /// Shell script named after the template, always executable
    pub fn shell(template: impl Into<String>) -> Self {
        let template = template.into();
        let filename = basename(&template);
        Self::new(template, filename, FileKind::Shell).executable()
    }

    pub fn autoconf(template: impl Into<String>) -> Self {
        let template = template.into();
        let filename = basename(&template);
        Self::new(template, filename, FileKind::Autoconf)
    }

    pub fn automake(template: impl Into<String>) -> Self {
        let template = template.into();
        let filename = basename(&template);
        Self::new(template, filename, FileKind::Automake)
    }

    pub fn specfile(template: impl Into<String>, filename: impl Into<String>) -> Self {
        Self::new(template, filename, FileKind::Specfile)
    }

    pub fn executable(mut self) -> Self {
        self.executable = true;
        self
    }
}

fn basename(template: &str) -> String {
    template
        .rsplit('/')
        .next()
        .unwrap_or(template)
        .to_string()
}

/// Rendered output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
    pub permissions: Option<u32>,
}
