//! Template root directory resolution

use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use super::TemplateError;

/// Environment variable naming the template root
pub const TEMPLATE_DIR_ENV: &str = "COMPONENTGEN_TEMPLATE_DIR";

/// Trait for reading template configuration, allowing dependency injection for testing
pub trait TemplateConfigReader {
    fn get_template_dir(&self) -> Option<String>;
}

/// Production implementation that reads from environment variables
pub struct EnvTemplateConfigReader;

impl TemplateConfigReader for EnvTemplateConfigReader {
    fn get_template_dir(&self) -> Option<String> {
        std::env::var(TEMPLATE_DIR_ENV).ok()
    }
}

/// Mock implementation for testing with controlled values
#[cfg(test)]
pub struct MockTemplateConfigReader(Option<String>);

#[cfg(test)]
impl MockTemplateConfigReader {
    pub fn new(template_dir: Option<String>) -> Self {
        Self(template_dir)
    }
}

#[cfg(test)]
impl TemplateConfigReader for MockTemplateConfigReader {
    fn get_template_dir(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Root directory holding every generator's template package
#[derive(Debug, Clone)]
pub struct TemplateDir {
    root: PathBuf,
}

impl TemplateDir {
    /// Resolve the template root.
    ///
    /// Checks the explicit directory, then `COMPONENTGEN_TEMPLATE_DIR`, then the
    /// user configuration directory, then `./templates`.
    pub fn discover(custom_dir: Option<&Path>) -> Result<Self, TemplateError> {
        Self::discover_with_config(custom_dir, &EnvTemplateConfigReader)
    }

    pub fn discover_with_config(
        custom_dir: Option<&Path>,
        config_reader: &dyn TemplateConfigReader,
    ) -> Result<Self, TemplateError> {
        if let Some(dir) = custom_dir {
            debug!("Using custom template directory: {}", dir.display());
            if !dir.is_dir() {
                error!("Custom template directory not found: {}", dir.display());
                return Err(TemplateError::DirectoryNotFound(dir.to_path_buf()));
            }
            return Ok(Self {
                root: dir.to_path_buf(),
            });
        }

        let locations = Self::search_locations(config_reader);
        match locations.iter().find(|location| location.is_dir()) {
            Some(root) => {
                info!("Using template directory: {}", root.display());
                Ok(Self { root: root.clone() })
            }
            None => {
                error!("Could not find template directory in any standard location");
                let fallback = locations
                    .last()
                    .cloned()
                    .unwrap_or_else(|| PathBuf::from("templates"));
                Err(TemplateError::DirectoryNotFound(fallback))
            }
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn search_locations(config_reader: &dyn TemplateConfigReader) -> Vec<PathBuf> {
        let mut locations = Vec::new();

        if let Some(dir) = config_reader.get_template_dir() {
            locations.push(PathBuf::from(dir));
        }

        if let Some(config_dir) = dirs::config_dir() {
            locations.push(config_dir.join("componentgen").join("templates"));
        }

        if let Ok(current_dir) = std::env::current_dir() {
            locations.push(current_dir.join("templates"));
        }

        locations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_directory_wins() {
        let temp_dir = TempDir::new().unwrap();
        let dir = TemplateDir::discover_with_config(
            Some(temp_dir.path()),
            &MockTemplateConfigReader::new(Some("/does/not/matter".to_string())),
        )
        .unwrap();
        assert_eq!(dir.root(), temp_dir.path());
    }

    #[test]
    fn test_missing_explicit_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");
        let err = TemplateDir::discover_with_config(
            Some(&missing),
            &MockTemplateConfigReader::new(None),
        )
        .unwrap_err();
        assert!(matches!(err, TemplateError::DirectoryNotFound(path) if path == missing));
    }

    #[test]
    fn test_environment_directory_used() {
        let temp_dir = TempDir::new().unwrap();
        let reader =
            MockTemplateConfigReader::new(Some(temp_dir.path().to_string_lossy().into_owned()));
        let dir = TemplateDir::discover_with_config(None, &reader).unwrap();
        assert_eq!(dir.root(), temp_dir.path());
    }
}
