//! Filesystem-based output service implementation

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::generation::Artifact;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to set permissions on {}: {source}", path.display())]
    Permissions {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Destination for rendered artifacts
#[async_trait]
pub trait OutputService: Send + Sync {
    /// Write artifacts, returning the paths written
    async fn write_artifacts(&self, artifacts: &[Artifact]) -> Result<Vec<PathBuf>, OutputError>;

    async fn ensure_directory(&self, path: &Path) -> Result<(), OutputError>;
}

/// Output service that writes artifacts under a root directory
pub struct FileSystemOutputService {
    root: PathBuf,
}

impl FileSystemOutputService {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl OutputService for FileSystemOutputService {
    async fn write_artifacts(&self, artifacts: &[Artifact]) -> Result<Vec<PathBuf>, OutputError> {
        let mut written = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            let path = self.root.join(&artifact.path);

            if let Some(parent) = path.parent() {
                self.ensure_directory(parent).await?;
            }

            let write_error = |source| OutputError::Write {
                path: path.clone(),
                source,
            };
            let mut file = fs::File::create(&path).await.map_err(write_error)?;
            file.write_all(artifact.content.as_bytes())
                .await
                .map_err(write_error)?;
            file.flush().await.map_err(write_error)?;

            // Set permissions if specified (Unix only)
            #[cfg(unix)]
            if let Some(mode) = artifact.permissions {
                use std::os::unix::fs::PermissionsExt;
                fs::set_permissions(&path, std::fs::Permissions::from_mode(mode))
                    .await
                    .map_err(|source| OutputError::Permissions {
                        path: path.clone(),
                        source,
                    })?;
            }

            debug!(path = %path.display(), "Wrote artifact");
            written.push(path);
        }

        info!(
            root = %self.root.display(),
            files = written.len(),
            "Wrote generated files"
        );
        Ok(written)
    }

    async fn ensure_directory(&self, path: &Path) -> Result<(), OutputError> {
        fs::create_dir_all(path)
            .await
            .map_err(|source| OutputError::CreateDirectory {
                path: path.to_path_buf(),
                source,
            })
    }
}
