//! Output service implementations

pub mod filesystem_output;

pub use filesystem_output::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::Artifact;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_filesystem_output_write_artifacts() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_service = FileSystemOutputService::new(temp_dir.path());

        let artifacts = vec![
            Artifact {
                path: PathBuf::from("src/org/demo/Echo.java"),
                content: "public class Echo {}".to_string(),
                permissions: None,
            },
            Artifact {
                path: PathBuf::from("configure.ac"),
                content: "AC_INIT(echo, 1.0.0)".to_string(),
                permissions: None,
            },
        ];

        let written = output_service.write_artifacts(&artifacts).await.unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(written[0], temp_dir.path().join("src/org/demo/Echo.java"));

        let content = std::fs::read_to_string(temp_dir.path().join("src/org/demo/Echo.java"))
            .expect("Failed to read Echo.java");
        assert_eq!(content, "public class Echo {}");
        assert!(temp_dir.path().join("configure.ac").exists());
    }

    #[tokio::test]
    async fn test_filesystem_output_ensure_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_service = FileSystemOutputService::new(temp_dir.path());

        let nested_path = temp_dir.path().join("deeply/nested/directory");
        output_service.ensure_directory(&nested_path).await.unwrap();

        assert!(nested_path.exists());
        assert!(nested_path.is_dir());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_filesystem_output_executable_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_service = FileSystemOutputService::new(temp_dir.path());

        let artifacts = vec![Artifact {
            path: PathBuf::from("reconf"),
            content: "#!/bin/sh\nautoreconf -i\n".to_string(),
            permissions: Some(0o755),
        }];
        output_service.write_artifacts(&artifacts).await.unwrap();

        let metadata = std::fs::metadata(temp_dir.path().join("reconf")).unwrap();
        assert_eq!(metadata.permissions().mode() & 0o777, 0o755);
    }
}
