use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs as async_fs;

use crate::common::error::DevupError;
use crate::domain::entities::dependency_manifest::DependencyManifest;

/// Manifest file used when nothing else is configured
pub const DEFAULT_MANIFEST_FILE: &str = "package.json";

/// Manifest store related errors
#[derive(Debug, Error)]
pub enum ManifestStoreError {
    #[error("Manifest file not found at path: {0}")]
    ManifestFileNotFound(String),

    #[error("Manifest file read failed: {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parsing failed for {path}: {source}")]
    JsonParsingFailed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Manifest validation failed for {path}: {source}")]
    ValidationFailed {
        path: String,
        #[source]
        source: DevupError,
    },
}

/// The parts of a project manifest the update workflow cares about
#[derive(Debug, Clone)]
pub struct ProjectManifest {
    /// Location the manifest was read from
    pub path: PathBuf,

    /// Value of the `name` field, if any
    pub name: Option<String>,

    /// Declared runtime dependencies, in declaration order
    pub dependencies: DependencyManifest,
}

/// Reads project manifests (`package.json`) from disk
#[derive(Debug, Default)]
pub struct ManifestStore;

impl ManifestStore {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse the manifest at `path`
    pub async fn read(&self, path: &Path) -> Result<ProjectManifest, ManifestStoreError> {
        if !path.is_file() {
            return Err(ManifestStoreError::ManifestFileNotFound(
                path.display().to_string(),
            ));
        }

        let content = async_fs::read_to_string(path)
            .await
            .map_err(|source| ManifestStoreError::ReadFailed {
                path: path.display().to_string(),
                source,
            })?;

        tracing::debug!("Read manifest from {}", path.display());
        Self::parse(&content, path)
    }

    /// Parse manifest JSON; `path` is only used for error reporting
    pub fn parse(content: &str, path: &Path) -> Result<ProjectManifest, ManifestStoreError> {
        let value: Value =
            serde_json::from_str(content).map_err(|source| ManifestStoreError::JsonParsingFailed {
                path: path.display().to_string(),
                source,
            })?;

        let validation_failed = |source: DevupError| ManifestStoreError::ValidationFailed {
            path: path.display().to_string(),
            source,
        };

        let object = value.as_object().ok_or_else(|| {
            validation_failed(DevupError::manifest_error(
                "manifest root must be an object",
                Some(path.to_path_buf()),
            ))
        })?;

        let dependencies = match object.get("dependencies") {
            Some(dependencies) => {
                DependencyManifest::from_json_value(dependencies).map_err(validation_failed)?
            }
            None => DependencyManifest::new(),
        };

        Ok(ProjectManifest {
            path: path.to_path_buf(),
            name: object
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_string),
            dependencies,
        })
    }
}
