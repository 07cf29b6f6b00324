pub mod init;
pub mod list;
pub mod update;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::application::services::dependency_filter::DependencyFilter;
use crate::domain::entities::workspace::Workspace;
use crate::infrastructure::filesystem::config_store::{ConfigStore, DevupConfig};
use crate::infrastructure::filesystem::manifest_store::{ManifestStore, ProjectManifest};

/// Configuration, manifest and workspace of the project in the current directory
pub(crate) struct ProjectContext {
    pub config: DevupConfig,
    pub filter: DependencyFilter,
    pub manifest: ProjectManifest,
    pub workspace: Workspace,
}

impl ProjectContext {
    /// Load `devup.yaml` (with `overrides` applied) and the manifest of `project_dir`
    pub async fn load(project_dir: &Path, overrides: DevupConfig) -> Result<Self> {
        let config = ConfigStore::new()
            .load(project_dir)?
            .merged_with(overrides);
        config.validate()?;

        let filter = match config.internal_pattern.as_deref() {
            Some(pattern) => DependencyFilter::with_pattern(pattern)?,
            None => DependencyFilter::new(),
        };
        tracing::debug!("Internal dependency pattern: {}", filter.pattern());

        let manifest_path: PathBuf = project_dir.join(config.manifest());
        let manifest = ManifestStore::new().read(&manifest_path).await?;

        let workspace = Workspace::new(project_dir, config.workspace_root());
        tracing::debug!("Workspace root: {}", workspace.root().display());

        Ok(Self {
            config,
            filter,
            manifest,
            workspace,
        })
    }
}
