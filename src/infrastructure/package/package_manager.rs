use async_trait::async_trait;
use std::path::Path;

use crate::infrastructure::process::CommandExecutorError;

/// Package-manager operations applied to a project directory
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PackageManager: Send + Sync {
    /// Human readable command, used in progress output (e.g. `npm update`)
    fn update_command(&self) -> String;

    /// Update the installed packages of the project at `project_path`
    async fn update_packages(&self, project_path: &Path) -> Result<(), PackageManagerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PackageManagerError {
    #[error("Project directory not found: {path}")]
    ProjectNotFound { path: String },

    #[error("Package manager executable not found: {executable}")]
    ExecutableNotFound { executable: String },

    #[error("'{command}' failed in {path} with exit code {exit_code}: {stderr}")]
    UpdateFailed {
        command: String,
        path: String,
        exit_code: i32,
        stderr: String,
    },

    #[error("Process error: {source}")]
    Process {
        #[from]
        source: CommandExecutorError,
    },
}
