use async_trait::async_trait;
use std::path::Path;

use super::package_manager::{PackageManager, PackageManagerError};
use crate::infrastructure::process::{CommandExecutor, CommandExecutorError, ExecutionConfig};

/// Executable used when nothing else is configured
pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";

/// Runs `<executable> update` for npm-compatible package managers (npm, yarn, pnpm)
#[derive(Debug, Clone)]
pub struct NpmPackageManager {
    executable: String,
}

impl Default for NpmPackageManager {
    fn default() -> Self {
        Self {
            executable: DEFAULT_PACKAGE_MANAGER.to_string(),
        }
    }
}

impl NpmPackageManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_executable(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }
}

#[async_trait]
impl PackageManager for NpmPackageManager {
    fn update_command(&self) -> String {
        format!("{} update", self.executable)
    }

    async fn update_packages(&self, project_path: &Path) -> Result<(), PackageManagerError> {
        if !project_path.is_dir() {
            return Err(PackageManagerError::ProjectNotFound {
                path: project_path.display().to_string(),
            });
        }

        let config = ExecutionConfig::new().with_working_directory(project_path);
        let result = match CommandExecutor::execute(&self.executable, &["update"], &config).await
        {
            Ok(result) => result,
            Err(CommandExecutorError::SpawnFailed(_)) => {
                return Err(PackageManagerError::ExecutableNotFound {
                    executable: self.executable.clone(),
                })
            }
            Err(e) => return Err(e.into()),
        };

        if !result.success {
            return Err(PackageManagerError::UpdateFailed {
                command: self.update_command(),
                path: project_path.display().to_string(),
                exit_code: result.exit_code,
                stderr: result.stderr.trim().to_string(),
            });
        }

        if !result.stdout.trim().is_empty() {
            tracing::debug!("{}: {}", self.update_command(), result.stdout.trim());
        }

        Ok(())
    }
}
