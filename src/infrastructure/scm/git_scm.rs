use super::scm_interface::{ScmError, ScmOperations};
use crate::infrastructure::process::{CommandExecutor, CommandExecutorError, ExecutionConfig};
use async_trait::async_trait;
use std::path::Path;

/// Remote used by `git pull` unless configured otherwise
pub const DEFAULT_REMOTE: &str = "origin";

/// Git implementation of SCM operations, driving the `git` executable
#[derive(Debug, Clone)]
pub struct GitScm {
    git_executable: String,
    remote: String,
}

impl Default for GitScm {
    fn default() -> Self {
        Self {
            git_executable: "git".to_string(),
            remote: DEFAULT_REMOTE.to_string(),
        }
    }
}

impl GitScm {
    /// Create a new Git SCM instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom git executable
    pub fn with_executable(mut self, executable: impl Into<String>) -> Self {
        self.git_executable = executable.into();
        self
    }

    /// Pull from a remote other than `origin`
    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }

    pub fn remote(&self) -> &str {
        &self.remote
    }

    async fn execute_git_command(
        &self,
        args: &[&str],
        working_dir: Option<&Path>,
    ) -> Result<crate::infrastructure::process::ExecutionResult, ScmError> {
        let mut config = ExecutionConfig::new();
        if let Some(dir) = working_dir {
            config = config.with_working_directory(dir);
        }

        match CommandExecutor::execute(&self.git_executable, args, &config).await {
            Ok(result) => Ok(result),
            Err(CommandExecutorError::SpawnFailed(_)) => {
                Err(ScmError::executable_not_found(&self.git_executable))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Execute a git command and check for success
    async fn execute_git_command_checked(
        &self,
        args: &[&str],
        working_dir: &Path,
    ) -> Result<String, ScmError> {
        if !working_dir.is_dir() {
            return Err(ScmError::RepositoryNotFound {
                path: working_dir.display().to_string(),
            });
        }

        let result = self.execute_git_command(args, Some(working_dir)).await?;

        if !result.success {
            let command = CommandExecutor::display_command(&self.git_executable, args);
            return Err(ScmError::command_failed(
                command,
                result.exit_code,
                result.stderr.trim(),
            ));
        }

        Ok(result.stdout.trim().to_string())
    }
}

#[async_trait]
impl ScmOperations for GitScm {
    async fn checkout(&self, repo_path: &Path, reference: &str) -> Result<(), ScmError> {
        match self
            .execute_git_command_checked(&["checkout", reference], repo_path)
            .await
        {
            Err(ScmError::CommandFailed { stderr, .. }) => Err(ScmError::checkout_failed(format!(
                "{} ({}): {}",
                repo_path.display(),
                reference,
                stderr
            ))),
            other => other.map(|_| ()),
        }
    }

    async fn pull(&self, repo_path: &Path, reference: &str) -> Result<(), ScmError> {
        match self
            .execute_git_command_checked(&["pull", self.remote.as_str(), reference], repo_path)
            .await
        {
            Err(ScmError::CommandFailed { stderr, .. }) => Err(ScmError::pull_failed(format!(
                "{} ({}/{}): {}",
                repo_path.display(),
                self.remote,
                reference,
                stderr
            ))),
            other => other.map(|_| ()),
        }
    }
}
