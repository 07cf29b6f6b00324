use async_trait::async_trait;
use std::path::Path;

use crate::infrastructure::process::CommandExecutorError;

/// Version-control operations applied to an existing working copy
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScmOperations: Send + Sync {
    /// Switch the working copy at `repo_path` to `reference`
    async fn checkout(&self, repo_path: &Path, reference: &str) -> Result<(), ScmError>;

    /// Pull the latest changes of `reference` into the working copy at `repo_path`
    async fn pull(&self, repo_path: &Path, reference: &str) -> Result<(), ScmError>;
}

/// Errors that can occur during SCM operations
#[derive(Debug, thiserror::Error)]
pub enum ScmError {
    #[error("Repository not found at path: {path}")]
    RepositoryNotFound { path: String },

    #[error("Checkout failed: {message}")]
    CheckoutFailed { message: String },

    #[error("Pull failed: {message}")]
    PullFailed { message: String },

    #[error("SCM executable not found: {executable}")]
    ExecutableNotFound { executable: String },

    #[error("Command execution failed: {command}, exit code: {exit_code}, stderr: {stderr}")]
    CommandFailed {
        command: String,
        exit_code: i32,
        stderr: String,
    },

    #[error("Process error: {source}")]
    Process {
        #[from]
        source: CommandExecutorError,
    },
}

impl ScmError {
    /// Create a checkout failed error
    pub fn checkout_failed(message: impl Into<String>) -> Self {
        Self::CheckoutFailed {
            message: message.into(),
        }
    }

    /// Create a pull failed error
    pub fn pull_failed(message: impl Into<String>) -> Self {
        Self::PullFailed {
            message: message.into(),
        }
    }

    /// Create an executable not found error
    pub fn executable_not_found(executable: impl Into<String>) -> Self {
        Self::ExecutableNotFound {
            executable: executable.into(),
        }
    }

    /// Create a command failed error
    pub fn command_failed(
        command: impl Into<String>,
        exit_code: i32,
        stderr: impl Into<String>,
    ) -> Self {
        Self::CommandFailed {
            command: command.into(),
            exit_code,
            stderr: stderr.into(),
        }
    }
}
