use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Instant;
use thiserror::Error;
use tokio::process::Command;

/// Command executor errors
#[derive(Debug, Error)]
pub enum CommandExecutorError {
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Process spawn failed: {0}")]
    SpawnFailed(String),
}

/// Configuration for command execution
#[derive(Debug, Clone, Default)]
pub struct ExecutionConfig {
    /// Working directory for command execution
    pub working_directory: Option<PathBuf>,
}

impl ExecutionConfig {
    /// Create a new execution config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set working directory
    pub fn with_working_directory<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.working_directory = Some(dir.as_ref().to_path_buf());
        self
    }
}

/// Result of command execution
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Exit code of the process
    pub exit_code: i32,

    /// Standard output
    pub stdout: String,

    /// Standard error output
    pub stderr: String,

    /// Execution time in milliseconds
    pub execution_time_ms: u64,

    /// Whether the command was successful (exit code 0)
    pub success: bool,
}

impl ExecutionResult {
    /// Create a new execution result
    pub fn new(exit_code: i32, stdout: String, stderr: String, execution_time_ms: u64) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            execution_time_ms,
            success: exit_code == 0,
        }
    }
}

/// Command executor for running external processes
///
/// Commands run one at a time; `execute` resolves only once the child has exited.
pub struct CommandExecutor;

impl CommandExecutor {
    /// Execute `program` with `args` and wait for it to finish
    pub async fn execute<S: AsRef<str>>(
        program: &str,
        args: &[S],
        config: &ExecutionConfig,
    ) -> Result<ExecutionResult, CommandExecutorError> {
        if program.trim().is_empty() {
            return Err(CommandExecutorError::InvalidCommand(
                "Command is empty".to_string(),
            ));
        }

        let start_time = Instant::now();
        let command_line = Self::display_command(program, args);

        let mut cmd = Command::new(program);
        cmd.args(args.iter().map(|a| a.as_ref()));

        if let Some(working_dir) = &config.working_directory {
            cmd.current_dir(working_dir);
        }

        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        cmd.stdin(Stdio::null());

        tracing::debug!(
            "Running '{}' in {}",
            command_line,
            config
                .working_directory
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| ".".to_string())
        );

        let output = cmd
            .output()
            .await
            .map_err(|e| CommandExecutorError::SpawnFailed(format!("Failed to spawn '{}': {}", command_line, e)))?;

        let execution_time = start_time.elapsed().as_millis() as u64;
        let result = ExecutionResult::new(
            output.status.code().unwrap_or(-1),
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
            execution_time,
        );

        tracing::debug!(
            "'{}' exited with {} after {}ms",
            command_line,
            result.exit_code,
            result.execution_time_ms
        );

        Ok(result)
    }

    /// Render a command line for logs and error messages
    pub fn display_command<S: AsRef<str>>(program: &str, args: &[S]) -> String {
        std::iter::once(program)
            .chain(args.iter().map(|a| a.as_ref()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
