//! Recording fakes for the collaborators of the update workflow
//!
//! Every fake appends to a shared [`CallLog`] so tests can assert the global order
//! of checkouts, pulls and package updates across collaborators.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use devup::application::services::ProgressSink;
use devup::infrastructure::package::{PackageManager, PackageManagerError};
use devup::infrastructure::scm::{ScmError, ScmOperations};

/// A single collaborator invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Checkout { path: PathBuf, reference: String },
    Pull { path: PathBuf, reference: String },
    UpdatePackages { path: PathBuf },
}

/// Shared, ordered record of collaborator calls
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn update_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::UpdatePackages { .. }))
            .count()
    }

    /// Index of the last checkout or pull, if any
    pub fn last_scm_index(&self) -> Option<usize> {
        self.calls()
            .iter()
            .rposition(|c| matches!(c, Call::Checkout { .. } | Call::Pull { .. }))
    }

    /// Index of the first package update, if any
    pub fn first_update_index(&self) -> Option<usize> {
        self.calls()
            .iter()
            .position(|c| matches!(c, Call::UpdatePackages { .. }))
    }
}

/// Fake version control that records calls and can fail checkouts of one directory
pub struct RecordingScm {
    log: CallLog,
    fail_checkout_of: Option<String>,
}

impl RecordingScm {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            fail_checkout_of: None,
        }
    }

    /// Fail the checkout of any working copy whose directory name is `name`
    pub fn failing_checkout_of(mut self, name: impl Into<String>) -> Self {
        self.fail_checkout_of = Some(name.into());
        self
    }
}

#[async_trait]
impl ScmOperations for RecordingScm {
    async fn checkout(&self, repo_path: &Path, reference: &str) -> Result<(), ScmError> {
        self.log.record(Call::Checkout {
            path: repo_path.to_path_buf(),
            reference: reference.to_string(),
        });

        if let Some(name) = &self.fail_checkout_of {
            if repo_path.ends_with(name) {
                return Err(ScmError::checkout_failed(format!(
                    "pathspec '{}' did not match",
                    reference
                )));
            }
        }
        Ok(())
    }

    async fn pull(&self, repo_path: &Path, reference: &str) -> Result<(), ScmError> {
        self.log.record(Call::Pull {
            path: repo_path.to_path_buf(),
            reference: reference.to_string(),
        });
        Ok(())
    }
}

/// Fake package manager that records calls
pub struct RecordingPackageManager {
    log: CallLog,
}

impl RecordingPackageManager {
    pub fn new(log: CallLog) -> Self {
        Self { log }
    }
}

#[async_trait]
impl PackageManager for RecordingPackageManager {
    fn update_command(&self) -> String {
        "npm update".to_string()
    }

    async fn update_packages(&self, project_path: &Path) -> Result<(), PackageManagerError> {
        self.log.record(Call::UpdatePackages {
            path: project_path.to_path_buf(),
        });
        Ok(())
    }
}

/// Progress sink that keeps every line
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl ProgressSink for RecordingSink {
    fn writeln(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}
