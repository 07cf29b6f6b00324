//! Test fixtures: a temporary workspace holding a project and its sibling checkouts

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use devup::domain::entities::Workspace;

/// Name of the project directory inside the fixture workspace
pub const PROJECT_DIR: &str = "app";

/// `<tmp>/app/package.json` plus sibling directories under `<tmp>`
pub struct WorkspaceFixture {
    temp_dir: TempDir,
}

impl WorkspaceFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        fs::create_dir(temp_dir.path().join(PROJECT_DIR)).expect("create project dir");
        Self { temp_dir }
    }

    /// Write `package.json` with the given `(name, locator)` dependencies
    pub fn with_dependencies(self, dependencies: &[(&str, &str)]) -> Self {
        let deps: serde_json::Map<String, serde_json::Value> = dependencies
            .iter()
            .map(|(name, locator)| (name.to_string(), serde_json::Value::from(*locator)))
            .collect();
        let manifest = serde_json::json!({
            "name": PROJECT_DIR,
            "version": "0.0.1",
            "dependencies": deps,
        });
        fs::write(
            self.project_dir().join("package.json"),
            serde_json::to_string_pretty(&manifest).unwrap(),
        )
        .expect("write package.json");
        self
    }

    /// Create sibling directories next to the project
    pub fn with_siblings(self, siblings: &[&str]) -> Self {
        for sibling in siblings {
            fs::create_dir_all(self.root().join(sibling)).expect("create sibling");
        }
        self
    }

    /// Write `devup.yaml` into the project directory
    pub fn with_config(self, yaml: &str) -> Self {
        fs::write(self.project_dir().join("devup.yaml"), yaml).expect("write devup.yaml");
        self
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn project_dir(&self) -> PathBuf {
        self.root().join(PROJECT_DIR)
    }

    pub fn sibling(&self, name: &str) -> PathBuf {
        self.workspace().repository_path(name)
    }

    pub fn workspace(&self) -> Workspace {
        Workspace::new(self.project_dir(), "..")
    }
}

impl Default for WorkspaceFixture {
    fn default() -> Self {
        Self::new()
    }
}
