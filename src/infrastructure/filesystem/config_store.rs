use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::common::error::DevupError;
use crate::common::result::{DevupResult, ResultExt};
use crate::common::templates::get_devup_template;
use crate::domain::value_objects::locator::DEFAULT_BRANCH;
use crate::infrastructure::filesystem::manifest_store::DEFAULT_MANIFEST_FILE;
use crate::infrastructure::package::npm::DEFAULT_PACKAGE_MANAGER;
use crate::infrastructure::scm::git_scm::DEFAULT_REMOTE;

/// Name of the per-project configuration file
pub const CONFIG_FILE_NAME: &str = "devup.yaml";

/// Workspace root used when nothing else is configured
pub const DEFAULT_WORKSPACE_ROOT: &str = "..";

/// devup.yaml設定ファイルの構造
///
/// すべてのキーは省略可能。コマンドライン引数が優先される。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DevupConfig {
    /// 兄弟ディレクトリを含むワークスペースルート（プロジェクトからの相対パス）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_root: Option<String>,

    /// 依存関係を宣言するマニフェスト
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<String>,

    /// `<package_manager> update` に使用する実行ファイル
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_manager: Option<String>,

    /// ロケータに `#ref` が無い場合のブランチ
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,

    /// `git pull` に渡すリモート
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,

    /// 内部依存関係を選択する正規表現
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_pattern: Option<String>,
}

impl DevupConfig {
    /// `overrides` に設定された値で上書きした設定を返す
    pub fn merged_with(self, overrides: DevupConfig) -> Self {
        Self {
            workspace_root: overrides.workspace_root.or(self.workspace_root),
            manifest: overrides.manifest.or(self.manifest),
            package_manager: overrides.package_manager.or(self.package_manager),
            default_branch: overrides.default_branch.or(self.default_branch),
            remote: overrides.remote.or(self.remote),
            internal_pattern: overrides.internal_pattern.or(self.internal_pattern),
        }
    }

    pub fn workspace_root(&self) -> &str {
        self.workspace_root
            .as_deref()
            .unwrap_or(DEFAULT_WORKSPACE_ROOT)
    }

    pub fn manifest(&self) -> &str {
        self.manifest.as_deref().unwrap_or(DEFAULT_MANIFEST_FILE)
    }

    pub fn package_manager(&self) -> &str {
        self.package_manager
            .as_deref()
            .unwrap_or(DEFAULT_PACKAGE_MANAGER)
    }

    pub fn default_branch(&self) -> &str {
        self.default_branch.as_deref().unwrap_or(DEFAULT_BRANCH)
    }

    pub fn remote(&self) -> &str {
        self.remote.as_deref().unwrap_or(DEFAULT_REMOTE)
    }

    /// 空文字列の設定値を拒否する
    pub fn validate(&self) -> DevupResult<()> {
        let fields = [
            ("workspace_root", &self.workspace_root),
            ("manifest", &self.manifest),
            ("package_manager", &self.package_manager),
            ("default_branch", &self.default_branch),
            ("remote", &self.remote),
            ("internal_pattern", &self.internal_pattern),
        ];

        for (field, value) in fields {
            if let Some(value) = value {
                if value.trim().is_empty() {
                    return Err(DevupError::validation_error(
                        field,
                        "must not be empty",
                        Some(value.clone()),
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Loads and writes `devup.yaml`
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    pub fn config_path(project_dir: &Path) -> PathBuf {
        project_dir.join(CONFIG_FILE_NAME)
    }

    /// Load the configuration of `project_dir`; a missing file yields the defaults
    pub fn load(&self, project_dir: &Path) -> DevupResult<DevupConfig> {
        let path = Self::config_path(project_dir);
        if !path.exists() {
            tracing::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, project_dir.display());
            return Ok(DevupConfig::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_filesystem_error("Failed to read configuration file", Some(path.clone()))?;

        // An empty or comment-only file deserializes to `null`
        let config: Option<DevupConfig> = serde_yaml::from_str(&content)
            .with_config_error(format!("Invalid configuration in {}", path.display()))?;
        let config = config.unwrap_or_default();
        config.validate()?;

        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Write the commented template into `project_dir`
    pub fn write_template(&self, project_dir: &Path, force: bool) -> DevupResult<PathBuf> {
        let path = Self::config_path(project_dir);

        if path.exists() && !force {
            return Err(DevupError::config_error(format!(
                "File {} already exists. Use --force to overwrite.",
                path.display()
            )));
        }

        std::fs::create_dir_all(project_dir)
            .with_filesystem_error("Failed to create directory", Some(project_dir.to_path_buf()))?;
        std::fs::write(&path, get_devup_template())
            .with_filesystem_error("Failed to write configuration file", Some(path.clone()))?;

        Ok(path)
    }
}
