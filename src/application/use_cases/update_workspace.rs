use std::path::PathBuf;
use thiserror::Error;

use crate::application::services::dependency_filter::DependencyFilter;
use crate::application::services::progress_sink::ProgressSink;
use crate::domain::entities::{
    dependency_manifest::DependencyManifest,
    workspace::{Workspace, WorkspaceListing},
};
use crate::domain::value_objects::locator::{LocatorError, RepositoryLocator, DEFAULT_BRANCH};
use crate::infrastructure::filesystem::workspace_scanner::WorkspaceScanner;
use crate::infrastructure::package::{PackageManager, PackageManagerError};
use crate::infrastructure::scm::{ScmError, ScmOperations};

/// UpdateWorkspace関連のエラー
#[derive(Debug, Error)]
pub enum UpdateWorkspaceError {
    #[error("Invalid locator for dependency '{dependency}': {source}")]
    InvalidLocator {
        dependency: String,
        #[source]
        source: LocatorError,
    },

    #[error("Failed to update repository '{repository}': {source}")]
    ScmOperationFailed {
        repository: String,
        #[source]
        source: ScmError,
    },

    #[error("Package update failed in '{project}': {source}")]
    PackageUpdateFailed {
        project: String,
        #[source]
        source: PackageManagerError,
    },
}

/// ワークスペース更新の設定
#[derive(Debug, Clone)]
pub struct UpdateWorkspaceConfig {
    /// 各リポジトリとルートプロジェクトでパッケージ更新を実行するか
    pub update_packages: bool,

    /// ロケータに `#ref` が無い場合のブランチ
    pub default_branch: String,
}

impl Default for UpdateWorkspaceConfig {
    fn default() -> Self {
        Self {
            update_packages: false,
            default_branch: DEFAULT_BRANCH.to_string(),
        }
    }
}

impl UpdateWorkspaceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_update_packages(mut self, update_packages: bool) -> Self {
        self.update_packages = update_packages;
        self
    }

    pub fn with_default_branch(mut self, default_branch: impl Into<String>) -> Self {
        self.default_branch = default_branch.into();
        self
    }
}

/// 内部依存関係1件の更新計画
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRepository {
    /// マニフェストのキー
    pub dependency: String,

    /// 解析済みロケータ
    pub locator: RepositoryLocator,

    /// 作業コピーのパス
    pub path: PathBuf,

    /// ワークスペースに兄弟ディレクトリとして存在するか
    pub present: bool,
}

/// 内部依存関係と兄弟ディレクトリの突き合わせ結果（宣言順）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdatePlan {
    pub repositories: Vec<PlannedRepository>,
}

impl UpdatePlan {
    /// 内部依存関係をロケータ解析し、リポジトリ名でワークスペース一覧と照合する
    pub fn build(
        internal: &DependencyManifest,
        workspace: &Workspace,
        listing: &WorkspaceListing,
        default_branch: &str,
    ) -> Result<Self, UpdateWorkspaceError> {
        let repositories = internal
            .iter()
            .map(|dependency| {
                let locator =
                    RepositoryLocator::parse_with_default_branch(&dependency.locator, default_branch)
                        .map_err(|source| UpdateWorkspaceError::InvalidLocator {
                            dependency: dependency.name.clone(),
                            source,
                        })?;
                let present = listing.contains(locator.name());

                Ok(PlannedRepository {
                    dependency: dependency.name.clone(),
                    path: workspace.repository_path(&dependency.name),
                    present,
                    locator,
                })
            })
            .collect::<Result<Vec<_>, UpdateWorkspaceError>>()?;

        Ok(Self { repositories })
    }

    /// ワークスペースに存在するリポジトリ
    pub fn present(&self) -> impl Iterator<Item = &PlannedRepository> {
        self.repositories.iter().filter(|r| r.present)
    }

    /// ワークスペースに存在しないリポジトリ
    pub fn missing(&self) -> impl Iterator<Item = &PlannedRepository> {
        self.repositories.iter().filter(|r| !r.present)
    }
}

/// 更新操作の結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// チェックアウト・プルした依存関係（マニフェストのキー）
    pub updated: Vec<String>,

    /// ワークスペースに存在しなかった依存関係（マニフェストのキー）
    pub skipped: Vec<String>,

    /// パッケージ更新を実行したか
    pub packages_updated: bool,
}

/// ワークスペース更新ユースケース
///
/// 内部依存関係ごとに兄弟チェックアウトをロケータのブランチへ切り替えてプルし、
/// 必要に応じて全チェックアウトとルートプロジェクトでパッケージ更新を実行する。
/// すべて逐次実行で、最初のエラーで中断する。
pub struct UpdateWorkspaceUseCase<'a> {
    config: UpdateWorkspaceConfig,
    filter: DependencyFilter,
    scm: &'a dyn ScmOperations,
    packages: &'a dyn PackageManager,
    sink: &'a dyn ProgressSink,
}

impl<'a> UpdateWorkspaceUseCase<'a> {
    pub fn new(
        config: UpdateWorkspaceConfig,
        filter: DependencyFilter,
        scm: &'a dyn ScmOperations,
        packages: &'a dyn PackageManager,
        sink: &'a dyn ProgressSink,
    ) -> Self {
        Self {
            config,
            filter,
            scm,
            packages,
            sink,
        }
    }

    /// 更新を実行する
    ///
    /// `manifest_label` は情報メッセージにのみ使用する（例: `package.json`）。
    pub async fn execute(
        &self,
        workspace: &Workspace,
        dependencies: &DependencyManifest,
        manifest_label: &str,
    ) -> Result<UpdateReport, UpdateWorkspaceError> {
        let internal = self.filter.filter(dependencies);
        if internal.is_empty() {
            self.sink.writeln(&format!(
                "No internal dependencies found in {}.",
                manifest_label
            ));
            return Ok(UpdateReport::default());
        }

        let listing = WorkspaceScanner::scan(workspace.root());
        if listing.is_empty() {
            self.sink.writeln(&format!(
                "No dependency repositories found in {}.",
                workspace.root().display()
            ));
            return Ok(UpdateReport::default());
        }

        let plan = UpdatePlan::build(
            &internal,
            workspace,
            &listing,
            &self.config.default_branch,
        )?;

        let mut report = UpdateReport::default();

        for repository in &plan.repositories {
            if !repository.present {
                tracing::debug!(
                    "Skipping '{}': no '{}' directory in {}",
                    repository.dependency,
                    repository.locator.name(),
                    workspace.root().display()
                );
                report.skipped.push(repository.dependency.clone());
                continue;
            }

            self.sync_repository(repository).await?;
            report.updated.push(repository.dependency.clone());
        }

        if self.config.update_packages {
            let update_command = self.packages.update_command();

            for repository in plan.present() {
                let name = repository.locator.name();
                self.sink
                    .writeln(&format!("Running \"{}\" in {}...", update_command, name));
                self.packages
                    .update_packages(&repository.path)
                    .await
                    .map_err(|source| UpdateWorkspaceError::PackageUpdateFailed {
                        project: name.to_string(),
                        source,
                    })?;
            }

            let project_name = workspace.project_name();
            self.sink.writeln(&format!(
                "Running \"{}\" in {} repository...",
                update_command, project_name
            ));
            self.packages
                .update_packages(workspace.project_root())
                .await
                .map_err(|source| UpdateWorkspaceError::PackageUpdateFailed {
                    project: project_name,
                    source,
                })?;

            report.packages_updated = true;
        }

        Ok(report)
    }

    async fn sync_repository(
        &self,
        repository: &PlannedRepository,
    ) -> Result<(), UpdateWorkspaceError> {
        let name = repository.locator.name();
        let branch = repository.locator.branch();
        let scm_failed = |source| UpdateWorkspaceError::ScmOperationFailed {
            repository: name.to_string(),
            source,
        };

        self.sink
            .writeln(&format!("Checking out {} to {}...", name, branch));
        self.scm
            .checkout(&repository.path, branch)
            .await
            .map_err(scm_failed)?;

        self.sink.writeln(&format!("Pulling changes to {}...", name));
        self.scm
            .pull(&repository.path, branch)
            .await
            .map_err(scm_failed)?;

        Ok(())
    }
}
