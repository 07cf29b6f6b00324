use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// 開発ワークスペース
///
/// ルートプロジェクトと、その依存リポジトリのチェックアウトを兄弟ディレクトリとして
/// 保持するワークスペースルートの組。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    /// ルートプロジェクトのパス
    project_root: PathBuf,

    /// 兄弟ディレクトリを含むワークスペースルート
    root: PathBuf,
}

impl Workspace {
    /// プロジェクトパスと、そこからの相対（または絶対）ワークスペースパスから作成
    pub fn new(project_root: impl Into<PathBuf>, workspace_root: impl AsRef<Path>) -> Self {
        let project_root = project_root.into();
        let root = project_root.join(workspace_root.as_ref());
        Self { project_root, root }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 依存関係キーに対応するチェックアウトのパス
    pub fn repository_path(&self, dependency_name: &str) -> PathBuf {
        self.root.join(dependency_name)
    }

    /// ルートプロジェクトの表示名（ディレクトリ名）
    pub fn project_name(&self) -> String {
        self.project_root
            .canonicalize()
            .ok()
            .as_deref()
            .unwrap_or(self.project_root.as_path())
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "root".to_string())
    }
}

/// ワークスペースルートに存在する兄弟ディレクトリ名の集合
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceListing {
    directories: BTreeSet<String>,
}

impl WorkspaceListing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.directories.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.directories.len()
    }

    /// ソート済みのディレクトリ名
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.directories.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for WorkspaceListing {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            directories: iter.into_iter().map(Into::into).collect(),
        }
    }
}
