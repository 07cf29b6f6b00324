use serde_json::Value;

use crate::common::result::{DevupResult, OptionExt};

/// 依存関係の宣言（名前 → ロケータ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// 依存関係名（マニフェストのキー）
    pub name: String,

    /// ロケータ文字列
    pub locator: String,
}

impl Dependency {
    pub fn new(name: impl Into<String>, locator: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            locator: locator.into(),
        }
    }
}

/// マニフェストで宣言された依存関係の集合
///
/// キーは一意で、反復順序は宣言順。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyManifest {
    dependencies: Vec<Dependency>,
}

impl DependencyManifest {
    /// 空のマニフェストを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 依存関係を追加。既存のキーは値を置き換え、位置は保持する
    pub fn insert(&mut self, name: impl Into<String>, locator: impl Into<String>) {
        let name = name.into();
        let locator = locator.into();
        match self.dependencies.iter_mut().find(|d| d.name == name) {
            Some(existing) => existing.locator = locator,
            None => self.dependencies.push(Dependency { name, locator }),
        }
    }

    /// ビルダースタイルで依存関係を追加
    pub fn with_dependency(mut self, name: impl Into<String>, locator: impl Into<String>) -> Self {
        self.insert(name, locator);
        self
    }

    /// `dependencies` オブジェクトから構築
    ///
    /// オブジェクト以外（`null` を含む）はエラー。文字列以外の値は無視する。
    pub fn from_json_value(value: &Value) -> DevupResult<Self> {
        let object = value
            .as_object()
            .ok_or_validation_error("dependencies", "must be an object")?;

        let mut manifest = Self::new();
        for (name, locator) in object {
            match locator.as_str() {
                Some(locator) => manifest.insert(name.as_str(), locator),
                None => tracing::debug!("Ignoring non-string dependency '{}'", name),
            }
        }
        Ok(manifest)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.dependencies
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.locator.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dependency> {
        self.dependencies.iter()
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}

impl FromIterator<Dependency> for DependencyManifest {
    fn from_iter<I: IntoIterator<Item = Dependency>>(iter: I) -> Self {
        let mut manifest = Self::new();
        for dependency in iter {
            manifest.insert(dependency.name, dependency.locator);
        }
        manifest
    }
}

impl<'a> IntoIterator for &'a DependencyManifest {
    type Item = &'a Dependency;
    type IntoIter = std::slice::Iter<'a, Dependency>;

    fn into_iter(self) -> Self::IntoIter {
        self.dependencies.iter()
    }
}
