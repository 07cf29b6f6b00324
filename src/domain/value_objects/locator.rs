use regex::Regex;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;
use url::Url;

/// ロケータに `#ref` が無い場合に使用するブランチ
pub const DEFAULT_BRANCH: &str = "master";

/// ショートハンド形式で使用するホスト
const SHORTHAND_HOST: &str = "github.com";

/// ロケータ関連のエラー
#[derive(Debug, Error, PartialEq)]
pub enum LocatorError {
    #[error("Invalid locator format: {0}")]
    InvalidFormat(String),

    #[error("Missing host in locator: {0}")]
    MissingHost(String),

    #[error("Missing repository path in locator: {0}")]
    MissingRepoPath(String),

    #[error("Invalid characters in locator: {0}")]
    InvalidCharacters(String),
}

/// ロケータの記述形式
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum LocatorStyle {
    /// `owner/name`
    Shorthand,
    /// `git@host:owner/name.git`
    Scp { user: String },
    /// `https://host/owner/name.git` など
    Url { scheme: String, user: Option<String> },
}

/// 依存関係のロケータ（リポジトリアドレス + 任意のブランチ）を解析した値オブジェクト
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryLocator {
    /// 元のロケータ文字列
    raw: String,

    /// ホスト名
    host: String,

    /// オーナー（組織/ユーザー、ネストしたグループを含む）
    owner: String,

    /// リポジトリ名（`.git` 除去済み）
    name: String,

    /// 対象ブランチ
    branch: String,

    /// ブランチがロケータで明示されていたか
    explicit_branch: bool,

    style: LocatorStyle,
}

impl RepositoryLocator {
    /// デフォルトブランチ（`master`）でロケータを解析
    pub fn parse(locator: &str) -> Result<Self, LocatorError> {
        Self::parse_with_default_branch(locator, DEFAULT_BRANCH)
    }

    /// ロケータを解析する。`#` 以降が空または無い場合は `default_branch` を使用
    pub fn parse_with_default_branch(
        locator: &str,
        default_branch: &str,
    ) -> Result<Self, LocatorError> {
        let raw = locator.trim();
        if raw.is_empty() {
            return Err(LocatorError::InvalidFormat("Empty locator".to_string()));
        }

        let (address, reference) = match raw.split_once('#') {
            Some((address, reference)) => (address, reference.trim()),
            None => (raw, ""),
        };

        if reference.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(LocatorError::InvalidCharacters(raw.to_string()));
        }

        let address = address.strip_prefix("git+").unwrap_or(address);
        let (host, path, style) = Self::split_address(address, raw)?;
        let (owner, name) = Self::split_repo_path(&path, &style, raw)?;

        let explicit_branch = !reference.is_empty();
        let branch = if explicit_branch {
            reference.to_string()
        } else {
            default_branch.to_string()
        };

        Ok(Self {
            raw: raw.to_string(),
            host,
            owner,
            name,
            branch,
            explicit_branch,
            style,
        })
    }

    /// ホスト・リポジトリパス・形式に分解
    fn split_address(
        address: &str,
        raw: &str,
    ) -> Result<(String, String, LocatorStyle), LocatorError> {
        if address.contains("://") {
            let url = Url::parse(address)
                .map_err(|e| LocatorError::InvalidFormat(format!("{}: {}", raw, e)))?;
            let host = url
                .host_str()
                .filter(|h| !h.is_empty())
                .ok_or_else(|| LocatorError::MissingHost(raw.to_string()))?;
            let host = match url.port() {
                Some(port) => format!("{}:{}", host, port),
                None => host.to_string(),
            };
            return Ok((
                host,
                url.path().trim_matches('/').to_string(),
                LocatorStyle::Url {
                    scheme: url.scheme().to_string(),
                    user: Some(url.username())
                        .filter(|u| !u.is_empty())
                        .map(str::to_string),
                },
            ));
        }

        if let Some(captures) = scp_regex().captures(address) {
            return Ok((
                captures[2].to_string(),
                captures[3].trim_matches('/').to_string(),
                LocatorStyle::Scp {
                    user: captures[1].to_string(),
                },
            ));
        }

        let path = address.strip_prefix("github:").unwrap_or(address);
        if path.contains(':') {
            return Err(LocatorError::InvalidFormat(raw.to_string()));
        }

        Ok((
            SHORTHAND_HOST.to_string(),
            path.to_string(),
            LocatorStyle::Shorthand,
        ))
    }

    /// リポジトリパスをオーナーと名前に分解
    fn split_repo_path(
        path: &str,
        style: &LocatorStyle,
        raw: &str,
    ) -> Result<(String, String), LocatorError> {
        let segments: Vec<&str> = path.split('/').collect();

        if segments.len() < 2 || segments.iter().any(|s| s.is_empty()) {
            return Err(LocatorError::MissingRepoPath(raw.to_string()));
        }

        // ショートハンドは `owner/name` のみ
        if *style == LocatorStyle::Shorthand && segments.len() != 2 {
            return Err(LocatorError::InvalidFormat(raw.to_string()));
        }

        for segment in &segments {
            if *segment == "." || *segment == ".." || !segment_regex().is_match(segment) {
                return Err(LocatorError::InvalidCharacters(raw.to_string()));
            }
        }

        let (name, owner) = segments
            .split_last()
            .ok_or_else(|| LocatorError::MissingRepoPath(raw.to_string()))?;
        let name = name.strip_suffix(".git").unwrap_or(name);
        if name.is_empty() {
            return Err(LocatorError::MissingRepoPath(raw.to_string()));
        }

        Ok((owner.join("/"), name.to_string()))
    }

    /// 元のロケータ文字列
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// リポジトリ名。ワークスペースのディレクトリ名との照合に使用
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// ブランチがロケータで明示されていたか
    pub fn has_explicit_branch(&self) -> bool {
        self.explicit_branch
    }

    /// `owner/name` 形式のリポジトリパス
    pub fn repository(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// クローン用URLを導出
    pub fn clone_url(&self) -> String {
        match &self.style {
            LocatorStyle::Shorthand => {
                format!("https://{}/{}/{}.git", self.host, self.owner, self.name)
            }
            LocatorStyle::Scp { user } => {
                format!("{}@{}:{}/{}.git", user, self.host, self.owner, self.name)
            }
            LocatorStyle::Url { scheme, user } => {
                let user = user.as_ref().map(|u| format!("{}@", u)).unwrap_or_default();
                format!(
                    "{}://{}{}/{}/{}.git",
                    scheme, user, self.host, self.owner, self.name
                )
            }
        }
    }
}

impl fmt::Display for RepositoryLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.repository(), self.branch)
    }
}

impl std::str::FromStr for RepositoryLocator {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn scp_regex() -> &'static Regex {
    static SCP: OnceLock<Regex> = OnceLock::new();
    SCP.get_or_init(|| Regex::new(r"^([\w.-]+)@([\w.-]+):(.+)$").expect("valid scp regex"))
}

fn segment_regex() -> &'static Regex {
    static SEGMENT: OnceLock<Regex> = OnceLock::new();
    SEGMENT.get_or_init(|| Regex::new(r"^[\w.-]+$").expect("valid segment regex"))
}
