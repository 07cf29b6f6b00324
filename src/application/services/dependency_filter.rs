use regex::Regex;

use crate::common::result::{DevupResult, ResultExt};
use crate::domain::entities::dependency_manifest::DependencyManifest;
use crate::domain::value_objects::locator::RepositoryLocator;

/// Accepts any repository-shaped locator: `owner/name`, `git@host:owner/name`,
/// `https://host/owner/name` (plus `git+`, `git://`, `ssh://`), each with an optional `#ref`.
pub const DEFAULT_INTERNAL_PATTERN: &str = concat!(
    r"^(?:",
    r"(?:git\+)?(?:https?|ssh|git)://[^/\s#]+/[\w.-]+(?:/[\w.-]+)+",
    r"|[\w.-]+@[\w.-]+:[\w.-]+(?:/[\w.-]+)+",
    r"|(?:github:)?[\w.-]+/[\w.-]+",
    r")(?:#\S*)?$"
);

/// Selects the dependencies that point at internal project repositories.
#[derive(Debug, Clone)]
pub struct DependencyFilter {
    pattern: Regex,
}

impl Default for DependencyFilter {
    fn default() -> Self {
        Self {
            pattern: Regex::new(DEFAULT_INTERNAL_PATTERN).expect("default pattern is valid"),
        }
    }
}

impl DependencyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from a user supplied regular expression matched against locators.
    pub fn with_pattern(pattern: &str) -> DevupResult<Self> {
        let pattern = Regex::new(pattern)
            .with_config_error(format!("Invalid internal dependency pattern '{}'", pattern))?;
        Ok(Self { pattern })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// A locator is internal when it matches the pattern and parses as a repository locator.
    pub fn is_internal(&self, locator: &str) -> bool {
        let locator = locator.trim();
        if !self.pattern.is_match(locator) {
            return false;
        }

        match RepositoryLocator::parse(locator) {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!("Not treating '{}' as internal: {}", locator, e);
                false
            }
        }
    }

    /// Subset of `dependencies` whose locator matches, in declaration order.
    pub fn filter(&self, dependencies: &DependencyManifest) -> DependencyManifest {
        dependencies
            .iter()
            .filter(|dependency| self.is_internal(&dependency.locator))
            .cloned()
            .collect()
    }
}
