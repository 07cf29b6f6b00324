use std::path::Path;
use walkdir::WalkDir;

use crate::domain::entities::workspace::WorkspaceListing;

/// Lists the sibling directories of a workspace root.
pub struct WorkspaceScanner;

impl WorkspaceScanner {
    /// Names of the immediate subdirectories of `workspace_root`.
    ///
    /// A missing root, or one that is not a directory, is an empty workspace rather
    /// than an error. Symlinks to directories count; hidden entries do not.
    pub fn scan(workspace_root: &Path) -> WorkspaceListing {
        if !workspace_root.is_dir() {
            tracing::debug!(
                "Workspace root {} does not exist or is not a directory",
                workspace_root.display()
            );
            return WorkspaceListing::new();
        }

        WalkDir::new(workspace_root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::debug!("Skipping unreadable workspace entry: {}", e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_dir())
            .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
            .filter(|name| !name.starts_with('.'))
            .collect()
    }
}
