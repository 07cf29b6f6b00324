/// Infrastructure layer modules
///
/// This layer provides concrete implementations for external system interactions:
/// - SCM operations (git checkout / pull)
/// - Package-manager operations (npm-compatible update)
/// - File system operations (config file, manifest, workspace listing)
/// - Process execution
pub mod filesystem;
pub mod package;
pub mod process;
pub mod scm;

// Re-export commonly used types
pub use filesystem::{ConfigStore, ManifestStore, WorkspaceScanner};
pub use package::{NpmPackageManager, PackageManager};
pub use process::CommandExecutor;
pub use scm::{GitScm, ScmOperations};
