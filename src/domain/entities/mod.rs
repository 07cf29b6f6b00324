pub mod dependency_manifest;
pub mod workspace;

pub use dependency_manifest::{Dependency, DependencyManifest};
pub use workspace::{Workspace, WorkspaceListing};
