pub mod config_store;
pub mod manifest_store;
pub mod workspace_scanner;

pub use config_store::{ConfigStore, DevupConfig};
pub use manifest_store::{ManifestStore, ManifestStoreError, ProjectManifest};
pub use workspace_scanner::WorkspaceScanner;
