//! Package-manager operations infrastructure

pub mod npm;
pub mod package_manager;

pub use npm::NpmPackageManager;
pub use package_manager::{PackageManager, PackageManagerError};
