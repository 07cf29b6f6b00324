//! # devup - Development workspace updater
//!
//! `devup` keeps a multi-repository development workspace in step with a project's
//! manifest. It reads the project's `package.json`, picks the dependencies that point
//! at internal repositories, finds the matching sibling checkouts in the workspace
//! root and switches each one to the branch its locator names.
//!
//! ## Quick Start
//!
//! Given a project whose `package.json` declares
//!
//! ```json
//! {
//!   "dependencies": {
//!     "ckeditor5-core": "ckeditor/ckeditor5-core",
//!     "ckeditor5-engine": "ckeditor/ckeditor5-engine#feature-x"
//!   }
//! }
//! ```
//!
//! and a workspace with `ckeditor5-engine` checked out next to the project:
//!
//! ```bash
//! devup update        # git checkout feature-x && git pull origin feature-x
//! devup update -u     # ... then "npm update" in each checkout and the project
//! devup list          # show which dependencies are present
//! ```
//!
//! ## Architecture
//!
//! - [`domain`]: Manifest, workspace and locator types
//! - [`application`]: The update workflow and the dependency filter
//! - [`infrastructure`]: git, npm, process execution and file access
//! - [`presentation`]: CLI interface and console output
//! - [`common`]: Shared error handling
//!
//! ## Using the Library
//!
//! ```rust,no_run
//! use devup::application::services::{DependencyFilter, ProgressSink};
//! use devup::application::use_cases::{UpdateWorkspaceConfig, UpdateWorkspaceUseCase};
//! use devup::domain::entities::{DependencyManifest, Workspace};
//! use devup::infrastructure::{GitScm, NpmPackageManager};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dependencies = DependencyManifest::new()
//!     .with_dependency("ckeditor5-engine", "ckeditor/ckeditor5-engine#feature-x");
//! let workspace = Workspace::new("/work/ckeditor5", "..");
//!
//! let scm = GitScm::new();
//! let packages = NpmPackageManager::new();
//! let sink = |line: &str| println!("{}", line);
//!
//! let use_case = UpdateWorkspaceUseCase::new(
//!     UpdateWorkspaceConfig::new().with_update_packages(true),
//!     DependencyFilter::new(),
//!     &scm,
//!     &packages,
//!     &sink,
//! );
//! let report = use_case.execute(&workspace, &dependencies, "package.json").await?;
//! println!("Updated {} repositories", report.updated.len());
//! # Ok(())
//! # }
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::DevupError;
pub use crate::common::result::DevupResult as Result;
