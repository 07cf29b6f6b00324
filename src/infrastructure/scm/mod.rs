/// SCM (Source Control Management) operations infrastructure
///
/// Working copies are driven through the [`ScmOperations`] trait; [`GitScm`]
/// is the implementation backed by the `git` executable.
pub mod git_scm;
pub mod scm_interface;

pub use git_scm::GitScm;
pub use scm_interface::{ScmError, ScmOperations};
