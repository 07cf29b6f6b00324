pub mod locator;

pub use locator::{LocatorError, RepositoryLocator, DEFAULT_BRANCH};
