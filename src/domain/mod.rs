//! Domain model: manifests, workspaces and dependency locators

pub mod entities;
pub mod value_objects;
