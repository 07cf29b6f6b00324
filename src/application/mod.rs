//! Application layer: workflows built on the domain model and the injected collaborators

pub mod services;
pub mod use_cases;
