//! Command line interface and console output

pub mod cli;
pub mod ui;
