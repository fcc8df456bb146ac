//! CLI command implementations.

pub mod common;
pub mod export;
pub mod graph;
pub mod run;
pub mod version;
