//! CLI command implementations.

pub mod camera;
pub mod config;
pub mod replay;
