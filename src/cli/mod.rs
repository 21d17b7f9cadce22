//! CLI layer for flow
//!
//! This module contains the command-line interface:
//!
//! - [`app`] - CLI definitions, entry point and exit-code mapping
//! - [`commands`] - Command implementations

pub mod app;
pub mod commands;

// Re-export main entry point
pub use app::run;
