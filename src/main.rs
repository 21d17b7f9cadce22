//! flow - A CLI tool to initialize workflow projects from predefined templates
//!
//! The binary handles exactly one invocation per run: parse, dispatch to a
//! command handler, and exit with 0 on success, 1 on error or interrupt,
//! 2 on bad usage.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

/// Main entry point for the flow CLI
fn main() {
    std::process::exit(cli::run());
}
