//! Command-line front end for `palettegen-render`.
//!
//! ```bash
//! # Write every output requested by the definition
//! palettegen generate colors.yaml
//!
//! # Show where outputs would go, without rendering
//! palettegen plan colors.yaml --json
//!
//! # Print the rendered text instead of writing it
//! palettegen generate colors.yaml --dry-run
//! ```
//!
//! The binary is a thin wrapper: [`cli::run`] does the work against any
//! writer, which keeps it testable without spawning a process.

pub mod cli;
pub mod logging;
