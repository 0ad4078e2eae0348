//! Command-line front end for `rippy-table`.
//!
//! Reads JSON or TOML table specs and writes reStructuredText to stdout.

pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod render;

pub use error::{CliError, Result};
pub use exit_codes::ExitCode;
pub use render::RenderRequest;
