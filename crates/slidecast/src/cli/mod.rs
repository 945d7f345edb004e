//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the slidecast binary.

mod ask;
mod commands;
mod play;
mod serve;

pub use ask::ask;
pub use commands::{Cli, Commands};
pub use play::play;
pub use serve::serve;
