//! CLI module
//!
//! Command-line interface over the list engine.
//!
//! # Commands
//!
//! - `list` - Fetch one page or a whole collection
//! - `options` - Load dropdown options
//! - `validate` - Check configuration

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
