//! Command-Line Interface
//!
//! - [`args`]: clap definitions and argument parsing
//! - [`banner`]: start-up banner and help description
//! - [`dispatch`]: routing subcommands to scaffolding or the engine

pub mod args;
pub mod banner;
pub mod dispatch;

pub use args::{parse_from, render_help, Cli, Command, Parsed};
pub use dispatch::{Dispatcher, Outcome};
