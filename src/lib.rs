//! metafunc - Snakemake Command Line Interface
//!
//! A thin front end for the metafunc Snakemake workflow. It scaffolds an
//! example project directory, loads the user's YAML run configuration
//! and hands execution to the Snakemake engine. Scheduling and job
//! execution belong to Snakemake.
//!
//! # Architecture
//!
//! - [`cli`]: argument parsing and command dispatch
//! - [`config`]: YAML run configuration and installation paths
//! - [`scaffold`]: copying the bundled example directory
//! - [`engine`]: invoking the external workflow engine
//! - [`alert`]: timestamped status alerts
//!
//! # Example
//!
//! ```rust,no_run
//! use metafunc::alert::{Alerter, Palette};
//! use metafunc::cli::{Command, Dispatcher};
//! use metafunc::config::AppPaths;
//! use metafunc::engine::SnakemakeEngine;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let paths = AppPaths::discover()?;
//!     let engine = SnakemakeEngine::new(&paths.engine_program);
//!     let dispatcher = Dispatcher::new(paths, engine);
//!
//!     let command = Command::Run {
//!         configfile: "config.yaml".into(),
//!         dry_run: true,
//!         force: false,
//!     };
//!     let mut alerter = Alerter::stderr(Palette::Plain);
//!     let outcome = dispatcher.dispatch(Some(&command), &mut std::io::stdout(), &mut alerter)?;
//!     std::process::exit(outcome.exit_code().into());
//! }
//! ```

pub mod alert;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod scaffold;

pub use error::{MetafuncError, Result};

macro_rules! release_date {
    () => {
        "2026-10-16"
    };
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Release date shown next to the version
pub const RELEASE_DATE: &str = release_date!();

/// Text printed by `--version`
pub const VERSION_LINE: &str = concat!("version ", env!("CARGO_PKG_VERSION"), ", date ", release_date!());

/// Program name
pub const APP_NAME: &str = "metafunc";

pub const AUTHOR: &str = "metafunc Team";

pub const EMAIL: &str = "metafunc@users.noreply.github.com";
