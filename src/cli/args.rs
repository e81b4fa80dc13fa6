//! Command-line argument definitions using clap derive.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

use crate::alert::ColorChoice;
use crate::{APP_NAME, AUTHOR, EMAIL, VERSION_LINE};

/// Default directory name created by `setup`.
pub const DEFAULT_SETUP_NAME: &str = "example";

/// An Snakemake command line interface for metafunc.
#[derive(Parser, Debug)]
#[command(name = APP_NAME, version = VERSION_LINE)]
#[command(after_help = epilog())]
#[command(disable_help_subcommand = true, propagate_version = true)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// When to color status alerts
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print help.
    Help,

    /// Generate a directory with example files for a metafunc run.
    Setup {
        /// Directory name (not full path).
        #[arg(short = 'n', long = "name", default_value = DEFAULT_SETUP_NAME)]
        directoryname: String,
    },

    /// Run metafunc analysis.
    Run {
        /// Config-file. Generate example with "metafunc setup"
        #[arg(value_name = "CONFIG-FILE")]
        configfile: PathBuf,

        /// Show what would be done without executing
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Re-run all steps even if their outputs are up to date
        #[arg(short, long)]
        force: bool,
    },
}

/// Result of reading the process arguments.
#[derive(Debug)]
pub enum Parsed {
    /// A full parse, ready to dispatch
    Cli(Cli),
    /// No arguments at all
    NoArguments,
    /// Clap handled the arguments itself: help, version or a usage error
    Early(clap::Error),
}

/// Parses arguments, including the program name in position zero.
pub fn parse_from<I, T>(args: I) -> Parsed
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() <= 1 {
        return Parsed::NoArguments;
    }

    match Cli::try_parse_from(args) {
        Ok(cli) => Parsed::Cli(cli),
        Err(e) => Parsed::Early(e),
    }
}

/// Renders the top-level help text.
pub fn render_help() -> String {
    Cli::command().render_help().to_string()
}

fn epilog() -> String {
    format!("Copyright {} ({})", AUTHOR, EMAIL)
}
