//! metafunc CLI Entry Point
//!
//! # Usage
//!
//! ```bash
//! # Create an example project directory
//! metafunc setup -n my_project
//!
//! # Preview the workflow
//! metafunc run config.yaml --dry-run
//!
//! # Run everything again, ignoring existing outputs
//! metafunc run config.yaml --force
//! ```

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use metafunc::alert::{Alerter, ColorChoice, Palette};
use metafunc::cli::banner::banner;
use metafunc::cli::{parse_from, render_help, Cli, Dispatcher, Parsed};
use metafunc::config::AppPaths;
use metafunc::engine::SnakemakeEngine;

/// Configures the logging system with appropriate formatting.
fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| match record.level() {
            log::Level::Warn | log::Level::Error => {
                writeln!(buf, "[{}] {}", record.level(), record.args())
            }
            _ => writeln!(buf, "{}", record.args()),
        })
        .init();
}

/// Reports a fatal error and returns the failure exit code.
fn fail(alerter: &mut Alerter, message: &str) -> ExitCode {
    // Nothing left to report to if stderr itself is gone
    let _ = alerter.error(message);
    ExitCode::FAILURE
}

fn run(cli: Cli, paths: AppPaths, alerter: &mut Alerter) -> ExitCode {
    let engine = SnakemakeEngine::new(&paths.engine_program);
    let dispatcher = Dispatcher::new(paths, engine);

    let mut stdout = io::stdout();
    match dispatcher.dispatch(cli.command.as_ref(), &mut stdout, alerter) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            let _ = stdout.flush();
            fail(alerter, &e.to_string())
        }
    }
}

fn main() -> ExitCode {
    let parsed = parse_from(env::args_os());

    let (verbose, color) = match &parsed {
        Parsed::Cli(cli) => (cli.verbose, cli.color),
        _ => (false, ColorChoice::Auto),
    };
    setup_logging(verbose);
    let mut alerter = Alerter::stderr(Palette::detect(color));

    // help and version must not depend on the filesystem being usable
    let paths = AppPaths::discover();
    print!("{}", banner(paths.as_ref().ok().map(|p| p.install_dir.as_path())));

    match parsed {
        Parsed::Cli(cli) => match paths {
            Ok(paths) => run(cli, paths, &mut alerter),
            Err(e) => fail(&mut alerter, &e.to_string()),
        },
        Parsed::NoArguments => {
            print!("{}", render_help());
            ExitCode::FAILURE
        }
        Parsed::Early(e) => {
            // help and version go to stdout and succeed, usage errors do not
            let code = if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = e.print();
            code
        }
    }
}
