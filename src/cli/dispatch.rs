//! Command Dispatch
//!
//! Routes a parsed subcommand to the scaffolder or the workflow engine.
//! The dispatcher never ends the process: failures come back as
//! [`MetafuncError`] and the exit code is chosen by the caller.

use std::io::Write;
use std::path::Path;

use chrono::Local;
use log::{debug, info};

use super::args::{render_help, Command};
use super::banner::{rule, HELP_DESCRIPTION};
use crate::alert::Alerter;
use crate::config::{load_config, AppPaths};
use crate::engine::{Invocation, RunSettings, WorkflowEngine};
use crate::error::{MetafuncError, Result};
use crate::scaffold::scaffold;
use crate::APP_NAME;

/// Timestamp layout for command headers.
const HEADER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// How a successfully dispatched command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The engine ran and reported failure
    EngineFailed,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::EngineFailed => 1,
        }
    }
}

/// Executes subcommands against a fixed set of paths and an engine.
pub struct Dispatcher<E: WorkflowEngine> {
    paths: AppPaths,
    engine: E,
}

impl<E: WorkflowEngine> Dispatcher<E> {
    pub fn new(paths: AppPaths, engine: E) -> Self {
        Self { paths, engine }
    }

    /// Runs one subcommand.
    ///
    /// Regular output goes to `out`, status alerts to `alerter`.
    pub fn dispatch<O: Write, A: Write>(
        &self,
        command: Option<&Command>,
        out: &mut O,
        alerter: &mut Alerter<A>,
    ) -> Result<Outcome> {
        match command {
            Some(Command::Help) => self.help(out),
            Some(Command::Setup { directoryname }) => self.setup(directoryname, out, alerter),
            Some(Command::Run {
                configfile,
                dry_run,
                force,
            }) => self.run(configfile, *dry_run, *force, out, alerter),
            None => Err(MetafuncError::UnrecognizedCommand("no subcommand given".to_string())),
        }
    }

    fn help<O: Write>(&self, out: &mut O) -> Result<Outcome> {
        write!(out, "{}", render_help())?;
        write!(out, "{}", HELP_DESCRIPTION)?;
        Ok(Outcome::Success)
    }

    fn setup<O: Write, A: Write>(&self, name: &str, out: &mut O, alerter: &mut Alerter<A>) -> Result<Outcome> {
        let dest = self.paths.resolve(name);

        writeln!(out, "{} setup:", APP_NAME)?;
        writeln!(out, "\tExecution time: {}", Local::now().format(HEADER_TIME_FORMAT))?;
        writeln!(out, "\tDestination: {}", dest.display())?;
        writeln!(out, "{}", rule())?;
        out.flush()?;

        let src = self.paths.template_dir();
        debug!("Copying template {} -> {}", src.display(), dest.display());
        scaffold(&src, &dest)?;

        alerter.success(&format!(
            "Example directory for a {} run created at: \"{}\".",
            APP_NAME,
            dest.display()
        ))?;
        Ok(Outcome::Success)
    }

    fn run<O: Write, A: Write>(
        &self,
        configfile: &Path,
        dry_run: bool,
        force: bool,
        out: &mut O,
        alerter: &mut Alerter<A>,
    ) -> Result<Outcome> {
        let workflow_file = self.paths.locate_workflow()?;

        let config_path = self.paths.resolve(configfile);
        if !config_path.exists() {
            return Err(MetafuncError::ConfigNotFound(configfile.to_path_buf()));
        }

        writeln!(out, "{} run:", APP_NAME)?;
        writeln!(out, "\tExecution time: {}", Local::now().format(HEADER_TIME_FORMAT))?;
        writeln!(out, "\tSnakefile: {}", workflow_file.display())?;
        writeln!(out, "\tConfig-file: {}", config_path.display())?;
        writeln!(out, "{}", rule())?;
        out.flush()?;

        let config = load_config(&config_path)?;
        let settings = RunSettings::from_config(&config)?;

        let invocation = Invocation::new(workflow_file, config_path, settings)
            .with_dry_run(dry_run)
            .with_force_all(force)
            .with_working_dir(&self.paths.cwd);

        info!(
            "Starting workflow (cores: {}, dry run: {}, force: {})",
            invocation.settings.cores, dry_run, force
        );

        if self.engine.execute(&invocation)? {
            alerter.success("Run finished successfully.")?;
            Ok(Outcome::Success)
        } else {
            debug!("Workflow engine reported failure");
            Ok(Outcome::EngineFailed)
        }
    }
}
