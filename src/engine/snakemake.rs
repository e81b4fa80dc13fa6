//! Snakemake Engine
//!
//! Runs the Snakemake executable as a child process with inherited stdio,
//! so the engine's own progress output reaches the user unchanged.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use log::{debug, info};

use super::{Invocation, WorkflowEngine};
use crate::error::{MetafuncError, Result};

/// Delegates workflow execution to a Snakemake executable.
#[derive(Debug, Clone)]
pub struct SnakemakeEngine {
    program: PathBuf,
}

impl SnakemakeEngine {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Builds the command line for an invocation.
    pub fn command(&self, invocation: &Invocation) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(arguments(invocation));

        if let Some(dir) = &invocation.working_dir {
            cmd.current_dir(dir);
            debug!("Executing in directory: {}", dir.display());
        }
        cmd
    }
}

impl WorkflowEngine for SnakemakeEngine {
    fn execute(&self, invocation: &Invocation) -> Result<bool> {
        let mut cmd = self.command(invocation);
        info!("Invoking workflow engine: {}", self.program.display());
        debug!("Engine command: {:?}", cmd);

        let status = cmd.status().map_err(|source| MetafuncError::EngineSpawn {
            program: self.program.clone(),
            source,
        })?;

        debug!("Engine exited with status: {:?}", status.code());
        Ok(status.success())
    }
}

/// Translates an invocation into Snakemake command-line arguments.
pub fn arguments(invocation: &Invocation) -> Vec<OsString> {
    let settings = &invocation.settings;
    let mut args: Vec<OsString> = vec![
        "--snakefile".into(),
        invocation.workflow_file.clone().into_os_string(),
        "--cores".into(),
        settings.cores.to_string().into(),
    ];

    if !invocation.config_files.is_empty() {
        args.push("--configfile".into());
        args.extend(invocation.config_files.iter().map(|p| p.clone().into_os_string()));
    }

    if invocation.print_shell_commands {
        args.push("--printshellcmds".into());
    }
    if invocation.dry_run {
        args.push("--dry-run".into());
    }
    if invocation.force_all {
        args.push("--forceall".into());
    }
    if settings.use_singularity {
        args.push("--use-singularity".into());
        if !settings.singularity_args.trim().is_empty() {
            args.push("--singularity-args".into());
            args.push(settings.singularity_args.clone().into());
        }
    }
    if settings.use_conda {
        args.push("--use-conda".into());
    }

    args
}
