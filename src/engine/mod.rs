//! Workflow Engine Invocation
//!
//! Everything metafunc hands to the external workflow engine, and the
//! trait the dispatcher calls it through.
//!
//! - [`snakemake`]: the production engine, run as a child process

pub mod snakemake;

use std::path::PathBuf;

use log::warn;

use crate::config::Config;
use crate::error::{MetafuncError, Result};

pub use snakemake::SnakemakeEngine;

/// Engine options drawn from the run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub use_singularity: bool,
    pub singularity_args: String,
    pub use_conda: bool,
    pub cores: u64,
}

impl RunSettings {
    /// Reads the engine keys from a loaded config.
    ///
    /// Every key is required; nothing is defaulted.
    pub fn from_config(config: &Config) -> Result<Self> {
        let settings = Self {
            use_singularity: config.require_bool("use_singularity")?,
            singularity_args: config.require_str("singularity_args")?,
            use_conda: config.require_bool("use_conda")?,
            cores: config.require_u64("cores")?,
        };

        if settings.cores == 0 {
            return Err(MetafuncError::InvalidKey {
                key: "cores".to_string(),
                expected: "a positive integer",
            });
        }

        let available = num_cpus::get() as u64;
        if settings.cores > available {
            warn!(
                "Config requests {} cores but only {} are available",
                settings.cores, available
            );
        }

        Ok(settings)
    }
}

/// A single request to run a workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub workflow_file: PathBuf,
    pub config_files: Vec<PathBuf>,
    /// Echo shell commands as the engine runs them
    pub print_shell_commands: bool,
    pub dry_run: bool,
    pub force_all: bool,
    /// Directory the engine runs in; inherits ours when unset
    pub working_dir: Option<PathBuf>,
    pub settings: RunSettings,
}

impl Invocation {
    pub fn new(workflow_file: impl Into<PathBuf>, config_file: impl Into<PathBuf>, settings: RunSettings) -> Self {
        Self {
            workflow_file: workflow_file.into(),
            config_files: vec![config_file.into()],
            print_shell_commands: true,
            dry_run: false,
            force_all: false,
            working_dir: None,
            settings,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_force_all(mut self, force_all: bool) -> Self {
        self.force_all = force_all;
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }
}

/// Something that can execute a workflow.
///
/// `Ok(true)` means the workflow succeeded, `Ok(false)` that the engine
/// ran and reported failure. `Err` means the engine could not be run.
pub trait WorkflowEngine {
    fn execute(&self, invocation: &Invocation) -> Result<bool>;
}
