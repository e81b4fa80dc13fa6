//! Installation Paths
//!
//! Where the bundled resources live and which engine executable to call.
//! Resolved once in `main` and handed to the dispatcher, so tests can
//! point everything at a temporary directory.
//!
//! # Resolution Priority
//!
//! Install directory:
//! 1. `METAFUNC_HOME` environment variable
//! 2. Directory of the running executable
//!
//! Engine executable:
//! 1. `METAFUNC_SNAKEMAKE` environment variable
//! 2. `snakemake` next to the running executable
//! 3. `snakemake` from the system PATH

use std::env;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{MetafuncError, Result};

/// Overrides the install directory.
pub const HOME_ENV: &str = "METAFUNC_HOME";

/// Overrides the engine executable.
pub const ENGINE_ENV: &str = "METAFUNC_SNAKEMAKE";

/// Default engine executable name.
pub const ENGINE_PROGRAM: &str = "snakemake";

/// Name of the workflow definition file.
pub const WORKFLOW_FILE: &str = "Snakefile";

/// Name of the bundled template directory.
pub const TEMPLATE_DIR: &str = "example";

/// Filesystem locations used by a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    /// Directory holding the bundled template and workflow file
    pub install_dir: PathBuf,
    /// Base for relative setup destinations
    pub cwd: PathBuf,
    /// Executable invoked to run the workflow
    pub engine_program: PathBuf,
}

impl AppPaths {
    pub fn new(install_dir: impl Into<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            install_dir: install_dir.into(),
            cwd: cwd.into(),
            engine_program: PathBuf::from(ENGINE_PROGRAM),
        }
    }

    /// Resolves paths from the process environment.
    pub fn discover() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| MetafuncError::io(".", e))?;
        let exe_dir = executable_dir()?;

        let install_dir = match env::var_os(HOME_ENV) {
            Some(home) => {
                let home = PathBuf::from(home);
                info!("Using {} install directory: {}", HOME_ENV, home.display());
                home
            }
            None => exe_dir.clone(),
        };

        let engine_program = match env::var_os(ENGINE_ENV) {
            Some(program) => PathBuf::from(program),
            None => {
                let bundled = exe_dir.join(ENGINE_PROGRAM);
                if bundled.exists() {
                    bundled
                } else {
                    PathBuf::from(ENGINE_PROGRAM)
                }
            }
        };
        debug!("Engine executable: {}", engine_program.display());

        Ok(Self {
            install_dir,
            cwd,
            engine_program,
        })
    }

    /// Source directory copied by `setup`.
    pub fn template_dir(&self) -> PathBuf {
        self.install_dir.join(TEMPLATE_DIR)
    }

    /// Candidate workflow files, in lookup order.
    pub fn workflow_candidates(&self) -> [PathBuf; 2] {
        [
            self.install_dir.join(WORKFLOW_FILE),
            self.install_dir.join("..").join(WORKFLOW_FILE),
        ]
    }

    /// Returns the first existing workflow file.
    pub fn locate_workflow(&self) -> Result<PathBuf> {
        let candidates = self.workflow_candidates();
        for candidate in &candidates {
            if candidate.exists() {
                debug!("Found workflow file: {}", candidate.display());
                return Ok(candidate.clone());
            }
            debug!("No workflow file at: {}", candidate.display());
        }
        Err(MetafuncError::WorkflowNotFound {
            candidates: candidates.to_vec(),
        })
    }

    /// Resolves a user-supplied name against the working directory.
    pub fn resolve(&self, name: impl AsRef<Path>) -> PathBuf {
        self.cwd.join(name)
    }
}

fn executable_dir() -> Result<PathBuf> {
    let exe = env::current_exe().map_err(|e| MetafuncError::io("<current executable>", e))?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}
