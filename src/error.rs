//! Error Types
//!
//! Every failure the front end can report. Library code returns
//! [`Result`]; only the binary decides how an error ends the process.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while dispatching a metafunc command.
#[derive(Error, Debug)]
pub enum MetafuncError {
    #[error("Cannot find configfile {}. EXIT.", .0.display())]
    ConfigNotFound(PathBuf),

    #[error(
        "Cannot find Snakefile at any of the following locations:\n{}",
        format_candidates(.candidates)
    )]
    WorkflowNotFound { candidates: Vec<PathBuf> },

    #[error("Destination example directory at \"{}\" already exists. EXIT.", .0.display())]
    DestinationExists(PathBuf),

    #[error("Mode not recognized: {0}. EXIT")]
    UnrecognizedCommand(String),

    #[error("Missing required config key '{0}'")]
    MissingKey(String),

    #[error("Config key '{key}' must be {expected}")]
    InvalidKey { key: String, expected: &'static str },

    #[error("Failed to parse config file '{}': {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid config file '{}': {reason}", path.display())]
    MalformedConfig { path: PathBuf, reason: String },

    #[error("I/O error at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to launch workflow engine '{}': {source}", program.display())]
    EngineSpawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MetafuncError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

fn format_candidates(candidates: &[PathBuf]) -> String {
    candidates
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub type Result<T> = std::result::Result<T, MetafuncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_not_found_lists_candidates() {
        let err = MetafuncError::WorkflowNotFound {
            candidates: vec![PathBuf::from("/opt/a/Snakefile"), PathBuf::from("/opt/Snakefile")],
        };
        let msg = err.to_string();
        assert!(msg.contains("/opt/a/Snakefile\n/opt/Snakefile"));
    }

    #[test]
    fn test_missing_key_message() {
        let err = MetafuncError::MissingKey("cores".to_string());
        assert_eq!(err.to_string(), "Missing required config key 'cores'");
    }

    #[test]
    fn test_destination_exists_message() {
        let err = MetafuncError::DestinationExists(PathBuf::from("/tmp/example"));
        assert!(err.to_string().contains("\"/tmp/example\" already exists"));
    }
}
