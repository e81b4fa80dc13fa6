//! Run Configuration Loader
//!
//! Reads the user's YAML config file into a string-keyed mapping.
//! Keys are only checked when a consumer asks for them, so a config that
//! lacks `cores` loads fine and fails at engine invocation.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;
use serde_yaml::Value;

use crate::error::{MetafuncError, Result};

/// A loaded YAML configuration document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Config {
    values: BTreeMap<String, Value>,
}

impl Config {
    /// Parses a config document from YAML text.
    ///
    /// The document must be a non-empty mapping with string keys.
    /// `origin` is only used to label errors.
    pub fn from_yaml(text: &str, origin: &Path) -> Result<Self> {
        let document: Value = serde_yaml::from_str(text).map_err(|e| yaml_error(origin, e))?;

        let mapping = match &document {
            Value::Mapping(mapping) => mapping,
            Value::Null => return Err(malformed(origin, "document is empty")),
            _ => return Err(malformed(origin, "top level must be a mapping")),
        };
        if let Some(key) = mapping.keys().find(|k| !k.is_string()) {
            return Err(malformed(origin, format!("key {:?} is not a string", key)));
        }

        serde_yaml::from_value(document).map_err(|e| yaml_error(origin, e))
    }

    /// Returns the raw value for a key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Returns the value for a key or a missing-key error.
    pub fn require(&self, key: &str) -> Result<&Value> {
        self.get(key)
            .ok_or_else(|| MetafuncError::MissingKey(key.to_string()))
    }

    pub fn require_bool(&self, key: &str) -> Result<bool> {
        self.require(key)?
            .as_bool()
            .ok_or_else(|| invalid(key, "a boolean"))
    }

    /// A null value reads as the empty string.
    pub fn require_str(&self, key: &str) -> Result<String> {
        match self.require(key)? {
            Value::String(s) => Ok(s.clone()),
            Value::Null => Ok(String::new()),
            _ => Err(invalid(key, "a string")),
        }
    }

    pub fn require_u64(&self, key: &str) -> Result<u64> {
        self.require(key)?
            .as_u64()
            .ok_or_else(|| invalid(key, "a non-negative integer"))
    }

    /// Returns a path-valued key, if present.
    pub fn path(&self, key: &str) -> Option<PathBuf> {
        self.get(key).and_then(Value::as_str).map(PathBuf::from)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn yaml_error(origin: &Path, source: serde_yaml::Error) -> MetafuncError {
    MetafuncError::Yaml {
        path: origin.to_path_buf(),
        source,
    }
}

fn malformed(origin: &Path, reason: impl Into<String>) -> MetafuncError {
    MetafuncError::MalformedConfig {
        path: origin.to_path_buf(),
        reason: reason.into(),
    }
}

fn invalid(key: &str, expected: &'static str) -> MetafuncError {
    MetafuncError::InvalidKey {
        key: key.to_string(),
        expected,
    }
}

/// Loads a configuration file from disk.
///
/// # Example
///
/// ```rust,no_run
/// use metafunc::config::load_config;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = load_config("config.yaml")?;
///     println!("{} keys", config.len());
///     Ok(())
/// }
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    info!("Loading config from: {}", path.display());

    let text = fs::read_to_string(path).map_err(|e| MetafuncError::io(path, e))?;
    debug!("Config content loaded ({} bytes)", text.len());

    let config = Config::from_yaml(&text, path)?;
    debug!("Config keys: {:?}", config.keys().collect::<Vec<_>>());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Config> {
        Config::from_yaml(text, Path::new("test.yaml"))
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config("/nonexistent/path/config.yaml");
        assert!(matches!(result, Err(MetafuncError::Io { .. })));
    }

    #[test]
    fn test_load_config_valid_yaml() {
        use tempfile::tempdir;

        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(
            &config_path,
            "resultdir: results\ncores: 2\nsamples:\n  - a\n  - b\n",
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.len(), 3);
        assert_eq!(config.require_u64("cores").unwrap(), 2);
        assert_eq!(config.path("resultdir"), Some(PathBuf::from("results")));
        assert!(config.get("samples").unwrap().is_sequence());
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(parse("this is not valid yaml: [[["), Err(MetafuncError::Yaml { .. })));
    }

    #[test]
    fn test_top_level_must_be_mapping() {
        assert!(matches!(parse("- a\n- b\n"), Err(MetafuncError::MalformedConfig { .. })));
        assert!(matches!(parse("42"), Err(MetafuncError::MalformedConfig { .. })));
    }

    #[test]
    fn test_empty_document_rejected() {
        for text in ["", "# only a comment\n", "---\n"] {
            let err = parse(text).unwrap_err();
            assert!(
                err.to_string().contains("document is empty"),
                "{:?} gave {}",
                text,
                err
            );
        }
    }

    #[test]
    fn test_non_string_keys_rejected() {
        for text in ["1: a\n", "true: a\n", "cores: 1\n2: b\n"] {
            assert!(
                matches!(parse(text), Err(MetafuncError::MalformedConfig { .. })),
                "{:?} should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_quoted_numeric_key_is_a_string() {
        let config = parse("\"1\": a\n").unwrap();
        assert_eq!(config.keys().collect::<Vec<_>>(), vec!["1"]);
    }

    #[test]
    fn test_missing_key_only_fails_on_lookup() {
        let config = parse("use_conda: true\n").unwrap();
        assert!(config.require_bool("use_conda").unwrap());

        let err = config.require_u64("cores").unwrap_err();
        assert!(matches!(err, MetafuncError::MissingKey(ref k) if k == "cores"));
    }

    #[test]
    fn test_wrong_type_names_key() {
        let config = parse("cores: four\nuse_conda: 1\n").unwrap();

        let err = config.require_u64("cores").unwrap_err();
        assert_eq!(err.to_string(), "Config key 'cores' must be a non-negative integer");
        assert!(config.require_bool("use_conda").is_err());
    }

    #[test]
    fn test_null_string_reads_empty() {
        let config = parse("singularity_args:\n").unwrap();
        assert_eq!(config.require_str("singularity_args").unwrap(), "");
    }

    #[test]
    fn test_empty_mapping() {
        let config = parse("{}").unwrap();
        assert!(config.is_empty());
    }
}
