//! Configuration Module
//!
//! - [`loader`]: the user's YAML run configuration
//! - [`paths`]: install directory, working directory and engine executable

pub mod loader;
pub mod paths;

pub use loader::{load_config, Config};
pub use paths::AppPaths;
