//! Loading of default-listener configuration from JSON or YAML files.

pub mod config;

pub use config::{ConfigManager, DefaultsConfig};
