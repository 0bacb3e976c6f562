use crate::utils::error::{QueueError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// File form of a queue's default listeners: event name to handler name.
///
/// Handler names are resolved against a
/// [`HandlerRegistry`](crate::event::HandlerRegistry) by
/// [`Defaults::from_config`](crate::event::Defaults::from_config).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub defaults: BTreeMap<String, String>,
}

/// Reject empty or whitespace-only event names for default listeners.
pub(crate) fn validate_event_name(event_name: &str) -> Result<()> {
    if event_name.trim().is_empty() {
        return Err(QueueError::Config(
            "Default listener has an empty event name".to_string(),
        ));
    }
    Ok(())
}

pub struct ConfigManager;

impl ConfigManager {
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<DefaultsConfig> {
        let path_ref = path.as_ref();
        let extension = path_ref
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| QueueError::Config("File has no extension".to_string()))?;

        let config_str = fs::read_to_string(path_ref)
            .map_err(|e| QueueError::Config(format!("Failed to read config file: {}", e)))?;

        let config: DefaultsConfig = match extension {
            "json" => serde_json::from_str(&config_str)?,
            "yaml" | "yml" => serde_yaml::from_str(&config_str)?,
            _ => {
                return Err(QueueError::Config(format!(
                    "Unsupported file extension: {}",
                    extension
                )))
            }
        };

        Self::validate_config(&config)?;
        log::debug!(
            "Loaded {} default handler(s) for '{}' from {}",
            config.defaults.len(),
            config.name,
            path_ref.display()
        );

        Ok(config)
    }

    pub fn validate_config(config: &DefaultsConfig) -> Result<()> {
        for (event_name, handler_name) in &config.defaults {
            validate_event_name(event_name)?;
            if handler_name.trim().is_empty() {
                return Err(QueueError::Config(format!(
                    "Event '{}' has an empty handler name",
                    event_name
                )));
            }
        }

        Ok(())
    }
}
