//! Application configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::CoreError;
use crate::Result;

const DATA_DIR_ENV: &str = "TASKFLOW_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the database file
    pub database_path: PathBuf,
    /// Fallback tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("taskflow.db"),
            log_filter: "info".to_string(),
        }
    }

    pub fn data_dir() -> PathBuf {
        std::env::var_os(DATA_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::data_local_dir().map(|d| d.join("TaskFlow")))
            .unwrap_or_else(|| PathBuf::from(".taskflow"))
    }

    /// Parses a JSON config file.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Installs the tracing subscriber, with `log_filter` as the fallback
    /// when `RUST_LOG` is unset.
    pub fn init_logging(&self) {
        crate::init_logging_with(&self.log_filter);
    }

    pub fn validate(&self) -> Result<()> {
        if self.database_path.as_os_str().is_empty() {
            return Err(CoreError::Config("database_path is empty".to_string()));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

mod dirs {
    use std::path::PathBuf;

    pub fn data_local_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("LOCALAPPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_places_database_in_data_dir() {
        let config = Config::new(PathBuf::from("/tmp/tf"));
        assert_eq!(config.database_path, PathBuf::from("/tmp/tf/taskflow.db"));
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_from_json() {
        let config =
            Config::from_json(r#"{"database_path":"/data/app.db","log_filter":"debug"}"#).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/data/app.db"));
        assert_eq!(config.log_filter, "debug");

        let err = Config::from_json(r#"{"database_path":"","log_filter":"info"}"#).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
        assert!(Config::from_json("{").is_err());
    }

    #[test]
    fn test_init_logging_uses_configured_filter() {
        let config = Config {
            log_filter: "taskflow_store=debug".to_string(),
            ..Config::new(PathBuf::from("/tmp/tf"))
        };
        config.init_logging();
        // A second install is ignored rather than panicking.
        config.init_logging();
        assert!(tracing::enabled!(target: "taskflow_store", tracing::Level::DEBUG)
            || std::env::var_os("RUST_LOG").is_some());
    }
}
