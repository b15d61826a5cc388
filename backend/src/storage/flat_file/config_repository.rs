//! # App Config Repository
//!
//! Optional `kidtask.yaml` in the working directory. Every key can be left
//! out; a missing file means all defaults and is never created for you.
//!
//! ```yaml
//! data_directory: "."
//! tasks_file: "Tasks.txt"
//! wishes_file: "Wishes.txt"
//! bind_address: "127.0.0.1:3000"
//! allowed_origin: "http://localhost:8080"
//! ```

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::connection::{FlatFileConnection, DEFAULT_TASKS_FILE, DEFAULT_WISHES_FILE};

pub const CONFIG_FILE_NAME: &str = "kidtask.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the task and wish files
    pub data_directory: PathBuf,
    pub tasks_file: String,
    pub wishes_file: String,
    /// Address the HTTP adapter listens on
    pub bind_address: String,
    /// Origin allowed by CORS, i.e. where the UI is served from
    pub allowed_origin: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_directory: PathBuf::from("."),
            tasks_file: DEFAULT_TASKS_FILE.to_string(),
            wishes_file: DEFAULT_WISHES_FILE.to_string(),
            bind_address: "127.0.0.1:3000".to_string(),
            allowed_origin: "http://localhost:8080".to_string(),
        }
    }
}

impl AppConfig {
    pub fn connection(&self) -> FlatFileConnection {
        FlatFileConnection::with_file_names(&self.data_directory, &self.tasks_file, &self.wishes_file)
    }
}

#[derive(Debug, Clone)]
pub struct ConfigRepository {
    path: PathBuf,
}

impl ConfigRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// `kidtask.yaml` in the current working directory
    pub fn in_working_directory() -> Self {
        Self::new(CONFIG_FILE_NAME)
    }

    pub fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            info!("No config file at {:?}, using defaults", self.path);
            return Ok(AppConfig::default());
        }

        let yaml_content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read config file {:?}", self.path))?;
        if yaml_content.trim().is_empty() {
            return Ok(AppConfig::default());
        }
        let config: AppConfig = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Failed to parse config file {:?}", self.path))?;
        debug!("Loaded config from {:?}: {:?}", self.path, config);
        Ok(config)
    }
}
