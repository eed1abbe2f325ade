use crate::error::{Result, TodozError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "todos.json";

/// Configuration for todoz, stored as config.json beside the data file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodozConfig {
    /// File name of the todo list inside the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for TodozConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }
}

impl TodozConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TodozError::Io)?;
        let config: TodozConfig =
            serde_json::from_str(&content).map_err(TodozError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TodozError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TodozError::Serialization)?;
        fs::write(config_path, content).map_err(TodozError::Io)?;
        Ok(())
    }

    pub fn data_file(&self) -> &str {
        &self.data_file
    }

    pub fn set_data_file(&mut self, name: &str) {
        self.data_file = name.to_string();
    }
}
