use super::DataStore;
use crate::error::{Result, TodozError};
use crate::model::Todo;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "todos.json";

pub struct FileStore {
    root: PathBuf,
    data_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }

    pub fn with_data_file(mut self, name: &str) -> Self {
        self.data_file = name.to_string();
        self
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.data_file)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(TodozError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Todo>> {
        let path = self.data_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path).map_err(TodozError::Io)?;
        // A malformed data file degrades to an empty list instead of
        // failing startup; a never-used store looks the same.
        Ok(serde_json::from_str(&content).unwrap_or_default())
    }

    fn save(&mut self, todos: &[Todo]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(todos).map_err(TodozError::Serialization)?;
        fs::write(self.data_path(), content).map_err(TodozError::Io)?;
        Ok(())
    }
}
