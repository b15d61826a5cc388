use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_TASKS_FILE: &str = "Tasks.txt";
pub const DEFAULT_WISHES_FILE: &str = "Wishes.txt";

/// FlatFileConnection resolves where the task and wish files live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatFileConnection {
    base_directory: PathBuf,
    tasks_file: String,
    wishes_file: String,
}

impl FlatFileConnection {
    /// Connection using the default file names inside `base_directory`.
    ///
    /// Nothing is created on disk until the first write.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Self {
        Self::with_file_names(base_directory, DEFAULT_TASKS_FILE, DEFAULT_WISHES_FILE)
    }

    pub fn with_file_names<P: AsRef<Path>>(
        base_directory: P,
        tasks_file: &str,
        wishes_file: &str,
    ) -> Self {
        Self {
            base_directory: base_directory.as_ref().to_path_buf(),
            tasks_file: tasks_file.to_string(),
            wishes_file: wishes_file.to_string(),
        }
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub fn tasks_path(&self) -> PathBuf {
        self.base_directory.join(&self.tasks_file)
    }

    pub fn wishes_path(&self) -> PathBuf {
        self.base_directory.join(&self.wishes_file)
    }

    /// Create the base directory if it doesn't exist yet
    pub fn ensure_base_directory(&self) -> Result<()> {
        if !self.base_directory.exists() {
            fs::create_dir_all(&self.base_directory).with_context(|| {
                format!("Failed to create data directory {:?}", self.base_directory)
            })?;
            info!("Created data directory: {:?}", self.base_directory);
        }
        Ok(())
    }
}
