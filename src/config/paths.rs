//! Path resolution for serein configuration and data files.
//!
//! All serein data is stored in `~/.serein/`:
//! - `config.yaml` - Main configuration file
//! - `serein.db` - SQLite database for mood and diary entries
//! - `tasks.json` - Day planner tasks (JSON array)
//! - `mixer.json` - Ambient-sound mixer state
//! - `cache/` - Cached data (completions, etc.)

use std::path::PathBuf;

use crate::error::SereinError;

/// Paths to serein configuration and data directories.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.serein/`
    pub root: PathBuf,
    /// Config file: `~/.serein/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.serein/serein.db`
    pub database: PathBuf,
    /// Task store: `~/.serein/tasks.json`
    pub tasks: PathBuf,
    /// Mixer state: `~/.serein/mixer.json`
    pub mixer: PathBuf,
    /// Cache directory: `~/.serein/cache/`
    pub cache: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SereinError> {
        let home = std::env::var("HOME")
            .map_err(|_| SereinError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".serein")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("serein.db"),
            tasks: root.join("tasks.json"),
            mixer: root.join("mixer.json"),
            cache: root.join("cache"),
            root,
        }
    }

    /// Ensure all directories exist, creating them if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), SereinError> {
        for dir in [&self.root, &self.cache] {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    SereinError::Config(format!("Failed to create directory {:?}: {}", dir, e))
                })?;
            }
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".serein"))
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-serein");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.database, root.join("serein.db"));
        assert_eq!(paths.tasks, root.join("tasks.json"));
        assert_eq!(paths.mixer, root.join("mixer.json"));
        assert_eq!(paths.cache, root.join("cache"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested"));

        paths.ensure_dirs().unwrap();

        assert!(paths.root.exists());
        assert!(paths.cache.exists());
    }
}
