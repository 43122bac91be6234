//! Path management for eventto
//!
//! ## Path Resolution Order
//!
//! 1. `EVENTTO_DATA_DIR` environment variable (if set)
//! 2. The platform config directory joined with `eventto`
//!    (`~/.config/eventto` on Linux, `%APPDATA%\eventto` on Windows)

use std::path::PathBuf;

use crate::error::EventtoError;

/// Manages all paths used by eventto
#[derive(Debug, Clone)]
pub struct EventtoPaths {
    /// Base directory for all eventto data
    base_dir: PathBuf,
}

impl EventtoPaths {
    /// Create a new EventtoPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no platform config directory can be determined.
    pub fn new() -> Result<Self, EventtoError> {
        let base_dir = if let Ok(custom) = std::env::var("EVENTTO_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create EventtoPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the table snapshots
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn events_file(&self) -> PathBuf {
        self.table_file("events")
    }

    pub fn budget_categories_file(&self) -> PathBuf {
        self.table_file("budget_categories")
    }

    pub fn expenses_file(&self) -> PathBuf {
        self.table_file("expenses")
    }

    pub fn vendors_file(&self) -> PathBuf {
        self.table_file("vendors")
    }

    pub fn attendees_file(&self) -> PathBuf {
        self.table_file("attendees")
    }

    pub fn guests_file(&self) -> PathBuf {
        self.table_file("guests")
    }

    fn table_file(&self, table: &str) -> PathBuf {
        self.data_dir().join(format!("{}.json", table))
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), EventtoError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| EventtoError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| EventtoError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if eventto has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, EventtoError> {
    let dirs = directories::BaseDirs::new()
        .ok_or_else(|| EventtoError::Config("Could not determine config directory".into()))?;
    Ok(dirs.config_dir().join("eventto"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EventtoPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var("EVENTTO_DATA_DIR", custom_path);

        let paths = EventtoPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var("EVENTTO_DATA_DIR");
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EventtoPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_table_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EventtoPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.budget_categories_file(),
            temp_dir.path().join("data").join("budget_categories.json")
        );
        assert_eq!(
            paths.guests_file(),
            temp_dir.path().join("data").join("guests.json")
        );
    }
}
