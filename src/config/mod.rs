//! Configuration management for the wayfarer application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. It supports configuring
//! the journal directory and the backup slot path.
//!
//! # Environment Variables
//!
//! - `WAYFARER_DIR`: Path to the journal directory (defaults to ~/Documents/wayfarer)
//! - `WAYFARER_BACKUP`: Path of the backup slot (defaults to <dir>/backup.tar.gz)
//! - `HOME`: Used for expanding the default journal directory path

use crate::constants::{
    DEFAULT_BACKUP_FILE, DEFAULT_JOURNAL_SUBDIR, ENV_VAR_HOME, ENV_VAR_WAYFARER_BACKUP,
    ENV_VAR_WAYFARER_DIR, JOURNAL_FILE, MEDIA_SUBDIR,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the wayfarer application.
///
/// Holds the journal directory (which contains the journal data file and the
/// media blob directory) and the path of the single backup slot.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use wayfarer::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     journal_dir: PathBuf::from("/path/to/journal"),
///     backup_path: PathBuf::from("/path/to/backup.tar.gz"),
/// };
/// assert!(config.validate().is_ok());
/// ```
pub struct Config {
    /// Directory where journal data and media blobs are stored.
    ///
    /// Loaded from the WAYFARER_DIR environment variable with a fallback to
    /// ~/Documents/wayfarer if not specified.
    pub journal_dir: PathBuf,

    /// Path of the fixed backup slot.
    ///
    /// Loaded from WAYFARER_BACKUP, defaulting to `backup.tar.gz` inside the
    /// journal directory.
    pub backup_path: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("journal_dir", &"[REDACTED_PATH]")
            .field("backup_path", &"[REDACTED_PATH]")
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// Paths are expanded with `shellexpand` to handle `~` and environment
    /// variable references.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if path expansion fails or a resulting path
    /// is empty.
    pub fn load() -> AppResult<Self> {
        let journal_dir_str = env::var(ENV_VAR_WAYFARER_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_else(|_| "".to_string());
            format!("{}/{}", home, DEFAULT_JOURNAL_SUBDIR)
        });
        let journal_dir = expand_path(&journal_dir_str)?;

        let backup_path = match env::var(ENV_VAR_WAYFARER_BACKUP) {
            Ok(path) => expand_path(&path)?,
            Err(_) => journal_dir.join(DEFAULT_BACKUP_FILE),
        };

        let config = Config {
            journal_dir,
            backup_path,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if either path is empty or the journal
    /// directory is not absolute.
    pub fn validate(&self) -> AppResult<()> {
        if self.journal_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Journal directory path is empty".to_string(),
            ));
        }
        if !self.journal_dir.is_absolute() {
            return Err(AppError::Config(
                "Journal directory must be an absolute path".to_string(),
            ));
        }
        if self.backup_path.as_os_str().is_empty() {
            return Err(AppError::Config("Backup slot path is empty".to_string()));
        }
        Ok(())
    }

    /// Path of the journal data file inside the journal directory.
    pub fn journal_file(&self) -> PathBuf {
        self.journal_dir.join(JOURNAL_FILE)
    }

    /// Directory holding media blobs inside the journal directory.
    pub fn media_dir(&self) -> PathBuf {
        self.journal_dir.join(MEDIA_SUBDIR)
    }
}

/// Expands `~` and environment variables in a path string.
fn expand_path(raw: &str) -> AppResult<PathBuf> {
    let expanded = shellexpand::full(raw)
        .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
    Ok(PathBuf::from(expanded.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn setup() {
        env::remove_var(ENV_VAR_WAYFARER_DIR);
        env::remove_var(ENV_VAR_WAYFARER_BACKUP);
    }

    #[test]
    fn test_debug_impl_redacts_paths() {
        let config = Config {
            journal_dir: PathBuf::from("/home/username/private/journal"),
            backup_path: PathBuf::from("/home/username/private/backup.tar.gz"),
        };
        let debug_output = format!("{:?}", config);
        assert!(debug_output.contains("[REDACTED_PATH]"));
        assert!(!debug_output.contains("/home/username/private"));
    }

    #[test]
    #[serial]
    fn test_load_with_custom_dir() {
        setup();
        let temp_dir = tempdir().unwrap();
        let dir_path = temp_dir.path().to_string_lossy().to_string();

        env::set_var(ENV_VAR_WAYFARER_DIR, &dir_path);
        let config = Config::load().unwrap();
        env::remove_var(ENV_VAR_WAYFARER_DIR);

        assert_eq!(config.journal_dir, PathBuf::from(&dir_path));
        // Backup slot defaults into the journal directory
        assert_eq!(
            config.backup_path,
            PathBuf::from(dir_path).join(DEFAULT_BACKUP_FILE)
        );
    }

    #[test]
    #[serial]
    fn test_load_with_custom_backup_path() {
        setup();
        let temp_dir = tempdir().unwrap();
        let dir_path = temp_dir.path().to_string_lossy().to_string();
        let backup = temp_dir.path().join("slots/main.tar.gz");

        env::set_var(ENV_VAR_WAYFARER_DIR, &dir_path);
        env::set_var(ENV_VAR_WAYFARER_BACKUP, backup.to_string_lossy().to_string());
        let config = Config::load().unwrap();
        setup();

        assert_eq!(config.backup_path, backup);
    }

    #[test]
    fn test_validate_relative_journal_dir() {
        let config = Config {
            journal_dir: PathBuf::from("relative/path"),
            backup_path: PathBuf::from("/abs/backup.tar.gz"),
        };
        let result = config.validate();
        match result {
            Err(AppError::Config(message)) => {
                assert!(message.contains("must be an absolute path"));
            }
            _ => panic!("Expected Config error about relative path"),
        }
    }

    #[test]
    fn test_validate_empty_journal_dir() {
        let config = Config {
            journal_dir: PathBuf::from(""),
            backup_path: PathBuf::from("/abs/backup.tar.gz"),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_derived_paths() {
        let config = Config {
            journal_dir: PathBuf::from("/journal"),
            backup_path: PathBuf::from("/journal/backup.tar.gz"),
        };
        assert_eq!(config.journal_file(), PathBuf::from("/journal/journal.json"));
        assert_eq!(config.media_dir(), PathBuf::from("/journal/media"));
    }
}
