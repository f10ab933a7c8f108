//! Constants used throughout the application.
//!
//! This module contains all constants used in the Wayfarer application,
//! organized into logical groups. Having constants centralized makes them
//! easier to find, modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "wayfarer";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A travel journal backup and import tool";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the Wayfarer journal directory.
pub const ENV_VAR_WAYFARER_DIR: &str = "WAYFARER_DIR";
/// Environment variable for specifying the backup slot path.
pub const ENV_VAR_WAYFARER_BACKUP: &str = "WAYFARER_BACKUP";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for journal data within the user's home directory.
pub const DEFAULT_JOURNAL_SUBDIR: &str = "Documents/wayfarer";
/// File name of the backup slot inside the journal directory.
pub const DEFAULT_BACKUP_FILE: &str = "backup.tar.gz";
/// File name of the journal data file inside the journal directory.
pub const JOURNAL_FILE: &str = "journal.json";
/// Sub-directory of the journal directory holding media blobs.
pub const MEDIA_SUBDIR: &str = "media";

// Archive Wire Format
/// Name of the metadata record inside a backup archive.
pub const DATA_RECORD_NAME: &str = "data.json";
/// Name prefix of blob records inside a backup archive.
pub const MEDIA_RECORD_PREFIX: &str = "media/";

// Text Import Grammar
/// Trip/document separator line in the text import grammar.
pub const SEPARATOR_DIRECTIVE: &str = "---";
