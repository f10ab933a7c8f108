//! High-level operations tying the codec, media store, and backup slot
//! together.
//!
//! This module provides the user-facing operations of Wayfarer: creating and
//! restoring full backups, and ingesting trips/entries from directive text.
//! The application layer (CLI or embedding app) owns persisting what these
//! operations return.

pub mod backup;
pub mod ingest;

// Re-export commonly used functions
pub use backup::{create_backup, restore_backup, BackupReport};
pub use ingest::ingest_text;
