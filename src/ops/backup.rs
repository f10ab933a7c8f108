//! Backup and restore operations for travel journal data.
//!
//! This module orchestrates the archive codec against the media store and the
//! fixed backup slot: export packs trips/entries and their media into one
//! archive and saves it, restore loads the slot and unpacks it.

use crate::archive;
use crate::backup::BackupStorage;
use crate::errors::AppResult;
use crate::media::MediaStore;
use crate::model::{Entry, Trip};
use blake3::Hasher;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Report of a completed backup operation.
#[derive(Debug, Clone)]
pub struct BackupReport {
    /// Number of trips included in the backup
    pub trip_count: usize,
    /// Number of entries included in the backup
    pub entry_count: usize,
    /// Size of the backup archive in bytes
    pub archive_size: u64,
    /// BLAKE3 checksum of the backup archive
    pub checksum: String,
    /// Duration taken to create the backup
    pub duration: Duration,
}

/// Creates a full backup of the given trips and entries.
///
/// # Flow
///
/// 1. Pack trips, entries, and every resolvable media blob into a tar.gz
///    archive (missing blobs are skipped, not errors)
/// 2. Calculate the archive checksum
/// 3. Overwrite the backup slot with the archive
///
/// The archive is buffered fully in memory before it reaches the slot, so
/// memory use scales with total media size.
///
/// # Errors
///
/// Returns an error if the media store fails with a real I/O error, the
/// archive cannot be built, or the slot cannot be written. A single failed
/// attempt is made; retries are the caller's concern.
pub fn create_backup<M: MediaStore, S: BackupStorage>(
    trips: &[Trip],
    entries: &[Entry],
    media: &M,
    storage: &mut S,
) -> AppResult<BackupReport> {
    let start_time = Instant::now();
    info!(
        "Creating backup of {} trips and {} entries",
        trips.len(),
        entries.len()
    );

    let archive_bytes = archive::export_archive(trips, entries, media)?;

    let mut hasher = Hasher::new();
    hasher.update(&archive_bytes);
    let checksum = hasher.finalize().to_hex().to_string();
    debug!("Backup checksum: {}", checksum);

    storage.save(&archive_bytes)?;

    let duration = start_time.elapsed();
    info!(
        "Backup completed: {} trips, {} entries, {} bytes",
        trips.len(),
        entries.len(),
        archive_bytes.len()
    );

    Ok(BackupReport {
        trip_count: trips.len(),
        entry_count: entries.len(),
        archive_size: archive_bytes.len() as u64,
        checksum,
        duration,
    })
}

/// Restores trips and entries from the backup slot.
///
/// Loads the slot, unpacks the archive, and materializes its media blobs
/// into `media`. Returns `None` when the slot has never been written.
///
/// The returned trips/entries are not persisted anywhere; merging them into
/// the application's store, including remapping ids that collide with
/// existing records, is the caller's responsibility.
///
/// # Errors
///
/// Returns an error if the slot cannot be read or the archive is corrupt or
/// carries an undecodable metadata record.
pub fn restore_backup<M: MediaStore, S: BackupStorage>(
    storage: &S,
    media: &mut M,
) -> AppResult<Option<(Vec<Trip>, Vec<Entry>)>> {
    let archive_bytes = match storage.load()? {
        Some(bytes) => bytes,
        None => {
            info!("Backup slot is empty, nothing to restore");
            return Ok(None);
        }
    };

    info!("Restoring backup ({} bytes)", archive_bytes.len());
    let (trips, entries) = archive::import_archive(&archive_bytes, media)?;
    info!(
        "Restore completed: {} trips, {} entries",
        trips.len(),
        entries.len()
    );
    Ok(Some((trips, entries)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backup::FileBackupStorage;
    use crate::media::MemoryMediaStore;
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    fn sample_data() -> (Vec<Trip>, Vec<Entry>) {
        let now = Utc.with_ymd_and_hms(2024, 3, 3, 10, 0, 0).unwrap();
        let trips = vec![Trip::placeholder(1, "Andes".to_string(), now)];
        let mut entry = Entry::placeholder(1, 1, now);
        entry.media_ids = vec!["summit.jpg".to_string()];
        (trips, vec![entry])
    }

    #[test]
    fn test_create_and_restore_backup() {
        let dir = tempdir().unwrap();
        let mut storage = FileBackupStorage::new(dir.path().join("backup.tar.gz"));
        let mut media = MemoryMediaStore::new();
        media.insert("summit.jpg", b"photo".to_vec());

        let (trips, entries) = sample_data();
        let report = create_backup(&trips, &entries, &media, &mut storage).unwrap();
        assert_eq!(report.trip_count, 1);
        assert_eq!(report.entry_count, 1);
        assert!(report.archive_size > 0);
        assert!(!report.checksum.is_empty());

        let mut restore_media = MemoryMediaStore::new();
        let restored = restore_backup(&storage, &mut restore_media)
            .unwrap()
            .expect("slot should hold a backup");
        assert_eq!(restored.0, trips);
        assert_eq!(restored.1, entries);
        assert_eq!(
            restore_media.read_blob("summit.jpg").unwrap(),
            Some(b"photo".to_vec())
        );
    }

    #[test]
    fn test_restore_from_empty_slot_is_none() {
        let dir = tempdir().unwrap();
        let storage = FileBackupStorage::new(dir.path().join("backup.tar.gz"));
        let mut media = MemoryMediaStore::new();
        assert!(restore_backup(&storage, &mut media).unwrap().is_none());
    }

    #[test]
    fn test_identical_inputs_produce_identical_checksums() {
        let dir = tempdir().unwrap();
        let mut storage = FileBackupStorage::new(dir.path().join("backup.tar.gz"));
        let media = MemoryMediaStore::new();
        let (trips, entries) = sample_data();

        let first = create_backup(&trips, &entries, &media, &mut storage).unwrap();
        let second = create_backup(&trips, &entries, &media, &mut storage).unwrap();
        assert_eq!(first.checksum, second.checksum);
    }
}
