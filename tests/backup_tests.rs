//! Integration tests for backup and restore operations.
//!
//! These tests verify the full workflow of exporting journal data and media
//! into the backup slot and restoring from it, using the filesystem-backed
//! media store and backup storage.

use chrono::{TimeZone, Utc};
use std::fs;
use tempfile::TempDir;
use wayfarer::backup::{BackupStorage, FileBackupStorage};
use wayfarer::media::{FsMediaStore, MediaStore};
use wayfarer::model::{Entry, EntryType, Trip, TripCategory};
use wayfarer::ops;

/// Helper to build a small journal with two trips and media-bearing entries.
fn sample_journal() -> (Vec<Trip>, Vec<Entry>) {
    let now = Utc.with_ymd_and_hms(2024, 7, 1, 9, 0, 0).unwrap();

    let mut tuscany = Trip::placeholder(1, "Tuscany".to_string(), now);
    tuscany.start_date = "2024-06-20".to_string();
    tuscany.end_date = "2024-06-30".to_string();
    tuscany.category = TripCategory::Vacation;
    tuscany.tags = vec!["italy".to_string(), "food".to_string()];

    let dolomites = Trip::placeholder(2, "Dolomites".to_string(), now);

    let mut siena = Entry::placeholder(1, 1, now);
    siena.kind = EntryType::Photo;
    siena.title = Some("Siena".to_string());
    siena.media_ids = vec!["siena/piazza.jpg".to_string()];

    let mut ridge = Entry::placeholder(2, 2, now);
    ridge.kind = EntryType::RoutePoint;
    ridge.media_ids = vec!["ridge.jpg".to_string(), "lost.jpg".to_string()];

    (vec![tuscany, dolomites], vec![siena, ridge])
}

fn setup_media(dir: &TempDir) -> FsMediaStore {
    let mut media = FsMediaStore::new(dir.path().join("media"));
    media
        .write_blob("siena/piazza.jpg", b"piazza bytes")
        .expect("write blob");
    media.write_blob("ridge.jpg", b"ridge bytes").expect("write blob");
    // "lost.jpg" deliberately not written
    media
}

#[test]
fn test_backup_and_restore_round_trip_on_disk() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let media = setup_media(&temp_dir);
    let mut storage = FileBackupStorage::new(temp_dir.path().join("backup.tar.gz"));

    let (trips, entries) = sample_journal();
    let report = ops::create_backup(&trips, &entries, &media, &mut storage).expect("create backup");

    assert_eq!(report.trip_count, 2);
    assert_eq!(report.entry_count, 2);
    assert!(report.archive_size > 0, "Archive should have size");
    assert!(!report.checksum.is_empty(), "Should have checksum");
    assert!(report.duration.as_secs() < 10, "Should complete quickly");

    // The slot file is a plain gzip stream
    let slot_bytes = fs::read(temp_dir.path().join("backup.tar.gz")).expect("read slot");
    assert!(slot_bytes.starts_with(b"\x1f\x8b"), "Slot should hold gzip data");

    // Restore into a fresh media root
    let restore_dir = TempDir::new().expect("create restore dir");
    let mut restore_media = FsMediaStore::new(restore_dir.path().join("media"));
    let (restored_trips, restored_entries) = ops::restore_backup(&storage, &mut restore_media)
        .expect("restore backup")
        .expect("slot should hold a backup");

    assert_eq!(restored_trips, trips);
    assert_eq!(restored_entries, entries);

    // Resolvable media came back, the missing id stayed unresolved
    assert_eq!(
        restore_media.read_blob("siena/piazza.jpg").expect("read"),
        Some(b"piazza bytes".to_vec())
    );
    assert_eq!(
        restore_media.read_blob("ridge.jpg").expect("read"),
        Some(b"ridge bytes".to_vec())
    );
    assert_eq!(restore_media.read_blob("lost.jpg").expect("read"), None);
    // The entry still lists the unresolved id
    assert!(restored_entries[1]
        .media_ids
        .contains(&"lost.jpg".to_string()));
}

#[test]
fn test_second_backup_overwrites_slot() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let media = setup_media(&temp_dir);
    let mut storage = FileBackupStorage::new(temp_dir.path().join("backup.tar.gz"));

    let (trips, entries) = sample_journal();
    ops::create_backup(&trips, &entries, &media, &mut storage).expect("first backup");

    // Second backup with only the first trip
    let smaller_trips = vec![trips[0].clone()];
    ops::create_backup(&smaller_trips, &[], &media, &mut storage).expect("second backup");

    let mut restore_media = FsMediaStore::new(temp_dir.path().join("restored"));
    let (restored_trips, restored_entries) = ops::restore_backup(&storage, &mut restore_media)
        .expect("restore")
        .expect("slot should hold a backup");
    assert_eq!(restored_trips, smaller_trips);
    assert!(restored_entries.is_empty());
}

#[test]
fn test_export_idempotence_of_decoded_metadata() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let media = setup_media(&temp_dir);
    let (trips, entries) = sample_journal();

    let first = wayfarer::archive::export_archive(&trips, &entries, &media).expect("export");
    let second = wayfarer::archive::export_archive(&trips, &entries, &media).expect("export");

    let mut media_a = FsMediaStore::new(temp_dir.path().join("a"));
    let mut media_b = FsMediaStore::new(temp_dir.path().join("b"));
    let decoded_first = wayfarer::archive::import_archive(&first, &mut media_a).expect("import");
    let decoded_second = wayfarer::archive::import_archive(&second, &mut media_b).expect("import");
    assert_eq!(decoded_first, decoded_second);
}

#[test]
fn test_restore_corrupt_slot_fails() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let mut storage = FileBackupStorage::new(temp_dir.path().join("backup.tar.gz"));
    storage.save(b"these are not archive bytes").expect("save");

    let mut media = FsMediaStore::new(temp_dir.path().join("media"));
    let result = ops::restore_backup(&storage, &mut media);
    assert!(result.is_err(), "Corrupt slot should fail restore");
}
