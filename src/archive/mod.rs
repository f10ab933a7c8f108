//! The archive codec: packs trips, entries, and referenced media blobs into a
//! single portable `tar.gz` byte stream, and unpacks the same.
//!
//! # Wire format
//!
//! A gzip-compressed tar stream holding:
//!
//! - exactly one metadata record named `data.json`: a UTF-8 JSON object
//!   `{"trips": [...], "entries": [...]}` with every field present;
//! - zero or more blob records named `media/<mediaId>` holding opaque bytes.
//!
//! Exporters always write `data.json` first, then blob records in
//! entries-then-mediaIds order. Importers resolve records by name, not
//! position, and ignore records they do not recognize.
//!
//! Both directions buffer the whole archive in memory; there is no streaming,
//! so memory use scales with total media size.

use crate::constants::{DATA_RECORD_NAME, MEDIA_RECORD_PREFIX};
use crate::errors::{AppError, AppResult, ArchiveError};
use crate::media::MediaStore;
use crate::model::{BackupData, Entry, Trip};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::Serialize;
use std::io::Read;
use tracing::debug;

/// Borrowed view of the metadata record, so export never clones the caller's
/// collections just to serialize them.
#[derive(Serialize)]
struct BackupDataRef<'a> {
    trips: &'a [Trip],
    entries: &'a [Entry],
}

/// Appends one named record to the tar stream.
fn append_record<W: std::io::Write>(
    builder: &mut tar::Builder<W>,
    name: &str,
    bytes: &[u8],
) -> AppResult<()> {
    let mut header = tar::Header::new_gnu();
    header.set_size(bytes.len() as u64);
    header.set_mode(0o644);
    header.set_cksum();
    builder.append_data(&mut header, name, bytes)?;
    Ok(())
}

/// Packs `trips` and `entries` plus their resolvable media blobs into one
/// in-memory archive.
///
/// Media ids that do not resolve in `media` are skipped silently; the ids
/// stay listed in the metadata record, but no blob record is written for
/// them. No deduplication is performed: a media id referenced by several
/// entries produces several identical blob records.
///
/// The result is a pure function of the inputs and the media store snapshot.
/// Persisting the returned bytes is the caller's responsibility.
///
/// # Errors
///
/// Returns an error only when the media store fails with a real I/O error or
/// the tar stream cannot be written; missing blobs are not errors.
pub fn export_archive<M: MediaStore>(
    trips: &[Trip],
    entries: &[Entry],
    media: &M,
) -> AppResult<Vec<u8>> {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);

    let data = serde_json::to_vec(&BackupDataRef { trips, entries })
        .map_err(|e| AppError::Journal(format!("Failed to encode metadata record: {}", e)))?;
    append_record(&mut builder, DATA_RECORD_NAME, &data)?;
    debug!(
        "Wrote metadata record: {} trips, {} entries, {} bytes",
        trips.len(),
        entries.len(),
        data.len()
    );

    for entry in entries {
        for media_id in &entry.media_ids {
            match media.read_blob(media_id)? {
                Some(bytes) => {
                    let name = format!("{}{}", MEDIA_RECORD_PREFIX, media_id);
                    append_record(&mut builder, &name, &bytes)?;
                    debug!("Wrote blob record: {} ({} bytes)", name, bytes.len());
                }
                None => {
                    debug!("Skipping unresolved media id: {}", media_id);
                }
            }
        }
    }

    let encoder = builder.into_inner()?;
    let archive = encoder.finish()?;
    debug!("Archive size (compressed): {} bytes", archive.len());
    Ok(archive)
}

/// Unpacks an archive produced by [`export_archive`].
///
/// Records are read sequentially. The record named `data.json` is decoded
/// into [`BackupData`]; if the name recurs, the last occurrence wins. Records
/// named `media/<path>` have the prefix stripped and their bytes written into
/// `media`. All other record names are ignored.
///
/// The returned trips/entries are reconstructed but not persisted anywhere;
/// blobs, by contrast, are materialized into the media store as a side
/// effect. An archive with no `data.json` record yields empty lists.
///
/// # Errors
///
/// Returns [`ArchiveError::Corrupt`] for a truncated or structurally invalid
/// container and [`ArchiveError::Metadata`] for an undecodable `data.json`
/// payload. Neither is retried internally.
pub fn import_archive<M: MediaStore>(
    bytes: &[u8],
    media: &mut M,
) -> AppResult<(Vec<Trip>, Vec<Entry>)> {
    let mut archive = tar::Archive::new(GzDecoder::new(bytes));
    let mut data = BackupData::default();

    for record in archive.entries().map_err(ArchiveError::Corrupt)? {
        let mut record = record.map_err(ArchiveError::Corrupt)?;
        let name = record
            .path()
            .map_err(ArchiveError::Corrupt)?
            .to_string_lossy()
            .into_owned();

        let mut payload = Vec::new();
        record
            .read_to_end(&mut payload)
            .map_err(ArchiveError::Corrupt)?;

        if name == DATA_RECORD_NAME {
            data = serde_json::from_slice(&payload)
                .map_err(|source| ArchiveError::Metadata { name, source })?;
            debug!(
                "Decoded metadata record: {} trips, {} entries",
                data.trips.len(),
                data.entries.len()
            );
        } else if let Some(relative) = name.strip_prefix(MEDIA_RECORD_PREFIX) {
            media.write_blob(relative, &payload)?;
        } else {
            debug!("Ignoring unknown record: {}", name);
        }
    }

    Ok((data.trips, data.entries))
}
