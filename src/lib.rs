/*!
# Wayfarer

Wayfarer moves a travel journal's data (trips, journal entries, referenced
media) in and out of the application in two independent ways: a portable
archive round-trip for full backup/restore, and a tolerant ingestion path
that reconstructs trips and entries from directive-formatted text.

## Core Features

- Pack trips, entries, and media blobs into one portable `tar.gz` archive
- Restore an archive back into trips, entries, and materialized media
- Parse freeform line-oriented text into trips and entries
- A single fixed backup slot with overwrite semantics

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `model`: Trip/Entry domain types and the backup transport shape
- `media`: The `MediaStore` capability over blob storage
- `archive`: The archive codec (wire format + deterministic packing)
- `textimport`: The directive-driven text import parser
- `backup`: The fixed-slot `BackupStorage` capability
- `ops`: High-level operations tying the pieces together

## Usage Example

```no_run
use wayfarer::media::MemoryMediaStore;
use wayfarer::ops;

let text = "Trip: Paris\nStartDate: 2024-01-01\nEntry:\nTitleEntry: Louvre\n---\n";
let (trips, entries) = ops::ingest_text(text);
assert_eq!(trips.len(), 1);
assert_eq!(entries.len(), 1);

let media = MemoryMediaStore::new();
let archive = wayfarer::archive::export_archive(&trips, &entries, &media).unwrap();
assert!(!archive.is_empty());
```
*/

/// The archive codec: packing and unpacking backup archives
pub mod archive;
/// Fixed-slot backup storage
pub mod backup;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Centralized constants
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Media blob storage capability and implementations
pub mod media;
/// Domain model types
pub mod model;
/// High-level backup/restore/ingest operations
pub mod ops;
/// The directive-driven text import parser
pub mod textimport;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use model::{BackupData, Entry, EntryType, Trip, TripCategory};
