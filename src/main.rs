/*!
# Wayfarer - A Travel Journal Backup and Import Tool

Wayfarer is a command-line tool for backing up and importing travel journal
data. It packs trips, journal entries, and referenced media into a single
portable archive, restores such archives, and ingests trips/entries from
directive-formatted text files.

This file contains the main application flow, coordinating the various
components to implement the three subcommands.

## Usage

```text
wayfarer <COMMAND>

Commands:
  export  Packs the journal and its media into the backup slot
  import  Restores the backup slot, materializing media and printing the
          reconstructed journal data as JSON
  ingest  Parses a directive-formatted text file into journal data JSON
```

## Configuration

The application can be configured with the following environment variables:
- `WAYFARER_DIR`: The journal directory (defaults to "~/Documents/wayfarer")
- `WAYFARER_BACKUP`: The backup slot path (defaults to "<dir>/backup.tar.gz")
*/

use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use wayfarer::backup::FileBackupStorage;
use wayfarer::cli::{CliArgs, Command};
use wayfarer::config::Config;
use wayfarer::errors::{AppError, AppResult};
use wayfarer::media::FsMediaStore;
use wayfarer::model::BackupData;
use wayfarer::ops;

/// Reads the journal data file, or an empty collection if it does not exist.
fn load_journal_data(path: &Path) -> AppResult<BackupData> {
    if !path.exists() {
        debug!("Journal file {:?} does not exist, treating as empty", path);
        return Ok(BackupData::default());
    }
    let bytes = fs::read(path)?;
    serde_json::from_slice(&bytes)
        .map_err(|e| AppError::Journal(format!("Failed to decode journal file: {}", e)))
}

/// Writes JSON to `output`, or to stdout when no path is given.
fn emit_json(data: &BackupData, output: Option<&PathBuf>) -> AppResult<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| AppError::Journal(format!("Failed to encode journal data: {}", e)))?;
    match output {
        Some(path) => {
            fs::write(path, json)?;
            info!("Wrote journal data to {:?}", path);
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn run_export(config: &Config) -> AppResult<()> {
    let data = load_journal_data(&config.journal_file())?;
    let media = FsMediaStore::new(config.media_dir());
    let mut storage = FileBackupStorage::new(&config.backup_path);

    let report = ops::create_backup(&data.trips, &data.entries, &media, &mut storage)?;
    println!(
        "Backed up {} trips and {} entries ({} bytes, checksum {})",
        report.trip_count, report.entry_count, report.archive_size, report.checksum
    );
    Ok(())
}

fn run_import(config: &Config, output: Option<&PathBuf>) -> AppResult<()> {
    let mut media = FsMediaStore::new(config.media_dir());
    let storage = FileBackupStorage::new(&config.backup_path);

    match ops::restore_backup(&storage, &mut media)? {
        Some((trips, entries)) => emit_json(&BackupData { trips, entries }, output),
        None => {
            println!("Backup slot is empty, nothing to import");
            Ok(())
        }
    }
}

fn run_ingest(file: &Path, output: Option<&PathBuf>) -> AppResult<()> {
    let text = fs::read_to_string(file)?;
    let (trips, entries) = ops::ingest_text(&text);
    emit_json(&BackupData { trips, entries }, output)
}

/// The main entry point for the wayfarer application.
///
/// Coordinates the overall application flow:
/// 1. Parses command-line arguments
/// 2. Initializes logging
/// 3. Loads and validates configuration
/// 4. Dispatches to the requested operation
fn main() -> AppResult<()> {
    let args = CliArgs::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting wayfarer");
    debug!("CLI arguments: {:?}", args);

    let config = Config::load()?;

    match &args.command {
        Command::Export => run_export(&config),
        Command::Import { output } => run_import(&config, output.as_ref()),
        Command::Ingest { file, output } => run_ingest(file, output.as_ref()),
    }
}
