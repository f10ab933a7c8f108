//! Text import: reconstructs trips and entries from freeform line-oriented
//! text produced by other tools.
//!
//! The grammar is directive-driven: each line is trimmed and prefix-matched
//! case-insensitively against a small set of directives (`Trip:`, `Entry:`,
//! `Tags:`, ...). Lines that match nothing are ignored, which is what makes
//! the format tolerant of surrounding prose.
//!
//! Parsing is a single pass over the document with an explicit cursor: the
//! trip and entry currently under construction live in [`ParserState`] and
//! are flushed into the result lists on `Trip:`, `Entry:`, `---`, and end of
//! document. Trip ids are numbered from 1 in document order; entry ids are
//! numbered from 1 across the whole document, not per trip.
//!
//! # Error policy
//!
//! The parser is strict and whole-or-nothing: an unrecognized `Type:` name or
//! an unparseable `Timestamp:` value anywhere in the document fails the whole
//! parse with a [`ParseError`] carrying the line number. Callers that want
//! the lenient "bad document imports as nothing" behavior wrap this in
//! [`crate::ops::ingest_text`], which downgrades the error at the boundary.

use crate::constants::SEPARATOR_DIRECTIVE;
use crate::errors::{AppResult, ParseError};
use crate::model::{Entry, EntryType, Trip, TripCategory};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use tracing::debug;

/// Parse cursor: the collections built so far plus the trip/entry currently
/// under construction.
struct ParserState {
    /// Snapshot taken once at parse start; stamps every synthesized record.
    now: DateTime<Utc>,
    trips: Vec<Trip>,
    entries: Vec<Entry>,
    current_trip: Option<Trip>,
    current_entry: Option<Entry>,
    next_trip_id: i64,
    next_entry_id: i64,
}

impl ParserState {
    fn new(now: DateTime<Utc>) -> Self {
        ParserState {
            now,
            trips: Vec::new(),
            entries: Vec::new(),
            current_trip: None,
            current_entry: None,
            next_trip_id: 1,
            next_entry_id: 1,
        }
    }

    /// Moves the entry under construction into the flat entries list.
    fn flush_entry(&mut self) {
        if let Some(entry) = self.current_entry.take() {
            self.entries.push(entry);
        }
    }

    /// Moves the trip under construction into the trips list, closing its
    /// entry first. Entries stay in the flat list, tied to the trip only via
    /// `trip_id`.
    fn flush_trip(&mut self) {
        self.flush_entry();
        if let Some(trip) = self.current_trip.take() {
            self.trips.push(trip);
        }
    }

    /// Opens a new trip with placeholder dates and category.
    fn open_trip(&mut self, title: &str) {
        self.flush_trip();
        let id = self.next_trip_id;
        self.next_trip_id += 1;
        self.current_trip = Some(Trip::placeholder(id, title.to_string(), self.now));
    }

    /// Opens a new NOTE entry under the current trip. With no trip open the
    /// directive is dropped: no entry is created and no error is raised.
    fn open_entry(&mut self) {
        let trip_id = match &self.current_trip {
            Some(trip) => trip.id,
            None => {
                debug!("Dropping Entry: directive outside any trip");
                return;
            }
        };
        self.flush_entry();
        let id = self.next_entry_id;
        self.next_entry_id += 1;
        self.current_entry = Some(Entry::placeholder(id, trip_id, self.now));
    }

    fn finish(mut self) -> (Vec<Trip>, Vec<Entry>) {
        self.flush_trip();
        (self.trips, self.entries)
    }
}

/// Returns the trimmed remainder of `line` if it starts with `key`,
/// case-insensitively.
fn directive<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let head = line.get(..key.len())?;
    if head.eq_ignore_ascii_case(key) {
        Some(line[key.len()..].trim())
    } else {
        None
    }
}

/// Splits a comma-separated list, trimming items and dropping empties.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses a `Timestamp:` value: RFC 3339, a naive date-time with `T` or space
/// separator, or a bare date (midnight UTC).
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(instant.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
    }
    None
}

/// Reconstructs trips and entries from directive-formatted text.
///
/// Returns the trips in document order (ids from 1) and the flat entries list
/// (ids from 1 across the whole document). Synthesized ids are provisional:
/// callers inserting the result into an existing store must remap them to
/// avoid collisions.
///
/// # Errors
///
/// Fails on the first `Type:` directive naming an unknown entry type or
/// `Timestamp:` directive with an unparseable value, discarding everything
/// parsed so far. All other malformed input is ignored line by line.
pub fn parse_journal_text(text: &str) -> AppResult<(Vec<Trip>, Vec<Entry>)> {
    let mut state = ParserState::new(Utc::now());

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        let line_number = index + 1;

        if line.is_empty() {
            continue;
        }

        if let Some(rest) = directive(line, "Trip:") {
            state.open_trip(rest);
        } else if let Some(rest) = directive(line, "Title:") {
            if let Some(trip) = state.current_trip.as_mut() {
                trip.title = rest.to_string();
            }
        } else if let Some(rest) = directive(line, "StartDate:") {
            if let Some(trip) = state.current_trip.as_mut() {
                trip.start_date = rest.to_string();
            }
        } else if let Some(rest) = directive(line, "EndDate:") {
            if let Some(trip) = state.current_trip.as_mut() {
                trip.end_date = rest.to_string();
            }
        } else if let Some(rest) = directive(line, "Category:") {
            if let Some(trip) = state.current_trip.as_mut() {
                trip.category = TripCategory::parse_name(rest);
            }
        } else if let Some(rest) = directive(line, "Cover:") {
            if let Some(trip) = state.current_trip.as_mut() {
                trip.cover_image_id = Some(rest.to_string());
            }
        } else if let Some(rest) = directive(line, "Description:") {
            if let Some(trip) = state.current_trip.as_mut() {
                trip.description = Some(rest.to_string());
            }
        } else if let Some(rest) = directive(line, "Tags:") {
            if let Some(trip) = state.current_trip.as_mut() {
                trip.tags = split_list(rest);
            }
        } else if directive(line, "Entry:").is_some() {
            state.open_entry();
        } else if let Some(rest) = directive(line, "Type:") {
            if let Some(entry) = state.current_entry.as_mut() {
                entry.kind = EntryType::parse_name(rest).ok_or(ParseError::UnknownEntryType {
                    line: line_number,
                    value: rest.to_string(),
                })?;
            }
        } else if let Some(rest) = directive(line, "TitleEntry:") {
            if let Some(entry) = state.current_entry.as_mut() {
                entry.title = Some(rest.to_string());
            }
        } else if let Some(rest) = directive(line, "Text:") {
            if let Some(entry) = state.current_entry.as_mut() {
                entry.text = Some(rest.to_string());
            }
        } else if let Some(rest) = directive(line, "Timestamp:") {
            if let Some(entry) = state.current_entry.as_mut() {
                entry.timestamp = parse_timestamp(rest).ok_or(ParseError::InvalidTimestamp {
                    line: line_number,
                    value: rest.to_string(),
                })?;
            }
        } else if let Some(rest) = directive(line, "Media:") {
            if let Some(entry) = state.current_entry.as_mut() {
                entry.media_ids = split_list(rest);
            }
        } else if line.starts_with(SEPARATOR_DIRECTIVE) {
            state.flush_trip();
        } else {
            debug!("Ignoring unmatched line {}", line_number);
        }
    }

    Ok(state.finish())
}
