//! Domain model for trips, journal entries, and the backup transport shape.
//!
//! The types in this module are plain data carriers: the codec and the text
//! import parser construct them, the application layer owns persisting them.
//! No cross-field validation happens here (a trip's start date is not checked
//! against its end date, and an entry's trip id is not checked to exist).
//!
//! # Wire casing
//!
//! `Trip` serializes with snake_case keys and `Entry` with camelCase keys.
//! This mismatch is deliberate: it matches the archive wire format produced by
//! earlier releases, and existing backups must keep decoding byte-for-byte.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of a trip.
///
/// Serialized in SCREAMING_SNAKE_CASE on the wire (`"ROAD_TRIP"` etc.).
/// `Other` doubles as the placeholder assigned by the text import parser
/// before a `Category:` directive is seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripCategory {
    /// A leisure/vacation trip.
    Vacation,
    /// A business trip.
    Business,
    /// An adventure trip (trekking, climbing, and similar).
    Adventure,
    /// A road trip.
    RoadTrip,
    /// A hiking trip.
    Hiking,
    /// Anything that fits no other category.
    #[default]
    Other,
}

impl TripCategory {
    /// Parses a category name case-insensitively.
    ///
    /// Accepts the wire names (`"ROAD_TRIP"`) in any case. Unrecognized names
    /// map to `Other` rather than failing: the text import grammar treats
    /// `Category:` as free-form user input, unlike `Type:` which is strict.
    pub fn parse_name(name: &str) -> Self {
        match name.trim().to_ascii_uppercase().as_str() {
            "VACATION" => TripCategory::Vacation,
            "BUSINESS" => TripCategory::Business,
            "ADVENTURE" => TripCategory::Adventure,
            "ROAD_TRIP" => TripCategory::RoadTrip,
            "HIKING" => TripCategory::Hiking,
            _ => TripCategory::Other,
        }
    }
}

/// Type of a journal entry.
///
/// Serialized in SCREAMING_SNAKE_CASE on the wire (`"ROUTE_POINT"` etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryType {
    /// A freeform text note. The default for entries created by the text
    /// import parser.
    #[default]
    Note,
    /// A photo entry referencing one or more media blobs.
    Photo,
    /// A visited place.
    Place,
    /// A single point on a recorded route.
    RoutePoint,
    /// A trip-level entry (cover note, summary).
    Trip,
}

impl EntryType {
    /// Parses an entry type name case-insensitively.
    ///
    /// Returns `None` for unrecognized names; the text import parser turns
    /// that into a hard `ParseError` because a mistyped `Type:` directive
    /// silently producing a NOTE would corrupt the import.
    pub fn parse_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "NOTE" => Some(EntryType::Note),
            "PHOTO" => Some(EntryType::Photo),
            "PLACE" => Some(EntryType::Place),
            "ROUTE_POINT" => Some(EntryType::RoutePoint),
            "TRIP" => Some(EntryType::Trip),
            _ => None,
        }
    }
}

/// A latitude/longitude pair attached to an entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
}

/// A trip: the top-level grouping of journal entries.
///
/// Dates are carried as free-form strings and never validated by the codec or
/// parser; `start_date` after `end_date` is the application layer's problem.
///
/// Serializes with snake_case keys. Every field is always present in the
/// output — no field omission for default or `None` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Identifier. Ids synthesized by the text import parser are provisional
    /// and must be remapped by the caller before inserting into a store that
    /// already holds records.
    pub id: i64,
    /// Trip title.
    pub title: String,
    /// Start date, free-form (typically `YYYY-MM-DD`).
    pub start_date: String,
    /// End date, free-form.
    pub end_date: String,
    /// Trip category.
    pub category: TripCategory,
    /// Media id of the cover image, if one is set.
    pub cover_image_id: Option<String>,
    /// Trip description, if one is set.
    pub description: Option<String>,
    /// Ordered tag list.
    pub tags: Vec<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modified timestamp.
    pub updated_at: DateTime<Utc>,
    /// Timestamp of the last export that included this trip, if any.
    pub last_exported_at: Option<DateTime<Utc>>,
    /// Completion progress in the range 0..1.
    pub progress: f64,
    /// Trip duration in seconds.
    pub duration: i64,
}

impl Trip {
    /// Creates a trip with the given id and title and placeholder values
    /// everywhere else, stamped with `now`.
    ///
    /// This is the shape the text import parser opens on a `Trip:` directive:
    /// start/end date default to today's date, category to `Other`, and every
    /// optional field to empty.
    pub fn placeholder(id: i64, title: String, now: DateTime<Utc>) -> Self {
        let today = now.format("%Y-%m-%d").to_string();
        Trip {
            id,
            title,
            start_date: today.clone(),
            end_date: today,
            category: TripCategory::default(),
            cover_image_id: None,
            description: None,
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
            last_exported_at: None,
            progress: 0.0,
            duration: 0,
        }
    }
}

/// A journal entry belonging to a trip.
///
/// Entries reference their trip only through `trip_id`; they are never nested
/// inside a trip container. The reference is not enforced to resolve.
///
/// Serializes with camelCase keys (`tripId`, `mediaIds`, `createdAt`,
/// `updatedAt`); the `kind` field serializes as `"type"`. Every field is
/// always present in the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Identifier. Provisional when synthesized by the text import parser.
    pub id: i64,
    /// Id of the owning trip. Not enforced to exist.
    pub trip_id: i64,
    /// Entry type.
    #[serde(rename = "type")]
    pub kind: EntryType,
    /// Entry title, if one is set.
    pub title: Option<String>,
    /// Entry body text, if any.
    pub text: Option<String>,
    /// Ordered media blob ids referenced by this entry.
    pub media_ids: Vec<String>,
    /// Location of this entry, if known.
    pub coords: Option<Coordinates>,
    /// Timestamp the entry refers to.
    pub timestamp: DateTime<Utc>,
    /// Ordered tag list.
    pub tags: Vec<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modified timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Entry {
    /// Creates a NOTE entry with the given ids and empty content, with all
    /// timestamps set to `now`.
    ///
    /// This is the shape the text import parser opens on an `Entry:`
    /// directive.
    pub fn placeholder(id: i64, trip_id: i64, now: DateTime<Utc>) -> Self {
        Entry {
            id,
            trip_id,
            kind: EntryType::Note,
            title: None,
            text: None,
            media_ids: Vec::new(),
            coords: None,
            timestamp: now,
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// The transport shape of the archive metadata record: the full trip and
/// entry collections paired for a single export or import call.
///
/// This type owns no lifecycle beyond that call; it is not a persistence
/// format for the application's store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BackupData {
    /// All trips in the backup.
    pub trips: Vec<Trip>,
    /// All entries in the backup, flat, tied to trips via `trip_id` only.
    pub entries: Vec<Entry>,
}
