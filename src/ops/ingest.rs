//! Boundary wrapper around the text import parser.
//!
//! The parser itself is strict: one bad `Type:` or `Timestamp:` directive
//! fails the whole document. The surrounding feature wants "best effort or
//! nothing" with no error surfaced to the user, so this wrapper downgrades a
//! failed parse to empty result lists and a warning log. Callers that need
//! the diagnostics use [`crate::textimport::parse_journal_text`] directly.

use crate::model::{Entry, Trip};
use crate::textimport;
use tracing::{info, warn};

/// Ingests directive-formatted text, returning whatever could be
/// reconstructed.
///
/// On a parse failure anywhere in the document this returns empty lists —
/// the whole import is discarded, matching the strict parser contract.
/// Returned ids are provisional and must be remapped by the caller before
/// inserting into a store with existing records.
pub fn ingest_text(text: &str) -> (Vec<Trip>, Vec<Entry>) {
    match textimport::parse_journal_text(text) {
        Ok((trips, entries)) => {
            info!(
                "Text import produced {} trips and {} entries",
                trips.len(),
                entries.len()
            );
            (trips, entries)
        }
        Err(e) => {
            warn!("Text import failed, discarding all parsed data: {}", e);
            (Vec::new(), Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_document_passes_through() {
        let (trips, entries) = ingest_text("Trip: Rome\nEntry:\n");
        assert_eq!(trips.len(), 1);
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_malformed_directive_discards_whole_document() {
        // Everything before the bad timestamp parsed fine, and is still
        // discarded: whole-or-nothing at this boundary.
        let text = "Trip: Rome\nEntry:\nTitleEntry: Forum\nTimestamp: not-a-date\n";
        let (trips, entries) = ingest_text(text);
        assert!(trips.is_empty());
        assert!(entries.is_empty());
    }

    #[test]
    fn test_empty_input_yields_empty_result() {
        let (trips, entries) = ingest_text("");
        assert!(trips.is_empty());
        assert!(entries.is_empty());
    }
}
