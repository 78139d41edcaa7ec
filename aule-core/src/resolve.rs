//! Room availability resolution.
//!
//! Merges a pole's complete roster with the free-rooms result set. Every
//! roster room yields exactly one entry, in roster order; free records that
//! match no room are dropped.
//!
//! Matching is by substring: a record matches the first entry whose name
//! contains the record's room. Names that prefix one another ("Aula1",
//! "Aula10") can therefore match the wrong room; the first one in roster
//! order wins.

use crate::annotation::AnnotationFormat;
use crate::room::{AvailabilityEntry, FreeRoomRecord, RoomName};

/// Resolves rosters against free-room records, formatting annotations with
/// `format` on the way.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver {
    pub format: AnnotationFormat,
}

impl Resolver {
    pub fn new(format: AnnotationFormat) -> Self {
        Resolver { format }
    }

    pub fn resolve(&self, roster: &[RoomName], free: &[FreeRoomRecord]) -> Vec<AvailabilityEntry> {
        let mut entries: Vec<AvailabilityEntry> =
            roster.iter().map(AvailabilityEntry::busy).collect();

        for record in free {
            let Some(entry) = entries.iter_mut().find(|e| e.room.contains(record.room.as_str()))
            else {
                tracing::debug!(room = %record.room, "free room not in roster, ignoring");
                continue;
            };

            entry.available = true;

            if let Some(raw) = &record.annotation {
                match self.format.apply(raw) {
                    Ok(text) => entry.append_annotation(&text),
                    Err(e) => tracing::warn!(room = %entry.room, "omitting annotation: {e}"),
                }
            }
        }

        entries
    }
}

/// Resolve with annotations kept verbatim.
pub fn resolve(roster: &[RoomName], free: &[FreeRoomRecord]) -> Vec<AvailabilityEntry> {
    Resolver::default().resolve(roster, free)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(names: &[&str]) -> Vec<RoomName> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn preserves_roster_length_and_order() {
        let r = roster(&["Lab1", "Aula101", "Aula102"]);
        let f = vec![FreeRoomRecord::new("Aula102"), FreeRoomRecord::new("Nowhere")];

        let out = resolve(&r, &f);

        let names: Vec<_> = out.iter().map(|e| e.room.as_str()).collect();
        assert_eq!(names, ["Lab1", "Aula101", "Aula102"]);
    }

    #[test]
    fn no_free_records_means_all_busy() {
        let r = roster(&["Aula101", "Aula102"]);
        let out = resolve(&r, &[]);

        assert!(out.iter().all(|e| !e.available && e.annotation.is_none()));
    }

    #[test]
    fn exact_names_mark_rooms_available() {
        let r = roster(&["A", "B", "C"]);
        let f = vec![FreeRoomRecord::new("C"), FreeRoomRecord::new("A")];

        let out = resolve(&r, &f);

        assert!(out[0].available);
        assert!(!out[1].available);
        assert!(out[2].available);
    }

    #[test]
    fn single_annotated_match() {
        let r = roster(&["Aula101", "Aula102", "Lab1"]);
        let f = vec![FreeRoomRecord::with_annotation("Aula101", "14:30")];

        let out = resolve(&r, &f);

        assert_eq!(
            out,
            vec![
                AvailabilityEntry {
                    room: "Aula101".into(),
                    available: true,
                    annotation: Some("14:30".into()),
                },
                AvailabilityEntry::busy("Aula102"),
                AvailabilityEntry::busy("Lab1"),
            ]
        );
    }

    #[test]
    fn repeated_record_appends_to_same_entry() {
        // Both records hit the only entry; the first carries no annotation,
        // so the second's text ends up alone.
        let r = roster(&["Aula1"]);
        let f = vec![
            FreeRoomRecord::new("Aula1"),
            FreeRoomRecord::with_annotation("Aula1", "X"),
        ];

        let out = resolve(&r, &f);

        assert_eq!(out.len(), 1);
        assert!(out[0].available);
        assert_eq!(out[0].annotation.as_deref(), Some("X"));
    }

    #[test]
    fn empty_roster_yields_nothing() {
        let out = resolve(&[], &[FreeRoomRecord::new("Aula1")]);
        assert!(out.is_empty());
    }

    #[test]
    fn prefix_name_matches_first_in_roster_order() {
        let r = roster(&["Aula10", "Aula1"]);
        let out = resolve(&r, &[FreeRoomRecord::new("Aula1")]);

        assert!(out[0].available);
        assert!(!out[1].available);
    }

    #[test]
    fn malformed_annotation_is_omitted() {
        let r = roster(&["Aula1", "Aula2"]);
        let f = vec![
            FreeRoomRecord::with_annotation("Aula1", "14:30"),
            FreeRoomRecord::with_annotation("Aula2", "2024-05-06 16:00"),
        ];

        let out = Resolver::new(AnnotationFormat::ClockTime).resolve(&r, &f);

        assert!(out[0].available);
        assert_eq!(out[0].annotation, None);
        assert_eq!(out[1].annotation.as_deref(), Some("16:00"));
    }

    #[test]
    fn resolve_is_idempotent() {
        let r = roster(&["Aula1", "Aula2", "Lab"]);
        let f = vec![
            FreeRoomRecord::with_annotation("Lab", "Free until: 12:00"),
            FreeRoomRecord::new("Aula"),
        ];

        assert_eq!(resolve(&r, &f), resolve(&r, &f));
    }
}
