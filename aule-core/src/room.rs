//! Room availability types.
//!
//! A pole's roster is the full, ordered list of its classrooms. The API also
//! reports a (possibly partial) set of free rooms; the resolver merges the
//! two into one `AvailabilityEntry` per roster room.

use serde::{Deserialize, Serialize};

/// Identifier of a physical classroom, exactly as the API spells it.
pub type RoomName = String;

/// One entry of the free-rooms payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeRoomRecord {
    pub room: RoomName,
    /// Raw annotation text, before any `AnnotationFormat` is applied
    pub annotation: Option<String>,
}

impl FreeRoomRecord {
    pub fn new(room: impl Into<RoomName>) -> Self {
        FreeRoomRecord {
            room: room.into(),
            annotation: None,
        }
    }

    pub fn with_annotation(room: impl Into<RoomName>, annotation: impl Into<String>) -> Self {
        FreeRoomRecord {
            room: room.into(),
            annotation: Some(annotation.into()),
        }
    }
}

/// Resolved status of a single roster room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityEntry {
    pub room: RoomName,
    pub available: bool,
    pub annotation: Option<String>,
}

impl AvailabilityEntry {
    /// A room with no matching free record: busy, nothing to say about it.
    pub fn busy(room: impl Into<RoomName>) -> Self {
        AvailabilityEntry {
            room: room.into(),
            available: false,
            annotation: None,
        }
    }

    /// Append to the annotation, space-separated from whatever is there.
    pub(crate) fn append_annotation(&mut self, text: &str) {
        match &mut self.annotation {
            Some(existing) if !existing.is_empty() => {
                existing.push(' ');
                existing.push_str(text);
            }
            _ => self.annotation = Some(text.to_string()),
        }
    }
}
