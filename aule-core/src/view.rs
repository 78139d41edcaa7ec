//! The two per-pole views: rooms free now, and rooms free with the time
//! they stay free until. They talk to different endpoints with differently
//! shaped payloads.

use std::fmt;

use serde_json::Value;

use crate::annotation::AnnotationFormat;
use crate::error::AuleResult;
use crate::protocol;
use crate::resolve::Resolver;
use crate::room::{FreeRoomRecord, RoomName};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Rooms available right now
    Now,
    /// Available rooms with the start time of their next lecture
    Upcoming,
}

impl View {
    pub fn roster_endpoint(&self) -> &'static str {
        match self {
            View::Now => "get_all_rooms_given_pole",
            View::Upcoming => "all_rooms_given_pole",
        }
    }

    pub fn free_endpoint(&self) -> &'static str {
        match self {
            View::Now => "free_classrooms_now_given_pole",
            View::Upcoming => "free_classrooms_given_pole",
        }
    }

    pub fn decode_roster(&self, payload: &Value) -> AuleResult<Vec<RoomName>> {
        match self {
            View::Now => protocol::decode_room_names(payload),
            View::Upcoming => protocol::decode_classrooms(payload),
        }
    }

    pub fn decode_free(&self, payload: &Value) -> AuleResult<Vec<FreeRoomRecord>> {
        match self {
            View::Now => protocol::decode_free_now(payload),
            View::Upcoming => protocol::decode_free_next_start(payload),
        }
    }

    pub fn annotation_format(&self) -> AnnotationFormat {
        match self {
            View::Now => AnnotationFormat::Verbatim,
            View::Upcoming => AnnotationFormat::ClockTime,
        }
    }

    /// Text shown before the annotation, if any.
    pub fn annotation_label(&self) -> Option<&'static str> {
        match self {
            View::Now => None,
            View::Upcoming => Some("Fino alle:"),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Now => "Aule libere ora",
            View::Upcoming => "Aule libere",
        }
    }

    pub fn resolver(&self) -> Resolver {
        Resolver::new(self.annotation_format())
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Now => write!(f, "now"),
            View::Upcoming => write!(f, "upcoming"),
        }
    }
}
