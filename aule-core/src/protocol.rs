//! JSON payloads served by the classrooms API.
//!
//! Every endpoint wraps its data in a single named field. When the server
//! cannot produce the data it answers `{"message": "..."}` instead, which
//! surfaces here as `AuleError::DataUnavailable`.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{AuleError, AuleResult};
use crate::pole::Pole;
use crate::room::{FreeRoomRecord, RoomName};

pub const POLES_FIELD: &str = "poles_data";
pub const ROOMS_FIELD: &str = "all_rooms";
pub const FREE_ROOMS_FIELD: &str = "free_classrooms";

/// `{"Classroom": "..."}`
#[derive(Debug, Deserialize)]
struct ClassroomItem {
    #[serde(rename = "Classroom")]
    classroom: String,
}

/// `{"Classroom": "...", "NextStartTime": "YYYY-MM-DD HH:MM"}`
#[derive(Debug, Deserialize)]
struct NextStartItem {
    #[serde(rename = "Classroom")]
    classroom: String,
    #[serde(rename = "NextStartTime", default)]
    next_start_time: Option<String>,
}

/// Get the list stored under `field`.
fn field<'a>(payload: &'a Value, field: &str) -> AuleResult<&'a [Value]> {
    match payload.get(field) {
        Some(Value::Array(items)) => Ok(items),
        None | Some(Value::Null) => Err(AuleError::DataUnavailable {
            field: field.to_string(),
            message: payload
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
        }),
        Some(other) => Err(AuleError::Serialization(format!(
            "'{field}' should be a list, got {other}"
        ))),
    }
}

/// Objects with a single `{key: value}` pair.
fn single_pair(item: &Value) -> AuleResult<(&String, &Value)> {
    item.as_object()
        .and_then(|obj| obj.iter().next())
        .ok_or_else(|| AuleError::Serialization(format!("expected a {{name: value}} object, got {item}")))
}

fn from_item<T: DeserializeOwned>(item: &Value) -> AuleResult<T> {
    T::deserialize(item).map_err(|e| AuleError::Serialization(e.to_string()))
}

/// `{"poles_data": [{"Pole Name": "link"}, ...]}`
pub fn decode_poles(payload: &Value) -> AuleResult<Vec<Pole>> {
    field(payload, POLES_FIELD)?
        .iter()
        .map(|item| {
            let (name, link) = single_pair(item)?;
            let link = link.as_str().ok_or_else(|| {
                AuleError::Serialization(format!("link of pole '{name}' should be a string, got {link}"))
            })?;
            Ok(Pole::new(name, link))
        })
        .collect()
}

/// `{"all_rooms": ["Aula A", ...]}`
pub fn decode_room_names(payload: &Value) -> AuleResult<Vec<RoomName>> {
    field(payload, ROOMS_FIELD)?.iter().map(from_item).collect()
}

/// `{"all_rooms": [{"Classroom": "Aula A"}, ...]}`
pub fn decode_classrooms(payload: &Value) -> AuleResult<Vec<RoomName>> {
    field(payload, ROOMS_FIELD)?
        .iter()
        .map(|item| from_item::<ClassroomItem>(item).map(|c| c.classroom))
        .collect()
}

/// `{"free_classrooms": [{"Aula A": "Free until: 14:30"}, ...]}`
pub fn decode_free_now(payload: &Value) -> AuleResult<Vec<FreeRoomRecord>> {
    field(payload, FREE_ROOMS_FIELD)?
        .iter()
        .map(|item| {
            let (room, annotation) = single_pair(item)?;
            Ok(FreeRoomRecord {
                room: room.clone(),
                annotation: annotation.as_str().map(str::to_string),
            })
        })
        .collect()
}

/// `{"free_classrooms": [{"Classroom": "Aula A", "NextStartTime": "..."}, ...]}`
pub fn decode_free_next_start(payload: &Value) -> AuleResult<Vec<FreeRoomRecord>> {
    field(payload, FREE_ROOMS_FIELD)?
        .iter()
        .map(|item| {
            let item: NextStartItem = from_item(item)?;
            Ok(FreeRoomRecord {
                room: item.classroom,
                annotation: item.next_start_time,
            })
        })
        .collect()
}
