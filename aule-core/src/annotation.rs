//! Formatting of free-room annotations.

use chrono::NaiveTime;

use crate::error::{AuleError, AuleResult};

/// How a raw annotation from the API becomes display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnnotationFormat {
    /// Keep the text as sent (e.g. "Free until: 14:30").
    #[default]
    Verbatim,
    /// Keep only the clock part of a "<date> <time>" timestamp.
    ClockTime,
}

impl AnnotationFormat {
    pub fn apply(&self, raw: &str) -> AuleResult<String> {
        match self {
            AnnotationFormat::Verbatim => Ok(raw.to_string()),
            AnnotationFormat::ClockTime => clock_time(raw),
        }
    }
}

/// "2024-05-06 14:30" -> "14:30". Seconds are dropped when present, and
/// anything after the time token is ignored.
fn clock_time(raw: &str) -> AuleResult<String> {
    let time = raw
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| AuleError::MalformedAnnotation(raw.to_string()))?;

    match NaiveTime::parse_from_str(time, "%H:%M:%S") {
        Ok(parsed) => Ok(parsed.format("%H:%M").to_string()),
        Err(_) => Ok(time.to_string()),
    }
}
