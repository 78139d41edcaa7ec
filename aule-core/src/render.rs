//! Rendering interface.
//!
//! The core never builds output itself; callers inject a `Renderer` (HTML,
//! terminal, ...) and hand it resolved data.

use crate::error::AuleResult;
use crate::pole::Pole;
use crate::room::AvailabilityEntry;
use crate::view::View;

pub const AVAILABLE_MARKER: &str = "✅";
pub const BUSY_MARKER: &str = "❌";

pub trait Renderer {
    fn poles(&self, poles: &[Pole]) -> AuleResult<String>;

    fn availability(
        &self,
        view: View,
        pole: &str,
        entries: &[AvailabilityEntry],
    ) -> AuleResult<String>;

    fn error(&self, message: &str) -> AuleResult<String>;
}

pub fn marker(available: bool) -> &'static str {
    if available { AVAILABLE_MARKER } else { BUSY_MARKER }
}

/// Trailing text of a row: label, annotation and a closing period.
/// Busy rooms and rooms without annotation get nothing.
pub fn annotation_text(view: View, entry: &AvailabilityEntry) -> Option<String> {
    let annotation = entry.annotation.as_deref().filter(|_| entry.available)?;
    Some(match view.annotation_label() {
        Some(label) => format!("{label} {annotation}."),
        None => format!("{annotation}."),
    })
}
