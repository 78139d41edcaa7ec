//! Colored terminal rendering, for checking a pole without a browser.

use owo_colors::OwoColorize;

use aule_core::render::{Renderer, annotation_text, marker};
use aule_core::{AuleResult, AvailabilityEntry, Pole, View};

pub struct TextRenderer {
    pole_page: String,
}

impl TextRenderer {
    pub fn new(pole_page: &str) -> Self {
        Self {
            pole_page: pole_page.to_string(),
        }
    }
}

fn render_entry(view: View, entry: &AvailabilityEntry) -> String {
    let room = if entry.available {
        entry.room.green().to_string()
    } else {
        entry.room.dimmed().to_string()
    };

    match annotation_text(view, entry) {
        Some(text) => format!("   {} {} {}", marker(entry.available), room, text.dimmed()),
        None => format!("   {} {}", marker(entry.available), room),
    }
}

impl Renderer for TextRenderer {
    fn poles(&self, poles: &[Pole]) -> AuleResult<String> {
        if poles.is_empty() {
            return Ok("   No poles".dimmed().to_string());
        }

        let lines: Vec<String> = poles
            .iter()
            .map(|pole| {
                format!(
                    "📍 {} {}",
                    pole.display_name().bold(),
                    pole.page_href(&self.pole_page).dimmed()
                )
            })
            .collect();

        Ok(lines.join("\n"))
    }

    fn availability(
        &self,
        view: View,
        pole: &str,
        entries: &[AvailabilityEntry],
    ) -> AuleResult<String> {
        let mut lines = vec![format!("{} {}", view.title().bold(), pole)];

        if entries.is_empty() {
            lines.push("   No rooms".dimmed().to_string());
        }
        lines.extend(entries.iter().map(|entry| render_entry(view, entry)));

        let free = entries.iter().filter(|e| e.available).count();
        lines.push(format!("   ({free}/{} free)", entries.len()).dimmed().to_string());

        Ok(lines.join("\n"))
    }

    fn error(&self, message: &str) -> AuleResult<String> {
        Ok(message.red().to_string())
    }
}
