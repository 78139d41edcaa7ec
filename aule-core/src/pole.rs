//! Academic poles (sites grouping classrooms).

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Page that shows a single pole's rooms.
pub const DEFAULT_POLE_PAGE: &str = "/polo.html";

/// Query parameter carrying the pole name on the pole page.
pub const POLE_QUERY_PARAM: &str = "polo";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pole {
    /// Lower-cased, trimmed name. This is what the API expects back.
    pub name: String,
    /// Upstream schedule page for this pole
    pub link: String,
}

impl Pole {
    pub fn new(raw_name: &str, link: impl Into<String>) -> Self {
        Pole {
            name: raw_name.trim().to_lowercase(),
            link: link.into(),
        }
    }

    /// Name with its first letter upper-cased, for display.
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Link to the per-pole page, e.g. "/polo.html?polo=fibonacci".
    pub fn page_href(&self, page: &str) -> String {
        let name: String = form_urlencoded::byte_serialize(self.name.as_bytes()).collect();
        format!("{page}?{POLE_QUERY_PARAM}={name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_sanitized() {
        let pole = Pole::new("  Polo Fibonacci \n", "https://example.org/fib");
        assert_eq!(pole.name, "polo fibonacci");
        assert_eq!(pole.display_name(), "Polo fibonacci");
    }

    #[test]
    fn href_encodes_name() {
        let pole = Pole::new("Polo A", "");
        assert_eq!(pole.page_href(DEFAULT_POLE_PAGE), "/polo.html?polo=polo+a");
    }

    #[test]
    fn empty_name_displays_empty() {
        assert_eq!(Pole::new("   ", "").display_name(), "");
    }
}
