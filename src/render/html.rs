use minijinja::{Environment, context};
use serde::Serialize;

use aule_core::render::{Renderer, annotation_text, marker};
use aule_core::{AuleError, AuleResult, AvailabilityEntry, Pole, View};

// Template names end in .html so minijinja escapes their output.
const POLES_TEMPLATE: &str = r#"<ul>
{%- for pole in poles %}
  <li><a href="{{ pole.href|safe }}">{{ pole.name }}</a></li>
{%- endfor %}
</ul>
"#;

const ROOMS_TEMPLATE: &str = r#"<ul>
{%- for row in rows %}
  <li>{{ row.room }} - {{ row.marker }}{% if row.annotation %} {{ row.annotation }}{% endif %}</li>
{%- endfor %}
</ul>
"#;

const ERROR_TEMPLATE: &str = "<p>{{ message }}</p>";

#[derive(Serialize)]
struct PoleLink {
    href: String,
    name: String,
}

#[derive(Serialize)]
struct RoomRow<'a> {
    room: &'a str,
    marker: &'static str,
    annotation: Option<String>,
}

/// Renders `<ul>` lists, one `<li>` per pole or room.
pub struct HtmlRenderer {
    env: Environment<'static>,
    pole_page: String,
}

impl HtmlRenderer {
    pub fn new(pole_page: &str) -> AuleResult<Self> {
        let mut env = Environment::new();
        for (name, source) in [
            ("poles.html", POLES_TEMPLATE),
            ("rooms.html", ROOMS_TEMPLATE),
            ("error.html", ERROR_TEMPLATE),
        ] {
            env.add_template(name, source).map_err(render_error)?;
        }

        Ok(Self {
            env,
            pole_page: pole_page.to_string(),
        })
    }

    fn render(&self, name: &str, ctx: minijinja::Value) -> AuleResult<String> {
        self.env
            .get_template(name)
            .and_then(|t| t.render(ctx))
            .map_err(render_error)
    }
}

fn render_error(e: minijinja::Error) -> AuleError {
    AuleError::Render(e.to_string())
}

impl Renderer for HtmlRenderer {
    fn poles(&self, poles: &[Pole]) -> AuleResult<String> {
        let poles: Vec<PoleLink> = poles
            .iter()
            .map(|pole| PoleLink {
                href: pole.page_href(&self.pole_page),
                name: pole.display_name(),
            })
            .collect();

        self.render("poles.html", context! { poles })
    }

    fn availability(
        &self,
        view: View,
        _pole: &str,
        entries: &[AvailabilityEntry],
    ) -> AuleResult<String> {
        let rows: Vec<RoomRow> = entries
            .iter()
            .map(|entry| RoomRow {
                room: &entry.room,
                marker: marker(entry.available),
                annotation: annotation_text(view, entry),
            })
            .collect();

        self.render("rooms.html", context! { rows })
    }

    fn error(&self, message: &str) -> AuleResult<String> {
        self.render("error.html", context! { message })
    }
}
