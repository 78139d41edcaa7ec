use anyhow::{Context, Result};

use aule_core::View;
use aule_core::render::Renderer;

use crate::client::Client;

pub async fn run(client: &Client, renderer: &dyn Renderer, view: View, pole: &str) -> Result<String> {
    let pole = pole.trim().to_lowercase();
    if pole.is_empty() {
        anyhow::bail!("Missing pole name");
    }

    let entries = client.availability(view, &pole).await?;

    renderer
        .availability(view, &pole, &entries)
        .with_context(|| format!("Failed to render rooms for '{pole}'"))
}
