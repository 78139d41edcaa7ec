use anyhow::{Context, Result};

use aule_core::render::Renderer;

use crate::client::Client;

pub async fn run(client: &Client, renderer: &dyn Renderer) -> Result<String> {
    let poles = client.poles().await?;
    tracing::info!(count = poles.len(), "fetched poles");

    renderer.poles(&poles).context("Failed to render poles")
}
