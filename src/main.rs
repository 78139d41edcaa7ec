mod client;
mod commands;
mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use aule_core::render::Renderer;
use aule_core::{AuleConfig, View};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::client::Client;
use crate::render::{HtmlRenderer, TextRenderer};

#[derive(Parser)]
#[command(name = "aule")]
#[command(about = "Find free classrooms in your university's poles")]
struct Cli {
    #[command(flatten)]
    args: OutputArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct OutputArgs {
    /// Classrooms API root (overrides config and AULE_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Html, global = true)]
    format: Format,

    /// Write output to this file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// List all poles
    Poles,
    /// Rooms of a pole available right now
    Now {
        pole: String,
    },
    /// Rooms of a pole with the time they stay free until
    Rooms {
        pole: String,
    },
    /// Create the config file if missing and print its path
    Config,
}

/// A page fetched from the API and rendered.
enum Page {
    Poles,
    Rooms(View, String),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Config => commands::config::run(),
        Commands::Poles => render_page(cli.args, Page::Poles).await,
        Commands::Now { pole } => render_page(cli.args, Page::Rooms(View::Now, pole)).await,
        Commands::Rooms { pole } => {
            render_page(cli.args, Page::Rooms(View::Upcoming, pole)).await
        }
    }
}

async fn render_page(args: OutputArgs, page: Page) -> Result<()> {
    let mut config = AuleConfig::load().context("Failed to load config")?;
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }

    let renderer: Box<dyn Renderer> = match args.format {
        Format::Html => Box::new(HtmlRenderer::new(&config.pole_page)?),
        Format::Text => Box::new(TextRenderer::new(&config.pole_page)),
    };
    let client = Client::new(&config)?;

    let result = match page {
        Page::Poles => commands::poles::run(&client, renderer.as_ref()).await,
        Page::Rooms(view, pole) => {
            commands::rooms::run(&client, renderer.as_ref(), view, &pole).await
        }
    };

    finish(result, renderer.as_ref(), args.output.as_deref())
}

/// Write the rendered page, or the error page in its place. A failure is
/// returned as is, even when the error page itself cannot be produced.
fn finish(result: Result<String>, renderer: &dyn Renderer, output: Option<&Path>) -> Result<()> {
    let err = match result {
        Ok(page) => return write_output(output, &page),
        Err(err) => err,
    };

    let written = renderer
        .error(&render::error_message(&err))
        .map_err(anyhow::Error::from)
        .and_then(|page| write_output(output, &page));
    if let Err(page_err) = written {
        tracing::warn!("could not write error page: {page_err:#}");
    }

    Err(err)
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            println!("{content}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aule_core::{AuleError, AuleResult, AvailabilityEntry, Pole};

    struct BrokenRenderer;

    impl Renderer for BrokenRenderer {
        fn poles(&self, _: &[Pole]) -> AuleResult<String> {
            Err(AuleError::Render("broken".into()))
        }

        fn availability(&self, _: View, _: &str, _: &[AvailabilityEntry]) -> AuleResult<String> {
            Err(AuleError::Render("broken".into()))
        }

        fn error(&self, _: &str) -> AuleResult<String> {
            Err(AuleError::Render("broken".into()))
        }
    }

    #[test]
    fn config_command_parses_without_other_args() {
        let cli = Cli::try_parse_from(["aule", "config"]).unwrap();
        assert!(matches!(cli.command, Commands::Config));

        let cli = Cli::try_parse_from(["aule", "rooms", "fibonacci", "--format", "text"]).unwrap();
        assert!(matches!(cli.command, Commands::Rooms { ref pole } if pole == "fibonacci"));
        assert!(matches!(cli.args.format, Format::Text));
    }

    #[test]
    fn failure_writes_error_page_and_keeps_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");
        let renderer = HtmlRenderer::new("/polo.html").unwrap();

        let failed = Err(AuleError::Request("timeout".into()).into());
        let err = finish(failed, &renderer, Some(&path)).unwrap_err();

        assert!(matches!(err.downcast_ref::<AuleError>(), Some(AuleError::Request(_))));
        let page = std::fs::read_to_string(&path).unwrap();
        assert_eq!(page.trim(), "<p>Errore nel contattare le APIs.</p>");
    }

    #[test]
    fn broken_error_page_keeps_original_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");

        let failed = Err(AuleError::DataUnavailable {
            field: "all_rooms".into(),
            message: None,
        }
        .into());
        let err = finish(failed, &BrokenRenderer, Some(&path)).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<AuleError>(),
            Some(AuleError::DataUnavailable { .. })
        ));
        assert!(!path.exists());
    }

    #[test]
    fn success_writes_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");

        finish(Ok("<ul>\n</ul>".into()), &BrokenRenderer, Some(&path)).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<ul>\n</ul>");
    }
}
