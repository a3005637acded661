mod config;
mod gallery;
mod logging;
mod ui;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use crate::config::Config;
use crate::gallery::Gallery;
use crate::ui::theme::ThemePreference;

#[derive(Debug, Parser)]
#[command(name = "artspace", version, about = "Terminal art gallery viewer")]
struct Cli {
    /// Color scheme. Overrides the config file.
    #[arg(long, value_enum)]
    theme: Option<ThemePreference>,

    /// Config file path. Defaults to the platform config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the gallery to stdout and exit without starting the viewer.
    #[arg(long)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            anyhow::ensure!(path.exists(), "config file not found: {}", path.display());
            Config::load_from(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?
        }
        None => Config::load().context("failed to load config")?,
    };

    let gallery = Gallery::new(gallery::builtin()).context("built-in gallery is misconfigured")?;

    if cli.list {
        for (index, artwork) in gallery.iter().enumerate() {
            println!(
                "{}. {} by {} ({})",
                index + 1,
                artwork.title,
                artwork.artist,
                artwork.year
            );
        }
        return Ok(());
    }

    let theme = cli.theme.unwrap_or(config.theme).resolve();
    info!(
        theme = theme.label(),
        artworks = gallery.len(),
        "starting viewer"
    );

    ui::run(gallery, theme, Duration::from_millis(config.tick_rate_ms))
        .context("terminal UI failed")?;
    Ok(())
}
