mod app;
mod convert;
mod messages;
mod panels;
mod states;
mod workers;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use folio_core::config::ViewerConfig;
use folio_core::consts::APP_DIR_NAME;
use tracing::info;

#[derive(Parser)]
#[command(name = "folio", about = "Portfolio landing page with a paginated PDF viewer")]
#[command(version)]
struct Args {
    /// Config file (default: <config dir>/folio/folio.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// PDF to show instead of the configured document
    #[arg(long)]
    document: Option<PathBuf>,

    /// Print the effective config as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join("folio.toml"))
}

fn load_config(explicit: Option<&Path>) -> Result<ViewerConfig> {
    if let Some(path) = explicit {
        return ViewerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }

    match default_config_path().filter(|p| p.is_file()) {
        Some(path) => {
            info!(path = %path.display(), "Using config");
            ViewerConfig::load(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))
        }
        None => Ok(ViewerConfig::default()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut config = load_config(args.config.as_deref())?;
    if let Some(document) = args.document {
        config.document = document;
    }

    if args.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([360.0, 480.0])
            .with_title("Folio"),
        ..Default::default()
    };

    eframe::run_native(
        "Folio",
        options,
        Box::new(move |cc| Ok(Box::new(app::FolioApp::new(&cc.egui_ctx, config)))),
    )
    .map_err(|e| anyhow::anyhow!("Window failed: {e}"))
}
