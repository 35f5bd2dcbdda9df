//! FilmSleuth: movie metadata explorer.
//!
//! Thin binary entry point. All logic lives in the `filmsleuth-core`
//! and `filmsleuth-gui` crates.

use anyhow::Context;
use clap::Parser;
use filmsleuth_core::loader::LoadOptions;
use filmsleuth_gui::{DashboardState, ThemeMode};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "FilmSleuth")]
#[command(about = "Explore a movie metadata spreadsheet with filters and charts")]
#[command(version)]
struct Cli {
    /// Dataset to load (.xlsx, .xls, .ods, .csv or .tsv)
    #[arg(default_value = "mymoviedb.xlsx")]
    data: PathBuf,

    /// Worksheet to read; defaults to the first sheet
    #[arg(long)]
    sheet: Option<String>,

    /// Print a JSON summary of the cleaned dataset and exit
    #[arg(long)]
    report: bool,

    /// Start in light mode
    #[arg(long)]
    light: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise fall back to --log-level.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .context("invalid log level")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("FilmSleuth starting");

    let options = LoadOptions {
        sheet: cli.sheet.clone(),
    };
    let theme = if cli.light {
        ThemeMode::Light
    } else {
        ThemeMode::Dark
    };

    // Load and clean *before* opening the window so the first rendered
    // frame already has data.
    let state = DashboardState::from_path(&cli.data, &options, theme)?;

    if cli.report {
        let json = state
            .report
            .to_json_pretty()
            .context("failed to serialise report")?;
        println!("{json}");
        return Ok(());
    }

    let icon = filmsleuth_gui::icon::generate_icon(64);
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("FilmSleuth -- Movie Dashboard")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 560.0])
            .with_icon(icon),
        ..Default::default()
    };

    eframe::run_native(
        "FilmSleuth",
        options,
        Box::new(|cc| Ok(Box::new(filmsleuth_gui::FilmSleuthApp::with_state(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
