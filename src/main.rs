mod app;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use app::ArticleExplorerApp;
use article_explorer::config::ExplorerConfig;
use article_explorer::data::loader::TableCache;
use article_explorer::state::AppState;
use clap::Parser;
use eframe::egui;

#[derive(Parser)]
#[command(name = "article-explorer")]
#[command(about = "Filter, search and export article/author tables")]
#[command(version)]
struct Cli {
    /// CSV file with one row per author of each article
    #[arg(env = "ARTICLE_EXPLORER_DATA")]
    data: Option<PathBuf>,

    /// JSON config file (default: ./article-explorer.json if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Default log filter when RUST_LOG is unset
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    let mut config = ExplorerConfig::load(cli.config.as_deref())?;
    if let Some(data) = cli.data {
        config.data_path = data;
    }

    let cache = TableCache::new(&config.data_path, config.author_cap);
    let table = cache
        .get()
        .with_context(|| format!("loading {}", cache.path().display()))?;

    let mut state = AppState::new(config);
    state.set_dataset(table);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Article Explorer",
        options,
        Box::new(move |_cc| Ok(Box::new(ArticleExplorerApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("UI error: {e}"))
}
