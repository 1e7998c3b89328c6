#![allow(non_snake_case)]

mod app;
mod bridge;
mod components;
mod content;
pub mod context;
mod dialogs;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use contactpage_core::logging::LoggingBuilder;
use contactpage_core::PageConfig;
use dioxus::desktop::{Config, WindowBuilder};

/// Global page configuration, set from command line
static PAGE_CONFIG: OnceLock<PageConfig> = OnceLock::new();

/// Get the page configuration (loaded at startup or default)
pub fn get_page_config() -> PageConfig {
    PAGE_CONFIG.get().cloned().unwrap_or_default()
}

/// Contact page - desktop preview of the marketing site
#[derive(Parser, Debug)]
#[command(name = "contactpage-desktop")]
#[command(about = "Marketing/contact page with its client-side interactions")]
struct Args {
    /// Page config file (JSON); defaults to <config dir>/contactpage/page.json if present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter (RUST_LOG takes precedence)
    #[arg(short, long, default_value = contactpage_core::logging::DEFAULT_FILTER)]
    log: String,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

/// Config file used when none is given on the command line
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("contactpage").join("page.json"))
        .filter(|path| path.exists())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    LoggingBuilder::new()
        .with_filter(args.log.clone())
        .init()
        .context("failed to install logging")?;

    let config = match args.config.clone().or_else(default_config_path) {
        Some(path) => {
            tracing::info!("Loading page config from {:?}", path);
            PageConfig::load(&path)
                .with_context(|| format!("failed to load page config {}", path.display()))?
        }
        None => PageConfig::default(),
    };
    let _ = PAGE_CONFIG.set(config);

    tracing::info!(
        "Starting contact page preview ({}x{})",
        args.width,
        args.height
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(content::SITE_NAME)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
