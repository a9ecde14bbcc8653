#![allow(non_snake_case)]

mod app;
mod components;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Card document to open at launch, set from command line
static STARTUP_CARD: OnceLock<PathBuf> = OnceLock::new();

/// Get the card document passed on the command line, if any
pub fn startup_card_path() -> Option<PathBuf> {
    STARTUP_CARD.get().cloned()
}

/// Cardsmith - custom trading-card studio
#[derive(Parser, Debug)]
#[command(name = "cardsmith-desktop")]
#[command(about = "Cardsmith - design, preview, and export custom trading cards")]
struct Args {
    /// Card document (.json) to open at launch
    #[arg(short, long)]
    card: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    if let Some(path) = args.card {
        tracing::info!("Opening card document: {:?}", path);
        let _ = STARTUP_CARD.set(path);
    }

    // Editor column plus the fixed 400x560 preview
    let window_width = 1180.0;
    let window_height = 920.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Cardsmith")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
