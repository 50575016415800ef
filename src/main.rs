use std::path::PathBuf;

use eframe::egui;
use perfstats_viewer::app::ViewerApp;
use perfstats_viewer::state::config::ViewerConfig;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ViewerConfig::from_env();
    let initial = std::env::args_os().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Performance Stats Viewer")
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "perfstats-viewer",
        options,
        Box::new(move |cc| Ok(Box::new(ViewerApp::new(cc, config, initial)))),
    )
}
