mod app;
mod charts;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::LaunchBoardApp;
use eframe::egui;

/// The launch table read once at startup; there are no flags or other inputs.
const DATA_FILE: &str = "data/launches.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Launch Records Dashboard",
        options,
        Box::new(|_cc| {
            // A missing or malformed table is startup-fatal.
            let dataset = data::loader::load_csv(Path::new(DATA_FILE))?;
            Ok(Box::new(LaunchBoardApp::new(dataset)))
        }),
    )
}
