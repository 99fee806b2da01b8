//! Dental Chart Studio - Desktop Demo
//!
//! An interactive anatomical dental chart: click a tooth to cycle its
//! clinical status, toggle statuses in the legend, switch dentition modes
//! and zoom the rendering.

use dental_gui::app::DentalApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Dental Chart Studio")
            .with_inner_size([980.0, 540.0])
            .with_min_inner_size([700.0, 440.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Dental Chart Studio",
        options,
        Box::new(|cc| Ok(Box::new(DentalApp::new(cc)))),
    )
}
