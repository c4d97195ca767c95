mod app;
mod color;
mod data;
mod state;
mod ui;

use app::BalkanDashApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    // Optional dataset path on the command line, loaded before first paint.
    let app = match std::env::args().nth(1) {
        Some(arg) => {
            let path = std::path::PathBuf::from(arg);
            match data::loader::load_file(&path) {
                Ok(dataset) => {
                    log::info!("Loaded {} data points from {}", dataset.len(), path.display());
                    BalkanDashApp::with_dataset(dataset)
                }
                Err(e) => {
                    log::error!("Failed to load {}: {e:#}", path.display());
                    let mut app = BalkanDashApp::default();
                    app.state.set_load_error(format!(
                        "Error: {e:#}. Expected a consolidated dataset (JSON) or a flat CSV table."
                    ));
                    app
                }
            }
        }
        None => BalkanDashApp::default(),
    };

    eframe::run_native(
        "Balkan Dash – Indicator Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
