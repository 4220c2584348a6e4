mod app;
mod ui;

use app::LaSearchApp;
use eframe::egui;
use la_search::config::AppConfig;
use la_search::data::handle::DatasetHandle;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::from_env();
    log::info!("Using dataset {}", config.data_path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Food Search for Linoleic Acid Data",
        options,
        Box::new(move |_cc| Ok(Box::new(LaSearchApp::new(DatasetHandle::new(config.data_path))))),
    )
}
