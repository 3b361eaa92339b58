use agri_yield::{
    logging,
    AgriApp,
    AppConfig,
};
use eframe::egui;

const APP_TITLE: &str = "Agri-AI Yield Predictor";

fn main() -> eframe::Result<()> {
    if let Err(e) = logging::init() {
        eprintln!("{e}");
    }

    let config = AppConfig::load();
    tracing::info!(api = %config.api_base_url, "Starting {}", APP_TITLE);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([560.0, 760.0])
            .with_min_inner_size([420.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(AgriApp::new(cc, config)?))),
    )
}
