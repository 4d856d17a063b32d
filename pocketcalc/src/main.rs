//! pocketcalc - a four-function pocket calculator
//!
//! One number, one pending operator, equals.

mod app;
mod clipboard;

use app::PocketCalcApp;
use eframe::NativeOptions;
use pocketcore::{logging, CalcTheme, Settings, StorageError};

fn main() -> eframe::Result<()> {
    let loaded = Settings::load();
    let settings = loaded.as_ref().cloned().unwrap_or_default();
    logging::init(&settings.log_filter);
    match loaded {
        Ok(_) => {}
        Err(StorageError::NotFound(path)) => {
            tracing::info!("no settings at {}, using defaults", path.display())
        }
        Err(err) => tracing::warn!("failed to load settings: {err}, using defaults"),
    }

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([300.0, 500.0])
            .with_title("calculator"),
        ..Default::default()
    };

    tracing::info!("starting pocketcalc");
    eframe::run_native(
        "calculator",
        options,
        Box::new(move |cc| {
            CalcTheme::default().apply(&cc.egui_ctx);
            Box::new(PocketCalcApp::new(cc, settings))
        }),
    )
}
