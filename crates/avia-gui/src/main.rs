//! GUI entry point for Avia Calc

mod app;

use app::AviaApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 720.0])
            .with_min_inner_size([420.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Расчёт топлива",
        options,
        Box::new(|cc| Ok(Box::new(AviaApp::new(cc)))),
    )
}
