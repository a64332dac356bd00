use crate::app::IncidentDeskApp;
use eframe::egui;

pub fn run() -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Incident Desk")
            .with_inner_size([1000.0, 680.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Incident Desk",
        native_options,
        Box::new(|_cc| Box::<IncidentDeskApp>::default()),
    )
}
