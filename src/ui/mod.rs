mod incidents;
mod report_form;

use crate::app::IncidentDeskApp;
use crate::model::{derive_view, Severity};
use eframe::egui;

pub fn render_app(ctx: &egui::Context, frame: &mut eframe::Frame, app: &mut IncidentDeskApp) {
    top_bar(ctx, frame, app);

    egui::SidePanel::left("incidents_panel")
        .resizable(true)
        .default_width(480.0)
        .show(ctx, |ui| incidents::incidents_panel(ui, app));

    egui::CentralPanel::default().show(ctx, |ui| report_form::report_form_panel(ui, app));

    about_window(ctx, app);
    status_bar(ctx, app);
}

fn top_bar(ctx: &egui::Context, frame: &mut eframe::Frame, app: &mut IncidentDeskApp) {
    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Quit").clicked() {
                    let _ = frame; // keep signature stable if we later use frame APIs
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset zoom").clicked() {
                    ctx.set_zoom_factor(1.0);
                    ui.close_menu();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    app.ui.show_about = true;
                    ui.close_menu();
                }
            });
        });
    });
}

fn about_window(ctx: &egui::Context, app: &mut IncidentDeskApp) {
    if !app.ui.show_about {
        return;
    }

    egui::Window::new("About Incident Desk")
        .open(&mut app.ui.show_about)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label("In-memory incident dashboard for a single session.");
            ui.label("Report, filter, sort, and acknowledge incidents; nothing persists.");
        });
}

fn status_bar(ctx: &egui::Context, app: &mut IncidentDeskApp) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Incidents: {}", app.store.len()));
            ui.separator();
            let shown = derive_view(&app.store, &app.ui.controls).len();
            ui.label(format!("Showing: {shown}"));
            ui.separator();
            if let Some(id) = app.ui.expanded {
                if let Some(inc) = app.store.get(id) {
                    ui.label(format!("Expanded: {}", inc.title));
                } else {
                    ui.label("Expanded: (missing)");
                }
            } else {
                ui.label("Expanded: (none)");
            }
        });
    });
}

pub fn severity_color(sev: Severity) -> egui::Color32 {
    match sev {
        Severity::Low => egui::Color32::from_rgb(90, 160, 255),
        Severity::Medium => egui::Color32::from_rgb(255, 170, 0),
        Severity::High => egui::Color32::from_rgb(255, 70, 70),
    }
}
