use crate::app::IncidentDeskApp;
use crate::model::Severity;
use eframe::egui;

pub fn report_form_panel(ui: &mut egui::Ui, app: &mut IncidentDeskApp) {
    ui.heading("Report an Incident");
    ui.add_space(8.0);

    ui.label(egui::RichText::new("Title").strong());
    ui.text_edit_singleline(&mut app.ui.draft.title);
    ui.add_space(6.0);

    ui.label(egui::RichText::new("Description").strong());
    ui.add(
        egui::TextEdit::multiline(&mut app.ui.draft.description)
            .desired_rows(5)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(6.0);

    ui.label(egui::RichText::new("Tags").strong());
    ui.text_edit_singleline(&mut app.ui.draft.tags_text);
    ui.label(egui::RichText::new("Comma separated; blanks are dropped.").weak());
    ui.add_space(6.0);

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Severity").strong());
        egui::ComboBox::from_id_source("draft_severity")
            .selected_text(app.ui.draft.severity.name())
            .show_ui(ui, |ui| {
                for sev in Severity::ALL {
                    ui.selectable_value(&mut app.ui.draft.severity, sev, sev.name());
                }
            });
    });
    ui.add_space(10.0);

    // A blank title or description makes submission a silent no-op.
    if ui.button("Submit").clicked() {
        app.submit_draft();
    }
}
