use crate::app::IncidentDeskApp;
use crate::model::{derive_view, IncidentId, Severity, SeverityFilter, SortOrder};
use crate::util::time::display_date;
use eframe::egui;

pub fn incidents_panel(ui: &mut egui::Ui, app: &mut IncidentDeskApp) {
    ui.heading("Incidents");
    ui.add_space(6.0);

    severity_summary(ui, app);
    ui.add_space(6.0);
    controls(ui, app);
    ui.add_space(6.0);
    incident_list(ui, app);
}

fn severity_summary(ui: &mut egui::Ui, app: &IncidentDeskApp) {
    let mut low = 0usize;
    let mut medium = 0usize;
    let mut high = 0usize;
    for inc in app.store.iter() {
        match inc.severity {
            Severity::Low => low += 1,
            Severity::Medium => medium += 1,
            Severity::High => high += 1,
        }
    }
    ui.horizontal_wrapped(|ui| {
        ui.label(format!("Total {}", app.store.len()));
        ui.colored_label(
            crate::ui::severity_color(Severity::Low),
            format!("Low {low}"),
        );
        ui.colored_label(
            crate::ui::severity_color(Severity::Medium),
            format!("Med {medium}"),
        );
        ui.colored_label(
            crate::ui::severity_color(Severity::High),
            format!("High {high}"),
        );
    });
}

fn controls(ui: &mut egui::Ui, app: &mut IncidentDeskApp) {
    ui.horizontal(|ui| {
        ui.label("Search:");
        ui.text_edit_singleline(&mut app.ui.controls.search);
        if ui.button("Clear").clicked() {
            app.ui.controls.search.clear();
        }
    });

    ui.horizontal(|ui| {
        ui.label("Severity:");
        egui::ComboBox::from_id_source("severity_filter")
            .selected_text(app.ui.controls.filter.name())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut app.ui.controls.filter, SeverityFilter::All, "All");
                for sev in Severity::ALL {
                    ui.selectable_value(
                        &mut app.ui.controls.filter,
                        SeverityFilter::Only(sev),
                        sev.name(),
                    );
                }
            });

        ui.label("Sort:");
        egui::ComboBox::from_id_source("sort_order")
            .selected_text(app.ui.controls.sort.name())
            .show_ui(ui, |ui| {
                for sort in SortOrder::ALL {
                    ui.selectable_value(&mut app.ui.controls.sort, sort, sort.name());
                }
            });
    });
}

fn incident_list(ui: &mut egui::Ui, app: &mut IncidentDeskApp) {
    let visible: Vec<IncidentId> = derive_view(&app.store, &app.ui.controls)
        .iter()
        .map(|inc| inc.id)
        .collect();

    // Clicks are applied after the loop; rows only borrow the store.
    let mut toggle_details: Option<IncidentId> = None;
    let mut toggle_ack: Option<IncidentId> = None;

    egui::ScrollArea::vertical()
        .id_source("incident_list_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if visible.is_empty() {
                ui.label("No incidents match the current filters.");
                return;
            }

            for id in visible {
                let Some(inc) = app.store.get(id) else {
                    continue;
                };
                let expanded = app.ui.expanded == Some(id);

                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!("{:<4}", inc.severity.label()))
                            .monospace()
                            .color(crate::ui::severity_color(inc.severity)),
                    );
                    ui.monospace(display_date(&inc.reported_at));
                    let title = egui::RichText::new(&inc.title).strong();
                    if inc.acknowledged {
                        ui.label(title.weak());
                    } else {
                        ui.label(title);
                    }
                });

                ui.horizontal(|ui| {
                    let details_label = if expanded { "Hide Details" } else { "View Details" };
                    if ui.button(details_label).clicked() {
                        toggle_details = Some(id);
                    }

                    let ack_label = if inc.acknowledged {
                        "Acknowledged"
                    } else {
                        "Acknowledge"
                    };
                    if ui.selectable_label(inc.acknowledged, ack_label).clicked() {
                        toggle_ack = Some(id);
                    }
                });

                if expanded {
                    ui.add_space(4.0);
                    ui.add(egui::Label::new(&inc.description).wrap(true));
                    if !inc.tags.is_empty() {
                        ui.horizontal_wrapped(|ui| {
                            for tag in &inc.tags {
                                ui.label(
                                    egui::RichText::new(format!("#{tag}")).monospace().weak(),
                                );
                            }
                        });
                    }
                }

                ui.separator();
            }
        });

    if let Some(id) = toggle_details {
        app.ui.toggle_expanded(id);
    }
    if let Some(id) = toggle_ack {
        app.store.toggle_acknowledge(id);
    }
}
