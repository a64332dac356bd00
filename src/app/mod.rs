mod run;
mod ui_state;

use crate::model::IncidentStore;
use eframe::egui;

pub use run::run;
pub use ui_state::UiState;

pub struct IncidentDeskApp {
    pub store: IncidentStore,
    pub ui: UiState,
}

impl Default for IncidentDeskApp {
    fn default() -> Self {
        Self {
            store: IncidentStore::seed(),
            ui: UiState::default(),
        }
    }
}

impl eframe::App for IncidentDeskApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        crate::ui::render_app(ctx, frame, self);
    }
}

impl IncidentDeskApp {
    /// Submit the current draft. A blank title or description declines
    /// silently and leaves the draft in place.
    pub fn submit_draft(&mut self) {
        self.store.add(&mut self.ui.draft);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Severity;

    #[test]
    fn submit_draft_prepends_incident_and_resets_form() {
        let mut app = IncidentDeskApp::default();
        let before = app.store.len();
        app.ui.draft.title = "Disk pressure on ingest node".into();
        app.ui.draft.description = "Node ran below 5% free".into();
        app.ui.draft.severity = Severity::High;

        app.submit_draft();

        assert_eq!(app.store.len(), before + 1);
        let first = app.store.iter().next().unwrap();
        assert_eq!(first.title, "Disk pressure on ingest node");
        assert_eq!(first.severity, Severity::High);
        assert!(app.ui.draft.title.is_empty());
    }

    #[test]
    fn submit_draft_with_blank_fields_changes_nothing() {
        let mut app = IncidentDeskApp::default();
        let before = app.store.len();
        app.ui.draft.title = "  ".into();
        app.ui.draft.description = "something".into();

        app.submit_draft();

        assert_eq!(app.store.len(), before);
        assert_eq!(app.ui.expanded, None);
        assert_eq!(app.ui.draft.description, "something");
    }
}
