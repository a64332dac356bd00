use crate::model::{Draft, IncidentId, ViewControls};

#[derive(Default)]
pub struct UiState {
    pub controls: ViewControls,
    pub draft: Draft,
    /// At most one incident shows its details at a time.
    pub expanded: Option<IncidentId>,
    pub show_about: bool,
}

impl UiState {
    /// Expand `id`, collapse it if it is already the expanded one, and
    /// implicitly collapse whatever else was open.
    pub fn toggle_expanded(&mut self, id: IncidentId) {
        if self.expanded == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_expanded_opens_closes_and_replaces() {
        let mut ui = UiState::default();
        assert_eq!(ui.expanded, None);

        ui.toggle_expanded(IncidentId(3));
        assert_eq!(ui.expanded, Some(IncidentId(3)));

        ui.toggle_expanded(IncidentId(3));
        assert_eq!(ui.expanded, None);

        ui.toggle_expanded(IncidentId(3));
        ui.toggle_expanded(IncidentId(5));
        assert_eq!(ui.expanded, Some(IncidentId(5)));
    }
}
