use crate::model::{Incident, IncidentStore, Severity};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeverityFilter {
    All,
    Only(Severity),
}

impl Default for SeverityFilter {
    fn default() -> Self {
        Self::All
    }
}

impl SeverityFilter {
    pub fn name(self) -> &'static str {
        match self {
            SeverityFilter::All => "All",
            SeverityFilter::Only(s) => s.name(),
        }
    }

    fn admits(self, severity: Severity) -> bool {
        match self {
            SeverityFilter::All => true,
            SeverityFilter::Only(s) => s == severity,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    NewestFirst,
    OldestFirst,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::NewestFirst
    }
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::NewestFirst, SortOrder::OldestFirst];

    pub fn name(self) -> &'static str {
        match self {
            SortOrder::NewestFirst => "Newest First",
            SortOrder::OldestFirst => "Oldest First",
        }
    }
}

/// Transient list controls. Not persisted; the rendered list is a pure
/// function of these plus the store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewControls {
    pub filter: SeverityFilter,
    pub search: String,
    pub sort: SortOrder,
}

/// Derive the visible incident list: severity filter, then search filter,
/// then sort by reported instant. Ties on the instant break by id
/// ascending so the order stays deterministic.
pub fn derive_view<'a>(store: &'a IncidentStore, controls: &ViewControls) -> Vec<&'a Incident> {
    let mut rows: Vec<&Incident> = store
        .iter()
        .filter(|inc| controls.filter.admits(inc.severity))
        .filter(|inc| matches_search(inc, &controls.search))
        .collect();

    rows.sort_by(|a, b| {
        let (ta, tb) = (a.reported_instant(), b.reported_instant());
        let by_time = match controls.sort {
            SortOrder::NewestFirst => tb.cmp(&ta),
            SortOrder::OldestFirst => ta.cmp(&tb),
        };
        by_time.then_with(|| a.id.cmp(&b.id))
    });
    rows
}

/// Case-insensitive substring match against title, description, and each
/// tag. A blank search admits everything.
fn matches_search(incident: &Incident, search: &str) -> bool {
    let needle = search.trim();
    if needle.is_empty() {
        return true;
    }

    let needle = needle.to_lowercase();
    incident.title.to_lowercase().contains(&needle)
        || incident.description.to_lowercase().contains(&needle)
        || incident
            .tags
            .iter()
            .any(|t| t.to_lowercase().contains(&needle))
}
