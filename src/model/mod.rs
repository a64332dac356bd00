mod draft;
mod incident;
mod store;
mod view;

pub use draft::Draft;
pub use incident::{Incident, IncidentId, Severity};
pub use store::IncidentStore;
pub use view::{derive_view, SeverityFilter, SortOrder, ViewControls};
