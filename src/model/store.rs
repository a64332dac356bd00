use crate::model::draft::split_tags;
use crate::model::{Draft, Incident, IncidentId, Severity};

/// Authoritative in-memory sequence of incidents for the session.
/// Newest submissions sit at the front; only `acknowledged` mutates
/// after an incident is admitted.
#[derive(Default)]
pub struct IncidentStore {
    incidents: Vec<Incident>,
    next_id: u64,
}

impl IncidentStore {
    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Incident> {
        self.incidents.iter()
    }

    pub fn get(&self, id: IncidentId) -> Option<&Incident> {
        self.incidents.iter().find(|i| i.id == id)
    }

    /// Admit a draft as a new incident at the front of the store.
    ///
    /// Declines silently (returns `None`, draft untouched) when the title
    /// or description is blank after trimming. On success the draft is
    /// reset to its empty defaults.
    pub fn add(&mut self, draft: &mut Draft) -> Option<IncidentId> {
        let title = draft.title.trim();
        let description = draft.description.trim();
        if title.is_empty() || description.is_empty() {
            return None;
        }

        let now = time::OffsetDateTime::now_utc();
        let id = self.assign_id(now);
        let incident = Incident {
            id,
            title: title.to_owned(),
            description: description.to_owned(),
            severity: draft.severity,
            reported_at: crate::util::time::to_rfc3339(now),
            acknowledged: false,
            tags: split_tags(&draft.tags_text),
        };
        tracing::debug!(id = id.0, title = %incident.title, "incident admitted");
        self.incidents.insert(0, incident);
        draft.reset();
        Some(id)
    }

    /// Flip the acknowledged flag on the matching incident. Unknown ids
    /// are a no-op; two applications restore the original state.
    pub fn toggle_acknowledge(&mut self, id: IncidentId) {
        if let Some(incident) = self.incidents.iter_mut().find(|i| i.id == id) {
            incident.acknowledged = !incident.acknowledged;
            tracing::debug!(id = id.0, acknowledged = incident.acknowledged, "ack toggled");
        }
    }

    /// Ids come from the creation instant in unix milliseconds, forced
    /// strictly monotonic so same-millisecond submissions stay unique.
    fn assign_id(&mut self, now: time::OffsetDateTime) -> IncidentId {
        let now_ms = (now.unix_timestamp_nanos() / 1_000_000).max(0) as u64;
        let id = now_ms.max(self.next_id);
        self.next_id = id + 1;
        IncidentId(id)
    }

    #[cfg(test)]
    pub(crate) fn from_incidents(incidents: Vec<Incident>) -> Self {
        let next_id = incidents.iter().map(|i| i.id.0 + 1).max().unwrap_or(1);
        Self { incidents, next_id }
    }

    pub fn seed() -> Self {
        let mut s = Self::default();
        let now = time::OffsetDateTime::now_utc();
        let mut push = |title: &str, description: &str, severity, reported_at: &str, tags: &[&str]| {
            let id = s.assign_id(now);
            s.incidents.push(Incident {
                id,
                title: title.into(),
                description: description.into(),
                severity,
                reported_at: reported_at.into(),
                acknowledged: false,
                tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            });
        };

        push(
            "Checkout latency regression",
            "p99 latency on the checkout endpoint doubled after the morning deploy. \
             Rolled back; root cause still open.",
            Severity::High,
            "2025-04-01T08:12:00Z",
            &["checkout", "latency"],
        );
        push(
            "Stale search index",
            "Nightly index rebuild skipped a shard; results were up to a day old \
             until the manual rebuild finished.",
            Severity::Medium,
            "2025-03-20T14:45:00Z",
            &["search"],
        );
        push(
            "Flaky login captcha",
            "A small number of users reported the captcha failing on first try. \
             Not reproducible internally.",
            Severity::Low,
            "2025-03-15T09:30:00Z",
            &["auth", "ux"],
        );
        push(
            "Model inference queue backlog",
            "Batch jobs starved the interactive queue for about twenty minutes. \
             Added a reserved worker pool.",
            Severity::Medium,
            "2025-03-28T17:05:00Z",
            &["LLM", "queue"],
        );
        s
    }
}
