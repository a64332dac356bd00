#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IncidentId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

    /// Short fixed-width label for list rows.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MED",
            Severity::High => "HIGH",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Incident {
    pub id: IncidentId,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    /// RFC 3339 UTC timestamp, fixed at creation.
    pub reported_at: String,
    pub acknowledged: bool,
    pub tags: Vec<String>,
}

impl Incident {
    /// Parsed creation instant; unparseable strings sort as the epoch.
    pub fn reported_instant(&self) -> time::OffsetDateTime {
        crate::util::time::parse_rfc3339(&self.reported_at)
            .unwrap_or(time::OffsetDateTime::UNIX_EPOCH)
    }
}
