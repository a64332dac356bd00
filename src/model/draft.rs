use crate::model::Severity;

/// Scratch state for the report form. No invariants hold here; validation
/// happens when the store admits the draft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    /// Comma-separated tag text, split at submission time.
    pub tags_text: String,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            severity: Severity::Low,
            tags_text: String::new(),
        }
    }
}

impl Draft {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Split raw tag text on commas, trimming each piece and dropping empties.
/// Order is preserved.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::split_tags;

    #[test]
    fn split_tags_trims_and_drops_empties() {
        assert_eq!(split_tags("a, b ,, c"), vec!["a", "b", "c"]);
        assert_eq!(split_tags("  "), Vec::<String>::new());
        assert_eq!(split_tags(""), Vec::<String>::new());
    }

    #[test]
    fn split_tags_preserves_order() {
        assert_eq!(split_tags("zeta, alpha, mid"), vec!["zeta", "alpha", "mid"]);
    }
}
