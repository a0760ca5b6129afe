/// Wildcard used as "match everything".
pub const MATCH_ALL: &str = "%";

/// Name filter applied to the process table.
///
/// `%` admits every name. A query wrapped in `%...%` is a case-insensitive
/// substring match on the inner text, and any other query is a
/// case-insensitive substring match on the whole text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterQuery {
    raw: String,
    needle: Option<String>,
}

impl FilterQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let needle = Self::needle_for(&raw);
        Self { raw, needle }
    }

    fn needle_for(raw: &str) -> Option<String> {
        if raw.is_empty() || raw == MATCH_ALL {
            return None;
        }
        let lowered = raw.to_lowercase();
        let inner = if lowered.len() > 1 && lowered.starts_with('%') && lowered.ends_with('%') {
            &lowered[1..lowered.len() - 1]
        } else {
            lowered.as_str()
        };
        if inner.is_empty() {
            None
        } else {
            Some(inner.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn matches(&self, name: &str) -> bool {
        match &self.needle {
            None => true,
            Some(needle) => name.to_lowercase().contains(needle.as_str()),
        }
    }
}

impl Default for FilterQuery {
    fn default() -> Self {
        Self::new(MATCH_ALL)
    }
}
