use serde::{Deserialize, Serialize};

/// Display tone shared by every domain status.
///
/// Each domain status enum maps into a tone through a total function, so the
/// view layer never branches on raw status strings and there is no silent
/// "unexpected status" arm anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusTone {
    /// Everything nominal (green).
    Positive,
    /// In progress / informational (blue).
    Info,
    /// Needs attention soon (amber).
    Caution,
    /// Needs attention now (red).
    Critical,
    /// No assessment (grey).
    Neutral,
}

impl StatusTone {
    /// CSS modifier suffix used by badges, markers and progress bars.
    pub fn code(&self) -> &'static str {
        match self {
            StatusTone::Positive => "positive",
            StatusTone::Info => "info",
            StatusTone::Caution => "caution",
            StatusTone::Critical => "critical",
            StatusTone::Neutral => "neutral",
        }
    }

    pub fn all() -> [StatusTone; 5] {
        [
            StatusTone::Positive,
            StatusTone::Info,
            StatusTone::Caution,
            StatusTone::Critical,
            StatusTone::Neutral,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        let codes: Vec<_> = StatusTone::all().iter().map(|t| t.code()).collect();
        let mut unique = codes.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(codes.len(), unique.len());
    }
}
