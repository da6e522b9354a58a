use crate::enums::StatusTone;
use serde::{Deserialize, Serialize};

/// Expected operational impact of a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
}

impl ImpactLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ImpactLevel::Low => "Low",
            ImpactLevel::Medium => "Medium",
            ImpactLevel::High => "High",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            ImpactLevel::Low => StatusTone::Positive,
            ImpactLevel::Medium => StatusTone::Caution,
            ImpactLevel::High => StatusTone::Critical,
        }
    }
}

/// One model prediction shown on the analytics board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub category: String,
    pub prediction: String,
    /// Model confidence, 0..=100.
    pub confidence: u32,
    pub impact: ImpactLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impact_mapping_is_total() {
        for impact in [ImpactLevel::Low, ImpactLevel::Medium, ImpactLevel::High] {
            assert!(!impact.label().is_empty());
            let _ = impact.tone();
        }
    }
}
