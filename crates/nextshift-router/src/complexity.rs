//! Per-route migration risk tiers

use serde::Serialize;
use std::fmt;

/// Ranking bucket for a single route's complexity weight
///
/// `score < 3` → Simple, `3 ≤ score < 5` → Medium, `score ≥ 5` → Complex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum RouteTier {
    Simple,
    Medium,
    Complex,
}

impl RouteTier {
    /// Weight above which a translated route deserves a second look
    pub const ATTENTION_THRESHOLD: u32 = 4;

    pub fn from_score(score: u32) -> Self {
        match score {
            0..=2 => RouteTier::Simple,
            3..=4 => RouteTier::Medium,
            _ => RouteTier::Complex,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RouteTier::Simple => "Simple",
            RouteTier::Medium => "Medium",
            RouteTier::Complex => "Complex",
        }
    }

    /// Whether a route of this weight should be highlighted in reports
    pub fn needs_attention(score: u32) -> bool {
        score > Self::ATTENTION_THRESHOLD
    }
}

impl fmt::Display for RouteTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
