//! Whole-project migration complexity

use serde::Serialize;
use std::fmt;

/// Score assigned when nothing in the project adds weight
pub const BASE_SCORE: u8 = 30;

/// Span above the base score the weighted counts can climb
const SCORE_SPAN: u128 = 70;

/// Weighted count at which half of the span is reached
const HALF_SATURATION: u128 = 50;

/// Deterministic aggregate score in `[30, 99]`
///
/// API routes weigh three times a component, data-fetching modules twice.
/// The weighted sum saturates towards the top of the range, so large projects
/// approach but never exceed 100.
pub fn aggregate_score(
    component_count: usize,
    api_route_count: usize,
    data_fetching_count: usize,
) -> u8 {
    let weight =
        component_count as u128 + 2 * data_fetching_count as u128 + 3 * api_route_count as u128;
    let scaled = SCORE_SPAN * weight / (weight + HALF_SATURATION);

    (BASE_SCORE as u128 + scaled).min(100) as u8
}

/// Label bucket for an aggregate score
///
/// `< 30` → Easy, `30..=59` → Moderate, `≥ 60` → Complex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ComplexityTier {
    Easy,
    Moderate,
    Complex,
}

impl ComplexityTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=29 => ComplexityTier::Easy,
            30..=59 => ComplexityTier::Moderate,
            _ => ComplexityTier::Complex,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ComplexityTier::Easy => "Easy",
            ComplexityTier::Moderate => "Moderate",
            ComplexityTier::Complex => "Complex",
        }
    }
}

impl fmt::Display for ComplexityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
