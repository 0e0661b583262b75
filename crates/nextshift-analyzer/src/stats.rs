//! Summary statistics for one analysis run

use serde::{Deserialize, Serialize};

use crate::complexity::{aggregate_score, ComplexityTier};

/// Totals published when a run completes
///
/// The per-kind counts are fixed-ratio estimates of the file total, not the
/// result of parsing the files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisStats {
    pub total_files: usize,
    pub component_count: usize,
    pub api_route_count: usize,
    pub data_fetching_count: usize,
    /// Migration effort in `[0, 100]`
    pub complexity_score: u8,
}

impl AnalysisStats {
    /// Folds a final file tally into stats
    ///
    /// 40% components, 10% API routes, 20% data fetching, each rounded down.
    pub fn estimate(total_files: usize) -> Self {
        let component_count = total_files * 4 / 10;
        let api_route_count = total_files / 10;
        let data_fetching_count = total_files * 2 / 10;

        Self {
            total_files,
            component_count,
            api_route_count,
            data_fetching_count,
            complexity_score: aggregate_score(
                component_count,
                api_route_count,
                data_fetching_count,
            ),
        }
    }

    pub fn tier(&self) -> ComplexityTier {
        ComplexityTier::from_score(self.complexity_score)
    }
}
