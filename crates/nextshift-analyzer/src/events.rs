//! Events emitted by a running analysis

use serde::Serialize;

use crate::stats::AnalysisStats;

/// Text of the first component-like file seen in a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilePreview {
    pub name: String,
    pub content: String,
}

/// One step of an analysis run, delivered in order
///
/// A run with N files produces N `Progress` events, at most one
/// `PreviewCaptured`, and ends with exactly one `Complete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AnalysisEvent {
    /// Sent before a file is analyzed; `percent` counts files already done
    ///
    /// The last progress event stays below 100. Completion is signalled by
    /// `Complete` alone, after which the pipeline snapshot reports 100.
    Progress { current_file: String, percent: u8 },
    PreviewCaptured(FilePreview),
    Complete(AnalysisStats),
}

impl AnalysisEvent {
    pub fn is_complete(&self) -> bool {
        matches!(self, AnalysisEvent::Complete(_))
    }
}
