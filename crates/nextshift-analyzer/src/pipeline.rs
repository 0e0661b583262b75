//! Analysis pipeline core - owns the single run slot and drives runs

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{mpsc, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::AnalysisConfig;
use crate::error::AnalyzerError;
use crate::events::{AnalysisEvent, FilePreview};
use crate::intake::{FileSet, SourceFile};
use crate::stats::AnalysisStats;

/// Lifecycle of the pipeline's run slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    #[default]
    Idle,
    Running,
    Complete,
}

/// Point-in-time view of the current (or last) run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineSnapshot {
    /// Increments each time a run starts; 0 before the first run
    pub run: u64,
    pub status: RunStatus,
    /// Percentage reached, 100 once complete
    pub progress: u8,
    /// File being analyzed, or the last one analyzed
    pub current_file: String,
    /// Zeroed until the run completes
    pub stats: AnalysisStats,
    pub preview: Option<FilePreview>,
}

/// Analysis pipeline for one project at a time
///
/// Cloning shares the run slot: every clone sees the same run and `start`
/// is refused on all of them while one is in flight.
#[derive(Clone)]
pub struct Pipeline {
    config: Arc<AnalysisConfig>,
    state: Arc<RwLock<PipelineSnapshot>>,
}

impl Pipeline {
    /// Create a new pipeline
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config: Arc::new(config),
            state: Arc::new(RwLock::new(PipelineSnapshot::default())),
        }
    }

    /// Start analyzing a worklist
    ///
    /// Returns `None` without touching any state when the worklist is empty
    /// or a run is already in flight. Otherwise the previous run's output is
    /// discarded and the new run's events are available on the handle.
    pub async fn start(&self, files: FileSet) -> Option<RunHandle> {
        if files.is_empty() {
            debug!("Ignoring analysis request with no files");
            return None;
        }

        let mut state = self.state.write().await;
        if state.status == RunStatus::Running {
            debug!("Analysis run {} in progress; ignoring start", state.run);
            return None;
        }

        let run = state.run + 1;
        *state = PipelineSnapshot {
            run,
            status: RunStatus::Running,
            ..PipelineSnapshot::default()
        };
        drop(state);

        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run_analysis(
            run,
            files,
            self.config.clone(),
            self.state.clone(),
            tx,
        ));

        Some(RunHandle {
            run,
            events: rx,
            task,
        })
    }

    /// Get the current run state
    pub async fn snapshot(&self) -> PipelineSnapshot {
        self.state.read().await.clone()
    }

    pub async fn status(&self) -> RunStatus {
        self.state.read().await.status
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

/// Caller's side of a started run
///
/// Events queue up until read; a handle that is never drained does not hold
/// the run back.
pub struct RunHandle {
    run: u64,
    events: mpsc::UnboundedReceiver<AnalysisEvent>,
    task: JoinHandle<AnalysisStats>,
}

impl RunHandle {
    pub fn run(&self) -> u64 {
        self.run
    }

    /// Next event of the run, `None` once the run has finished
    pub async fn next_event(&mut self) -> Option<AnalysisEvent> {
        self.events.recv().await
    }

    /// Drain the remaining events and wait for the final stats
    pub async fn finish(self) -> Result<AnalysisStats, AnalyzerError> {
        let (_, stats) = self.collect().await?;
        Ok(stats)
    }

    /// Wait for the run, keeping every remaining event
    pub async fn collect(mut self) -> Result<(Vec<AnalysisEvent>, AnalysisStats), AnalyzerError> {
        let mut events = Vec::new();
        while let Some(event) = self.events.recv().await {
            events.push(event);
        }

        let stats = self.task.await?;
        Ok((events, stats))
    }
}

/// Percentage of the worklist already processed, rounded down
fn progress_percent(processed: usize, total: usize) -> u8 {
    (processed * 100 / total) as u8
}

/// Send an event, ignoring a caller that stopped listening
fn emit(events: &mpsc::UnboundedSender<AnalysisEvent>, event: AnalysisEvent) {
    let _ = events.send(event);
}

/// Body of a run: one file at a time, yielding between files
async fn run_analysis(
    run: u64,
    files: FileSet,
    config: Arc<AnalysisConfig>,
    state: Arc<RwLock<PipelineSnapshot>>,
    events: mpsc::UnboundedSender<AnalysisEvent>,
) -> AnalysisStats {
    let total = files.len();
    let mut preview_attempted = false;

    info!("Analysis run {} started with {} files", run, total);

    for (processed, file) in files.iter().enumerate() {
        let percent = progress_percent(processed, total);

        {
            let mut state = state.write().await;
            state.current_file = file.name.clone();
            state.progress = percent;
        }

        emit(
            &events,
            AnalysisEvent::Progress {
                current_file: file.name.clone(),
                percent,
            },
        );

        if !preview_attempted && config.is_component_like(file.file_name(), &file.extension) {
            preview_attempted = true;

            if let Some(preview) = capture_preview(file).await {
                state.write().await.preview = Some(preview.clone());
                emit(&events, AnalysisEvent::PreviewCaptured(preview));
            }
        }

        debug!("Analyzed {} ({}%)", file.name, percent);

        if processed + 1 < total {
            tokio::time::sleep(config.file_delay()).await;
        }
    }

    tokio::time::sleep(config.finalize_delay()).await;

    let stats = AnalysisStats::estimate(total);

    {
        let mut state = state.write().await;
        state.stats = stats;
        state.progress = 100;
        state.status = RunStatus::Complete;
    }

    info!(
        "Analysis run {} complete: {} files, complexity {} ({})",
        run,
        stats.total_files,
        stats.complexity_score,
        stats.tier()
    );

    emit(&events, AnalysisEvent::Complete(stats));
    stats
}

/// Read a preview candidate; unreadable content is logged and skipped
async fn capture_preview(file: &SourceFile) -> Option<FilePreview> {
    match file.read_text().await {
        Ok(content) => Some(FilePreview {
            name: file.name.clone(),
            content,
        }),
        Err(e) => {
            warn!("No preview for {}: {}", file.name, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0, 4), 0);
        assert_eq!(progress_percent(1, 4), 25);
        assert_eq!(progress_percent(3, 4), 75);
        assert_eq!(progress_percent(2, 3), 66);
        assert_eq!(progress_percent(999, 1000), 99);
    }

    #[tokio::test]
    async fn test_empty_worklist_is_noop() {
        let pipeline = Pipeline::new(AnalysisConfig::without_delays());

        assert!(pipeline.start(FileSet::default()).await.is_none());

        let snapshot = pipeline.snapshot().await;
        assert_eq!(snapshot.status, RunStatus::Idle);
        assert_eq!(snapshot.run, 0);
        assert_eq!(snapshot.stats, AnalysisStats::default());
    }

    #[tokio::test]
    async fn test_snapshot_after_completion() {
        let pipeline = Pipeline::new(AnalysisConfig::without_delays());
        let files = FileSet::new(vec![
            SourceFile::in_memory("lib/utils.ts", "export {}"),
            SourceFile::in_memory("pages/about.tsx", "export default function About() {}"),
        ]);

        let stats = pipeline.start(files).await.unwrap().finish().await.unwrap();

        let snapshot = pipeline.snapshot().await;
        assert_eq!(snapshot.status, RunStatus::Complete);
        assert_eq!(snapshot.progress, 100);
        assert_eq!(snapshot.current_file, "pages/about.tsx");
        assert_eq!(snapshot.stats, stats);
        assert_eq!(
            snapshot.preview.map(|p| p.name),
            Some("pages/about.tsx".to_string())
        );
    }
}
