//! # nextshift analyzer
//!
//! Incremental analysis of a Next.js project ahead of a move to Vite and
//! React Router.
//!
//! - [`FileSet`] is the worklist, built from caller-supplied files or a
//!   directory walk
//! - [`Pipeline`] walks the worklist one file at a time, reporting
//!   [`AnalysisEvent`]s and publishing [`AnalysisStats`] at the end
//! - [`RouteExtractor`] finds the project's routes and hands them to
//!   `nextshift-router` for parsing
//!
//! ## Example
//!
//! ```no_run
//! use nextshift_analyzer::{AnalysisConfig, FileSet, Pipeline, SourceFile};
//!
//! # async fn run() -> Result<(), nextshift_analyzer::AnalyzerError> {
//! let pipeline = Pipeline::new(AnalysisConfig::default());
//! let files = FileSet::new(vec![SourceFile::in_memory("pages/index.tsx", "export default {}")]);
//!
//! if let Some(mut run) = pipeline.start(files).await {
//!     while let Some(event) = run.next_event().await {
//!         println!("{:?}", event);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod complexity;
pub mod config;
mod error;
pub mod events;
pub mod extractor;
pub mod intake;
pub mod pipeline;
pub mod source;
pub mod stats;

pub use complexity::{aggregate_score, ComplexityTier};
pub use config::{AnalysisConfig, Config, IntakeConfig, RoutesConfig, CONFIG_FILE};
pub use error::AnalyzerError;
pub use events::{AnalysisEvent, FilePreview};
pub use extractor::{RouteExtraction, RouteExtractor};
pub use intake::{FileSet, FileTypeSummary, SourceFile};
pub use pipeline::{Pipeline, PipelineSnapshot, RunHandle, RunStatus};
pub use source::{ContentSource, FileContent, MemoryContent};
pub use stats::AnalysisStats;
