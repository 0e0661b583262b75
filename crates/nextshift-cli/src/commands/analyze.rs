use std::path::Path;

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use nextshift_analyzer::{
    AnalysisEvent, AnalysisStats, ComplexityTier, Config, FilePreview, FileSet, FileTypeSummary,
    Pipeline,
};
use serde::Serialize;

use crate::OutputFormat;

/// Lines of the preview shown in the text report
const PREVIEW_LINES: usize = 20;

#[derive(Serialize)]
struct AnalyzeReport<'a> {
    files: &'a FileTypeSummary,
    stats: AnalysisStats,
    tier: ComplexityTier,
    preview: Option<&'a FilePreview>,
}

pub fn execute(dir: &Path, config: &Config, format: OutputFormat) -> Result<()> {
    let files = FileSet::from_dir(dir, &config.intake)
        .with_context(|| format!("Failed to read project directory: {:?}", dir))?;

    if files.is_empty() {
        println!("{}", "⚠ No files to analyze".yellow());
        return Ok(());
    }

    let summary = files.type_summary();
    let show_progress = matches!(format, OutputFormat::Text);

    if show_progress {
        println!("{}", "Analyzing project...".green().bold());
        println!();
        print!("{}", summary);
        println!();
    }

    let pipeline = Pipeline::new(config.analysis.clone());

    let (stats, preview) = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(&pipeline, files, show_progress))?;

    match format {
        OutputFormat::Json => {
            let report = AnalyzeReport {
                files: &summary,
                stats,
                tier: stats.tier(),
                preview: preview.as_ref(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!();
            print_stats(&stats);
            if let Some(preview) = &preview {
                println!();
                print_preview(preview);
            }
        }
    }

    Ok(())
}

async fn run(
    pipeline: &Pipeline,
    files: FileSet,
    show_progress: bool,
) -> Result<(AnalysisStats, Option<FilePreview>)> {
    let mut handle = pipeline
        .start(files)
        .await
        .context("Another analysis is already running")?;

    let mut preview = None;

    while let Some(event) = handle.next_event().await {
        match event {
            AnalysisEvent::Progress {
                current_file,
                percent,
            } => {
                if show_progress {
                    println!("  {} {}", format!("[{:>3}%]", percent).dimmed(), current_file);
                }
            }
            AnalysisEvent::PreviewCaptured(captured) => preview = Some(captured),
            AnalysisEvent::Complete(_) => {
                if show_progress {
                    println!("  {} {}", "[100%]".dimmed(), "Done".green());
                }
            }
        }
    }

    let stats = handle.finish().await?;
    Ok((stats, preview))
}

fn tier_badge(tier: ComplexityTier) -> ColoredString {
    let label = format!(" {} ", tier);
    match tier {
        ComplexityTier::Easy => label.black().on_green(),
        ComplexityTier::Moderate => label.black().on_yellow(),
        ComplexityTier::Complex => label.white().on_red(),
    }
}

fn print_stats(stats: &AnalysisStats) {
    println!("{}", "Analysis Results".bold());

    let rows = [
        ("Total Files", stats.total_files),
        ("Next.js Components", stats.component_count),
        ("API Routes", stats.api_route_count),
        ("Data Fetching", stats.data_fetching_count),
    ];

    for (label, value) in rows {
        println!("  {:<20} {}", label, value.to_string().cyan());
    }

    println!(
        "  {:<20} {}/100 {}",
        "Migration Complexity",
        stats.complexity_score.to_string().bold(),
        tier_badge(stats.tier())
    );
}

fn print_preview(preview: &FilePreview) {
    println!("{} {}", "Preview:".bold(), preview.name.cyan());

    let lines: Vec<&str> = preview.content.lines().collect();
    for line in lines.iter().take(PREVIEW_LINES) {
        println!("  {} {}", "│".dimmed(), line);
    }

    if lines.len() > PREVIEW_LINES {
        println!(
            "  {}",
            format!("… {} more lines", lines.len() - PREVIEW_LINES).dimmed()
        );
    }
}
