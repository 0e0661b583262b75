use std::path::Path;

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use nextshift_analyzer::{Config, FileSet, RouteExtractor};
use nextshift_router::{RouteDescriptor, RouteTier, Warning};
use serde::Serialize;

use crate::OutputFormat;

#[derive(Serialize)]
struct RouteReport<'a> {
    #[serde(flatten)]
    route: &'a RouteDescriptor,
    translated: String,
    tier: RouteTier,
    warnings: Vec<Warning>,
}

#[derive(Serialize)]
struct RoutesReport<'a> {
    routes: Vec<RouteReport<'a>>,
    rejected: Vec<String>,
}

pub fn execute(dir: &Path, config: &Config, format: OutputFormat) -> Result<()> {
    let files = FileSet::from_dir(dir, &config.intake)
        .with_context(|| format!("Failed to read project directory: {:?}", dir))?;

    let extraction = RouteExtractor::new(config.routes.clone()).extract_from_files(&files);

    let mut routes = Vec::with_capacity(extraction.routes.len());
    for route in &extraction.routes {
        routes.push(RouteReport {
            route,
            translated: route
                .translated()
                .with_context(|| format!("Failed to translate {}", route.source_path))?,
            tier: route.tier(),
            warnings: route.warnings(),
        });
    }

    let rejected: Vec<String> = extraction.rejected.iter().map(|e| e.to_string()).collect();

    match format {
        OutputFormat::Json => {
            let report = RoutesReport { routes, rejected };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => print_routes(&routes, &rejected),
    }

    Ok(())
}

fn tier_badge(tier: RouteTier) -> ColoredString {
    match tier {
        RouteTier::Simple => tier.label().green(),
        RouteTier::Medium => tier.label().yellow(),
        RouteTier::Complex => tier.label().red(),
    }
}

fn print_routes(routes: &[RouteReport<'_>], rejected: &[String]) {
    if routes.is_empty() {
        println!("{}", "⚠ No routes found".yellow());
    } else {
        println!("{}", format!("Routes ({})", routes.len()).green().bold());
        println!();
    }

    for report in routes {
        let route = report.route;

        let mut header = format!("  {}", route.source_path.bold());
        if route.is_dynamic {
            header.push_str(&format!(" {}", "Dynamic".blue()));
        }
        header.push_str(&format!(" {}", tier_badge(report.tier)));
        println!("{}", header);

        println!("    {} {}", "file:".dimmed(), route.component_file);
        if !route.params.is_empty() {
            println!("    {} {}", "params:".dimmed(), route.params.join(", "));
        }

        let translated = if RouteTier::needs_attention(route.complexity) {
            report.translated.yellow()
        } else {
            report.translated.green()
        };
        println!("    {} {}", "→".dimmed(), translated);

        for warning in &report.warnings {
            println!("    {} {}", "⚠".yellow(), warning);
        }
    }

    if !rejected.is_empty() {
        println!();
        println!("{}", format!("Skipped ({})", rejected.len()).red().bold());
        for reason in rejected {
            println!("  {} {}", "✗".red(), reason);
        }
    }
}
