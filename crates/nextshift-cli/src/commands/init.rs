use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use nextshift_analyzer::Config;

pub fn execute(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let content = Config::default().to_toml_string()?;
    fs::write(path, content).with_context(|| format!("Failed to write {:?}", path))?;

    println!("  {} {}", "✓".green(), path.display());

    Ok(())
}
