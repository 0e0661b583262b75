use anyhow::Result;
use colored::Colorize;
use nextshift_router::translate_all;

pub fn execute(paths: &[String]) -> Result<()> {
    let results = translate_all(paths.iter().map(String::as_str));
    let mut failed = 0;

    for (path, result) in paths.iter().zip(results) {
        match result {
            Ok(translated) => println!("{} {} {}", path, "→".dimmed(), translated.green()),
            Err(e) => {
                failed += 1;
                println!("{} {} {}", path, "✗".red(), e);
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} paths could not be translated", failed, paths.len());
    }

    Ok(())
}
