//! Purge command implementation

use std::fs;

use colored::Colorize;

use graft_parse::scan;

use crate::error::Result;

/// Run the purge command: rewrite the file with everything between marker
/// pairs removed, keeping the marker lines themselves. A document carrying
/// the skip sentinel is left untouched.
pub fn run_purge(file: &str) -> Result<()> {
    let source = fs::read_to_string(file)?;
    let document = scan(file, &source)?;

    if document.skip_update {
        println!(
            "{} {} carries the skip sentinel, leaving the file untouched.",
            "SKIP".yellow().bold(),
            file.cyan()
        );
        return Ok(());
    }

    fs::write(file, document.purged_text())?;

    println!("{} Purged {}.", "OK".green().bold(), file.cyan());
    Ok(())
}
