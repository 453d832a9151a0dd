//! Update command implementation

use std::fs;

use colored::Colorize;

use graft_content::{FsSource, resolve, to_text};
use graft_parse::scan;

use crate::error::Result;

/// Run the update command: rewrite the file with every directive's imported
/// payload spliced in. A document carrying the skip sentinel is left
/// untouched.
pub fn run_update(file: &str) -> Result<()> {
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

    let processed = resolve(&document, &FsSource::for_document(file))?;
    fs::write(file, to_text(&processed))?;

    println!("{} Updated {}.", "OK".green().bold(), file.cyan());
    Ok(())
}
