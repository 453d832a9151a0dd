//! Preview command implementation

use std::fs;

use colored::Colorize;

use graft_content::{FsSource, diff_text, resolve, to_text};
use graft_parse::scan;

use crate::error::Result;

/// Run the preview command.
///
/// With no view flag, prints all three views with line numbers plus a hint
/// on how to apply them. `--purge` / `--update` restrict the output to one
/// view, `--lines` adds line numbers to it, and `--diff` prints a unified
/// diff of what `update` would change instead.
pub fn run_preview(
    file: &str,
    purge_only: bool,
    update_only: bool,
    lines: bool,
    diff: bool,
) -> Result<()> {
    let source = fs::read_to_string(file)?;
    let document = scan(file, &source)?;
    let processed = resolve(&document, &FsSource::for_document(file))?;

    if diff {
        print!("{}", diff_text(&document.original_text(), &to_text(&processed)));
        return Ok(());
    }

    if !purge_only && !update_only {
        print_numbered("original", &document.original);
        print_numbered("purged", &document.purged);
        print_numbered("updated", &processed);

        println!();
        println!("You can replace the file content with either of the commands below:");
        println!();
        println!(
            "  {} {}   Replace the file content with all imports resolved.",
            "graft update".cyan(),
            file
        );
        println!(
            "  {} {}    Replace the file content with imported content removed.",
            "graft purge".cyan(),
            file
        );
        return Ok(());
    }

    if purge_only {
        print_view(&document.purged, lines);
    }
    if update_only {
        print_view(&processed, lines);
    }

    Ok(())
}

fn print_view(view: &[String], numbered: bool) {
    if numbered {
        for (index, line) in view.iter().enumerate() {
            println!("{:4}: {line}", index + 1);
        }
    } else {
        for line in view {
            println!("{line}");
        }
    }
}

fn print_numbered(title: &str, view: &[String]) {
    println!("{}", format!("---- {title} ----").blue().bold());
    for (index, line) in view.iter().enumerate() {
        println!("{:4}: {line}", index + 1);
    }
    println!();
}
