use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::AppError;
use crate::format::format_bytes;
use crate::model::{FailedEntry, ProgressReport};
use crate::path::display_path;
use crate::traverse::traverse;

pub struct CleanOptions {
    pub paths: Vec<PathBuf>,
    pub dry_run: bool,
    pub no_errors: bool,
}

/// Sweep every requested path, keeping one progress bar running across the
/// whole invocation, then print the summary.
pub fn execute_clean(options: CleanOptions) -> Result<(), AppError> {
    let bar = ProgressBar::new(0);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("Removed {msg} [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut removed = Vec::new();
    let mut failed: Vec<FailedEntry> = Vec::new();
    let mut done = ProgressReport::default();

    for path in &options.paths {
        // Reports restart from zero for each traversal; offset them by what
        // the previous paths already accounted for.
        let base = done;
        let mut last = ProgressReport::default();
        let outcome = traverse(path, options.dry_run, |report| {
            last = report;
            bar.set_length(base.total + report.total);
            bar.set_position(base.count + report.count);
            bar.set_message(format_bytes(base.bytes + report.bytes));
        })?;

        done.count += last.count;
        done.total += last.total;
        done.bytes += last.bytes;
        removed.extend(outcome.removed);
        failed.extend(outcome.failed);
    }

    bar.finish_and_clear();

    if options.dry_run {
        for path in &removed {
            println!("Would remove {}", display_path(path));
        }
        println!(
            "Would remove {} item(s) for a total of {}",
            removed.len(),
            format_bytes(done.bytes)
        );
    } else {
        println!("Removed {} item(s), freeing {}", removed.len(), format_bytes(done.bytes));
        if !options.no_errors {
            for failure in &failed {
                eprintln!("{failure}");
            }
        }
    }

    Ok(())
}
