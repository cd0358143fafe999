use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crossbeam_channel::bounded;

use crate::error::AppError;
use crate::filter::TrashFilter;
use crate::model::{FailedEntry, ProgressReport, TraverseOutcome};
use crate::path::absolutize;
use crate::utils::path_size;
use crate::walker::{self, WalkEvent};

/// How many walk events may queue up before producers block on the consumer.
const EVENT_BUFFER: usize = 1024;

/// Sweeps `path` for trash entries, deleting them as they are found.
///
/// `path` may start with `~` and may name a single file instead of a
/// directory. With `dry_run` set nothing is deleted; candidates are sized
/// and recorded as if they had been. `on_progress` is called after every
/// state change, always from this thread: once per discovered candidate
/// (with `bytes` unchanged) and once more when the candidate has been
/// sized and removed.
///
/// Failures on individual entries never abort the sweep; they come back in
/// [`TraverseOutcome::failed`]. Only structural problems return an error
/// (an unresolvable home directory, a root that cannot be stat'ed), and
/// then no partial results are reported.
pub fn traverse<F>(
    path: &Path,
    dry_run: bool,
    mut on_progress: F,
) -> Result<TraverseOutcome, AppError>
where
    F: FnMut(ProgressReport),
{
    let root = absolutize(path)?;
    let filter = TrashFilter::new()?;
    let mut outcome = TraverseOutcome::default();

    let meta = fs::symlink_metadata(&root)?;
    if !meta.is_dir() {
        remove_single_file(root, &meta, &filter, dry_run, &mut outcome, &mut on_progress);
        return Ok(outcome);
    }

    let (events, drain) = bounded(EVENT_BUFFER);
    rayon::spawn(move || walker::walk(root, filter, events));

    // Single consumer for both candidates and failures. The loop ends when
    // the walker drops its sender, which it does only after every sub-walk
    // has finished.
    let mut progress = Progress::default();
    for event in drain {
        match event {
            WalkEvent::Failed(failure) => outcome.failed.push(failure),
            WalkEvent::Candidate(candidate) => {
                progress.discovered();
                on_progress(progress.report());

                let size = path_size(&candidate);
                if dry_run {
                    progress.completed(size);
                    outcome.removed.push(candidate);
                    on_progress(progress.report());
                } else {
                    match remove_entry(&candidate) {
                        Ok(()) => {
                            progress.completed(size);
                            outcome.removed.push(candidate);
                            on_progress(progress.report());
                        }
                        Err(err) => outcome.failed.push(FailedEntry::new(candidate, err)),
                    }
                }
            }
        }
    }

    Ok(outcome)
}

/// The degenerate case: the root itself is not a directory. No walker is
/// launched; the root is matched and, when trash, removed directly.
fn remove_single_file<F>(
    root: PathBuf,
    meta: &fs::Metadata,
    filter: &TrashFilter,
    dry_run: bool,
    outcome: &mut TraverseOutcome,
    on_progress: &mut F,
) where
    F: FnMut(ProgressReport),
{
    let name = match root.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => return,
    };

    if !meta.is_file() || !filter.is_trash(&name) {
        return;
    }

    let size = meta.len();
    if !dry_run
        && let Err(err) = fs::remove_file(&root)
    {
        outcome.failed.push(FailedEntry::new(root, err));
        return;
    }

    outcome.removed.push(root);
    on_progress(ProgressReport { count: 1, total: 1, bytes: size });
}

fn remove_entry(path: &Path) -> io::Result<()> {
    let meta = fs::symlink_metadata(path)?;
    if meta.is_dir() { fs::remove_dir_all(path) } else { fs::remove_file(path) }
}

/// Progress state owned by the consuming loop; reports are emitted only
/// from there, so a candidate's discovery and completion reports can never
/// interleave with each other.
#[derive(Default)]
struct Progress {
    count: u64,
    total: u64,
    bytes: u64,
}

impl Progress {
    fn discovered(&mut self) {
        self.total += 1;
    }

    fn completed(&mut self, size: u64) {
        self.count += 1;
        self.bytes += size;
    }

    fn report(&self) -> ProgressReport {
        ProgressReport { count: self.count, total: self.total, bytes: self.bytes }
    }
}
