use std::fs;
use std::path::PathBuf;

use crossbeam_channel::Sender;

use crate::filter::TrashFilter;
use crate::model::FailedEntry;

/// One unit of walker output: a removal candidate, or an entry that could
/// not be read.
#[derive(Debug)]
pub enum WalkEvent {
    Candidate(PathBuf),
    Failed(FailedEntry),
}

/// Walks the tree under `root`, fanning out one task per subdirectory onto
/// the rayon pool and streaming events back through `events`.
///
/// Blocks until every transitively spawned sub-walk has returned; dropping
/// the sender on return is what disconnects the channel, so the stream
/// closes exactly once no matter how the walk went. Run this off the thread
/// that drains the channel, or a full buffer will deadlock the walk.
pub fn walk(root: PathBuf, filter: TrashFilter, events: Sender<WalkEvent>) {
    rayon::scope(|scope| walk_dir(root, &filter, &events, scope));
}

/// Handles a single directory level. Subdirectories that must be descended
/// into are spawned as sibling tasks on the same scope, so they proceed
/// independently and a failure under one never stalls another.
fn walk_dir<'s>(
    dir: PathBuf,
    filter: &'s TrashFilter,
    events: &'s Sender<WalkEvent>,
    scope: &rayon::Scope<'s>,
) {
    let entries = loop {
        match fs::read_dir(&dir) {
            Ok(entries) => break entries,
            // Out of file descriptors: try again until some close.
            Err(err) if err.raw_os_error() == Some(libc::EMFILE) => continue,
            Err(err) => {
                let _ = events.send(WalkEvent::Failed(FailedEntry::new(dir, err)));
                return;
            }
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let _ = events.send(WalkEvent::Failed(FailedEntry::new(dir.clone(), err)));
                continue;
            }
        };

        let name = entry.file_name();
        let name = name.to_string_lossy();

        if filter.should_ignore(&name) {
            continue;
        }

        if filter.is_trash(&name) {
            // A trash directory is removed wholesale, never entered.
            let _ = events.send(WalkEvent::Candidate(entry.path()));
            continue;
        }

        match entry.file_type() {
            Ok(kind) if kind.is_dir() => {
                let subdir = entry.path();
                scope.spawn(move |scope| walk_dir(subdir, filter, events, scope));
            }
            Ok(_) => {}
            Err(err) => {
                let _ = events.send(WalkEvent::Failed(FailedEntry::new(entry.path(), err)));
            }
        }
    }
}
