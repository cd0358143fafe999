use std::fmt;
use std::io;
use std::path::PathBuf;

/// Snapshot of a traversal's progress.
///
/// `count` is the number of candidates fully handled, `total` the number
/// discovered so far and `bytes` the cumulative bytes freed. `total` keeps
/// growing while the walk is still finding candidates, so it can overtake a
/// `count` that had already caught up with an earlier value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressReport {
    pub count: u64,
    pub total: u64,
    pub bytes: u64,
}

/// A path that could not be listed or deleted.
///
/// Collected and returned at the end of a sweep instead of aborting it.
#[derive(Debug)]
pub struct FailedEntry {
    pub path: PathBuf,
    pub error: io::Error,
}

impl FailedEntry {
    pub fn new(path: PathBuf, error: io::Error) -> Self {
        Self { path, error }
    }
}

impl fmt::Display for FailedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.error)
    }
}

/// Everything a finished traversal has to say: what was removed (or would
/// have been, on a dry run) and what failed along the way.
#[derive(Debug, Default)]
pub struct TraverseOutcome {
    pub removed: Vec<PathBuf>,
    pub failed: Vec<FailedEntry>,
}

impl TraverseOutcome {
    pub fn is_clean(&self) -> bool {
        self.removed.is_empty() && self.failed.is_empty()
    }
}
