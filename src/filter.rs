use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::AppError;

/// Basenames that are trash and may be removed wholesale.
const REMOVE_PATTERNS: &[&str] = &[
    ".DS_Store",
    ".cache",
    ".gradle",
    ".mypy_cache",
    ".sass-cache",
    ".textpadtmp",
    "Thumbs.db",
    "__pycache__",
    "_build",
    "build",
    "slprj",
    "zig-cache",
    "zig-out",
    "*.slxc",
    "*.bak",
    "~*",
];

/// Basenames that must never be entered or deleted, even when they also
/// match a remove pattern.
const IGNORE_PATTERNS: &[&str] = &[
    ".git",
    ".var",
    "Steam",
    ".steam",
    "containers",
    ".dropbox-dist",
];

/// Decides what happens to a directory entry, by basename alone.
///
/// Compiled once per traversal. Callers are expected to check
/// [`TrashFilter::should_ignore`] before [`TrashFilter::is_trash`]: ignore
/// rules win.
pub struct TrashFilter {
    remove: GlobSet,
    ignore: GlobSet,
}

impl TrashFilter {
    pub fn new() -> Result<Self, AppError> {
        Ok(Self { remove: compile(REMOVE_PATTERNS)?, ignore: compile(IGNORE_PATTERNS)? })
    }

    /// True when `name` matches a remove pattern.
    pub fn is_trash(&self, name: &str) -> bool {
        self.remove.is_match(name)
    }

    /// True when `name` must be skipped entirely.
    pub fn should_ignore(&self, name: &str) -> bool {
        self.ignore.is_match(name)
    }
}

fn compile(patterns: &[&str]) -> Result<GlobSet, AppError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}
