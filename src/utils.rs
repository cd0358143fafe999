use std::path::Path;

use walkdir::WalkDir;

/// Total size of the regular files at or below `path`.
///
/// Directories, symlinks and special files contribute zero. Entries that
/// cannot be read are skipped, so the result can undercount but a size
/// query never fails a sweep.
pub fn path_size(path: &Path) -> u64 {
    let mut total = 0u64;
    for entry in WalkDir::new(path).into_iter().filter_map(Result::ok) {
        if entry.file_type().is_file()
            && let Ok(metadata) = entry.metadata()
        {
            total = total.saturating_add(metadata.len());
        }
    }
    total
}
