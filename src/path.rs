use std::path::{Path, PathBuf};

use dirs_next as dirs;

use crate::error::AppError;

/// Expand a leading `~` and turn `path` into an absolute path.
///
/// Purely lexical: the path does not have to exist yet. Failing to resolve
/// the home directory (or to absolutize) is a hard error for the caller.
pub fn absolutize(path: &Path) -> Result<PathBuf, AppError> {
    let expanded = expand_home(path)?;
    Ok(std::path::absolute(expanded)?)
}

fn expand_home(path: &Path) -> Result<PathBuf, AppError> {
    let Ok(rest) = path.strip_prefix("~") else {
        return Ok(path.to_path_buf());
    };
    let home = dirs::home_dir()
        .ok_or_else(|| AppError::home("Unable to determine the home directory"))?;
    Ok(home.join(rest))
}

/// Replace the home directory prefix with `~` to make output easier to read.
pub fn display_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(stripped) = path.strip_prefix(&home)
    {
        let mut display = PathBuf::from("~");
        display.push(stripped);
        return display.display().to_string();
    }

    path.display().to_string()
}
