use std::io;

use thiserror::Error;

/// Application-wide error type for the scour CLI.
///
/// Only structural failures end up here; problems with individual entries
/// during a sweep are collected as [`crate::model::FailedEntry`] instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid filter pattern: {0}")]
    Glob(#[from] globset::Error),

    #[error("Home directory error: {0}")]
    Home(String),
}

impl AppError {
    pub fn home<S: Into<String>>(msg: S) -> Self {
        AppError::Home(msg.into())
    }
}
