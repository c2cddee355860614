use std::{io, path::PathBuf};

use anniv_config::ConfigError;
use anniv_core::CoreError;
use thiserror::Error;

/// Fatal failures surfaced by the CLI.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}", usage_reason(.given))]
    Usage { given: Option<String> },
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Calendar error: {0}")]
    Calendar(#[from] CoreError),
    #[error("cannot write `{}`: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("cannot read template `{}`: {source}", path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("PDF backend `{program}` is not available; install it or set `converter` in settings.ini")]
    MissingBackend { program: String },
}

fn usage_reason(given: &Option<String>) -> String {
    match given {
        Some(mode) => format!("unknown mode `{mode}`"),
        None => "missing mode".to_string(),
    }
}
