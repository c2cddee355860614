use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{origin}:{line}: {message}")]
    Syntax {
        origin: String,
        line: usize,
        message: String,
    },

    #[error("{origin}:{line}: duplicate section `{section}`")]
    DuplicateSection {
        origin: String,
        line: usize,
        section: String,
    },

    #[error("{origin}:{line}: duplicate key `{key}` in section `{section}`")]
    DuplicateKey {
        origin: String,
        line: usize,
        section: String,
        key: String,
    },

    #[error("invalid value `{value}` for `{key}`: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}
