//! PDF export through external tools.

pub mod pdf;

use std::{io, process::ExitStatus};

use thiserror::Error;

pub use pdf::{PdfExporter, YearExport};

/// Failures of an external tool. These are reported as warnings and never
/// stop the export of remaining months or years.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to start `{tool}`: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },
    #[error("`{tool}` exited with {status}{}", stderr_suffix(.stderr))]
    ToolFailed {
        tool: String,
        status: ExitStatus,
        stderr: String,
    },
    #[error("cannot create `{}`: {source}", path.display())]
    OutputDir {
        path: std::path::PathBuf,
        #[source]
        source: io::Error,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}
