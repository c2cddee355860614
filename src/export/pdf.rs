use std::{
    ffi::{OsStr, OsString},
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use tracing::{info, warn};

use crate::{
    errors::AppError,
    export::ExportError,
    render::RenderedMonth,
    settings::{OutputLayout, PdfSettings},
};

/// Page options handed to the HTML to PDF converter.
const CONVERTER_OPTIONS: [&str; 15] = [
    "--quiet",
    "--page-size",
    "A4",
    "--orientation",
    "Landscape",
    "--margin-top",
    "0.7in",
    "--margin-bottom",
    "0.7in",
    "--margin-left",
    "0.75in",
    "--margin-right",
    "0.75in",
    "--encoding",
    "UTF-8",
];

/// Outcome of exporting one year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearExport {
    pub year: i32,
    /// Monthly PDFs that were produced, in month order.
    pub pages: Vec<PathBuf>,
    pub failed_months: Vec<u32>,
    /// The concatenated yearly PDF, when concatenation succeeded.
    pub combined: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct PdfExporter {
    converter: PathBuf,
    concatenator: String,
}

impl PdfExporter {
    pub fn new(converter: impl Into<PathBuf>, concatenator: impl Into<String>) -> Self {
        Self {
            converter: converter.into(),
            concatenator: concatenator.into(),
        }
    }

    /// Resolves the converter on `PATH`; a missing converter is fatal.
    pub fn detect(settings: &PdfSettings) -> Result<Self, AppError> {
        let converter =
            which::which(&settings.converter).map_err(|_| AppError::MissingBackend {
                program: settings.converter.clone(),
            })?;
        info!(converter = %converter.display(), "found pdf backend");
        Ok(Self::new(converter, settings.concatenator.clone()))
    }

    pub fn converter_args(html: &Path, pdf: &Path) -> Vec<OsString> {
        CONVERTER_OPTIONS
            .iter()
            .map(OsString::from)
            .chain([html.as_os_str().to_owned(), pdf.as_os_str().to_owned()])
            .collect()
    }

    pub fn convert(&self, html: &Path, pdf: &Path) -> Result<(), ExportError> {
        run_tool(
            self.converter.as_os_str(),
            &Self::converter_args(html, pdf),
        )
    }

    /// Joins `parts` in order into `output`.
    pub fn concatenate(&self, parts: &[PathBuf], output: &Path) -> Result<(), ExportError> {
        let args: Vec<OsString> = parts
            .iter()
            .map(|part| part.as_os_str().to_owned())
            .chain([output.as_os_str().to_owned()])
            .collect();
        run_tool(OsStr::new(&self.concatenator), &args)
    }

    /// Converts every rendered month and concatenates each year.
    ///
    /// Tool failures are logged and skipped; the remaining months and years
    /// are still processed.
    pub fn export(&self, months: &[RenderedMonth], layout: &OutputLayout) -> Vec<YearExport> {
        let mut years: Vec<YearExport> = Vec::new();
        for rendered in months {
            if years.last().map(|y| y.year) != Some(rendered.year) {
                years.push(YearExport {
                    year: rendered.year,
                    ..YearExport::default()
                });
            }
            let Some(current) = years.last_mut() else {
                continue;
            };

            let pdf = layout.pdf_file(rendered.year, rendered.month);
            let result = ensure_parent(&pdf).and_then(|_| self.convert(&rendered.path, &pdf));
            match result {
                Ok(()) => current.pages.push(pdf),
                Err(err) => {
                    warn!(year = rendered.year, month = rendered.month, "{err}");
                    current.failed_months.push(rendered.month);
                }
            }
        }

        for year in &mut years {
            if year.pages.is_empty() {
                warn!(year = year.year, "no monthly pages produced, skipping yearly pdf");
                continue;
            }
            let combined = layout.year_pdf(year.year);
            match self.concatenate(&year.pages, &combined) {
                Ok(()) => {
                    info!(year = year.year, path = %combined.display(), "wrote yearly pdf");
                    year.combined = Some(combined);
                }
                Err(err) => warn!(year = year.year, "{err}"),
            }
        }
        years
    }
}

fn ensure_parent(path: &Path) -> Result<(), ExportError> {
    match path.parent() {
        Some(parent) => fs::create_dir_all(parent).map_err(|source| ExportError::OutputDir {
            path: parent.to_path_buf(),
            source,
        }),
        None => Ok(()),
    }
}

fn run_tool(program: &OsStr, args: &[OsString]) -> Result<(), ExportError> {
    let tool = program.to_string_lossy().into_owned();
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| ExportError::Spawn {
            tool: tool.clone(),
            source,
        })?;
    if output.status.success() {
        Ok(())
    } else {
        Err(ExportError::ToolFailed {
            tool,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}
