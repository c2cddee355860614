//! Wires settings, config, the date index and the output surfaces together.

use std::io::Write;

use anniv_core::{Clock, DateIndex, DateIndexBuilder};
use tracing::{info, warn};

use crate::{
    cli::Mode,
    errors::AppError,
    export::PdfExporter,
    render::{CalendarRenderer, RenderedMonth, ShellRenderer, Template},
    settings::Settings,
};

pub struct App {
    settings: Settings,
    clock: Box<dyn Clock>,
}

impl App {
    pub fn new(settings: Settings, clock: Box<dyn Clock>) -> Self {
        Self { settings, clock }
    }

    /// The reference year and the one after it.
    pub fn years(&self) -> [i32; 2] {
        let year = self.clock.reference_year();
        [year, year + 1]
    }

    pub fn build_index(&self) -> Result<DateIndex, AppError> {
        let config = self.settings.config_loader().load()?;
        if config.is_empty() {
            warn!(
                dir = %self.settings.config_dir.display(),
                "configuration contains no entries"
            );
        }
        Ok(DateIndexBuilder::new(self.clock.reference_year())
            .name_case(self.settings.name_case)
            .build(&config))
    }

    pub fn run(&self, mode: Mode, out: &mut dyn Write) -> Result<(), AppError> {
        match mode {
            Mode::Base => {
                let index = self.build_index()?;
                info!(dates = index.len(), "indexed anniversaries");
            }
            Mode::Bash | Mode::Powershell => {
                let index = self.build_index()?;
                let renderer = ShellRenderer::new(mode.formatter().unwrap_or_default());
                for line in renderer.render(&index, self.clock.today()) {
                    writeln!(out, "{line}")?;
                }
                out.flush()?;
            }
            Mode::Html => {
                let index = self.build_index()?;
                self.write_html(&index)?;
            }
            Mode::Pdf => {
                let exporter = PdfExporter::detect(&self.settings.pdf)?;
                let index = self.build_index()?;
                let months = self.write_html(&index)?;
                for year in exporter.export(&months, &self.settings.layout()) {
                    if !year.failed_months.is_empty() {
                        warn!(
                            year = year.year,
                            failed = ?year.failed_months,
                            "some months were not converted"
                        );
                    }
                }
            }
        }
        Ok(())
    }

    fn write_html(&self, index: &DateIndex) -> Result<Vec<RenderedMonth>, AppError> {
        let template = Template::load_or_default(&self.settings.template_path)?;
        CalendarRenderer::new(template).write_years(index, &self.years(), &self.settings.layout())
    }
}
