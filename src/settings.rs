//! Runtime settings: where config, templates and output live, plus presentation
//! and PDF backend options.

use std::{
    env,
    path::{Path, PathBuf},
};

use anniv_config::{loader::read_document, ConfigError, ConfigLoader, IniDocument};
use anniv_domain::NameCase;
use tracing::{debug, warn};

/// Overrides the home directory (defaults to the current directory).
pub const HOME_ENV: &str = "ANNIVERSARIES_HOME";
/// Pins "today" to a `YYYY-MM-DD` date.
pub const TODAY_ENV: &str = "ANNIVERSARIES_TODAY";

const CONFIG_DIR: &str = "config";
const SETTINGS_FILE: &str = "settings.ini";
const DEFAULT_OUTPUT_DIR: &str = "output";
const DEFAULT_TEMPLATE: &str = "templates/calendar.htm";
const DEFAULT_CONVERTER: &str = "wkhtmltopdf";
const DEFAULT_CONCATENATOR: &str = "pdfunite";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfSettings {
    pub converter: String,
    pub concatenator: String,
}

impl Default for PdfSettings {
    fn default() -> Self {
        Self {
            converter: DEFAULT_CONVERTER.into(),
            concatenator: DEFAULT_CONCATENATOR.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub home: PathBuf,
    pub config_dir: PathBuf,
    pub output_dir: PathBuf,
    pub template_path: PathBuf,
    pub name_case: NameCase,
    pub pdf: PdfSettings,
}

impl Settings {
    /// Defaults rooted at `home`, without reading `settings.ini`.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        Self {
            config_dir: home.join(CONFIG_DIR),
            output_dir: home.join(DEFAULT_OUTPUT_DIR),
            template_path: home.join(DEFAULT_TEMPLATE),
            name_case: NameCase::default(),
            pdf: PdfSettings::default(),
            home,
        }
    }

    /// Defaults rooted at `home`, overlaid with `config/settings.ini` when present.
    pub fn load(home: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let mut settings = Self::with_home(home);
        let path = settings.config_dir.join(SETTINGS_FILE);
        if path.exists() {
            let doc = read_document(&path)?;
            settings.apply(&doc)?;
            debug!(path = %path.display(), "applied settings file");
        }
        Ok(settings)
    }

    /// Resolves the home directory from [`HOME_ENV`], falling back to the
    /// current directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        let home = match env::var_os(HOME_ENV) {
            Some(home) if !home.is_empty() => PathBuf::from(home),
            _ => env::current_dir().map_err(|source| ConfigError::Io {
                path: PathBuf::from("."),
                source,
            })?,
        };
        Self::load(home)
    }

    pub fn config_loader(&self) -> ConfigLoader {
        ConfigLoader::with_config_dir(&self.config_dir)
    }

    pub fn layout(&self) -> OutputLayout {
        OutputLayout::new(self.output_dir.clone())
    }

    fn apply(&mut self, doc: &IniDocument) -> Result<(), ConfigError> {
        for section in doc.sections() {
            for (key, value) in section.entries() {
                match (section.name.as_str(), key) {
                    ("general", "name_case") => {
                        self.name_case = value.parse().map_err(|reason| ConfigError::InvalidValue {
                            key: "general.name_case".into(),
                            value: value.into(),
                            reason,
                        })?;
                    }
                    ("paths", "output") => self.output_dir = self.resolve(value),
                    ("paths", "template") => self.template_path = self.resolve(value),
                    ("pdf", "converter") => self.pdf.converter = value.into(),
                    ("pdf", "concatenator") => self.pdf.concatenator = value.into(),
                    (section, key) => warn!("ignoring unknown setting `{section}.{key}`"),
                }
            }
        }
        Ok(())
    }

    fn resolve(&self, value: &str) -> PathBuf {
        let path = Path::new(value);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.home.join(path)
        }
    }
}

/// Output tree: `html/<year>/<year>-<MM>.htm`, `pdf/<year>/<year>-<MM>.pdf`
/// and `pdf/<year>/<year>.pdf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn html_dir(&self, year: i32) -> PathBuf {
        self.root.join("html").join(year.to_string())
    }

    pub fn pdf_dir(&self, year: i32) -> PathBuf {
        self.root.join("pdf").join(year.to_string())
    }

    pub fn html_file(&self, year: i32, month: u32) -> PathBuf {
        self.html_dir(year)
            .join(crate::render::html::html_file_name(&month_stem(year, month)))
    }

    pub fn pdf_file(&self, year: i32, month: u32) -> PathBuf {
        self.pdf_dir(year).join(format!("{}.pdf", month_stem(year, month)))
    }

    pub fn year_pdf(&self, year: i32) -> PathBuf {
        self.pdf_dir(year).join(format!("{year}.pdf"))
    }
}

fn month_stem(year: i32, month: u32) -> String {
    format!("{year}-{month:02}")
}
