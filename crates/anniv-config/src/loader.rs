use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{ConfigError, ConfigModel, IniDocument};

pub const MONTHLY_FILE: &str = "monthly.ini";
pub const YEARLY_FILE: &str = "yearly.ini";

/// Locates and reads the two category files.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    monthly_path: PathBuf,
    yearly_path: PathBuf,
}

impl ConfigLoader {
    pub fn new(monthly_path: PathBuf, yearly_path: PathBuf) -> Self {
        Self {
            monthly_path,
            yearly_path,
        }
    }

    /// Uses `monthly.ini` and `yearly.ini` inside `config_dir`.
    pub fn with_config_dir(config_dir: &Path) -> Self {
        Self::new(config_dir.join(MONTHLY_FILE), config_dir.join(YEARLY_FILE))
    }

    pub fn load(&self) -> Result<ConfigModel, ConfigError> {
        let monthly = read_document(&self.monthly_path)?;
        let yearly = read_document(&self.yearly_path)?;
        let model = ConfigModel::from_documents(&monthly, &yearly);
        debug!(
            entries = model.entry_count(),
            monthly = %self.monthly_path.display(),
            yearly = %self.yearly_path.display(),
            "loaded anniversary config"
        );
        Ok(model)
    }
}

/// Reads and parses one INI file.
pub fn read_document(path: &Path) -> Result<IniDocument, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    IniDocument::parse(&path.display().to_string(), &text)
}
