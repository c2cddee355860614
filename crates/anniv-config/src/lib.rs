//! anniv-config
//!
//! Reads the monthly and yearly category files into a [`ConfigModel`].
//! Owns the INI dialect those files are written in.

pub mod error;
pub mod ini;
pub mod loader;
pub mod model;

pub use error::ConfigError;
pub use ini::{IniDocument, IniSection};
pub use loader::ConfigLoader;
pub use model::ConfigModel;
