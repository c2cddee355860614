//! anniv-core
//!
//! Date normalisation and calendar arithmetic for anniversaries.
//! Depends on anniv-domain and anniv-config. No terminal I/O, no file output.

pub mod calendar;
pub mod date_index;
pub mod error;
pub mod time;
pub mod window;

pub use calendar::*;
pub use date_index::*;
pub use error::CoreError;
pub use time::*;
pub use window::*;
