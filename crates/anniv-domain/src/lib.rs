//! anniv-domain
//!
//! Pure domain models (categories, entries, date keys, window buckets).
//! No I/O, no CLI, no rendering. Only data types and core enums.

pub mod category;
pub mod common;
pub mod date_key;

pub use category::*;
pub use common::*;
pub use date_key::*;
