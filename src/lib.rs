#![doc(test(attr(deny(warnings))))]

//! Anniversaries turns two small INI files of recurring dates into a shell
//! feed, monthly HTML calendars and yearly PDF calendars.

pub mod app;
pub mod cli;
pub mod errors;
pub mod export;
pub mod render;
pub mod settings;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("anniversaries tracing initialized.");
    });
}
