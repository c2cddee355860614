//! Output surfaces built from a [`anniv_core::DateIndex`].

pub mod formatter;
pub mod html;
pub mod shell;

pub use formatter::LineFormatter;
pub use html::{CalendarRenderer, RenderedMonth, Template};
pub use shell::{ShellLine, ShellRenderer};
