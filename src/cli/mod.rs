pub mod help;
pub mod system_clock;

use std::{fmt, str::FromStr};

use crate::{errors::AppError, render::LineFormatter};

pub use system_clock::{clock_from_env, SystemClock};

/// Output mode selected by the single positional argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Base,
    Bash,
    Powershell,
    Html,
    Pdf,
}

pub struct ModeEntry {
    pub mode: Mode,
    pub name: &'static str,
    pub description: &'static str,
}

pub const MODES: [ModeEntry; 5] = [
    ModeEntry {
        mode: Mode::Base,
        name: "base",
        description: "load and index the configuration without printing anything",
    },
    ModeEntry {
        mode: Mode::Bash,
        name: "bash",
        description: "print the coloured anniversary feed for a terminal",
    },
    ModeEntry {
        mode: Mode::Powershell,
        name: "powershell",
        description: "print the anniversary feed with plain bucket labels",
    },
    ModeEntry {
        mode: Mode::Html,
        name: "html",
        description: "write monthly HTML calendars for this year and next",
    },
    ModeEntry {
        mode: Mode::Pdf,
        name: "pdf",
        description: "write the HTML calendars, then monthly and yearly PDFs",
    },
];

impl Mode {
    pub fn name(self) -> &'static str {
        MODES
            .iter()
            .find(|entry| entry.mode == self)
            .map(|entry| entry.name)
            .unwrap_or_default()
    }

    /// Line decoration for the shell feed modes.
    pub fn formatter(self) -> Option<LineFormatter> {
        match self {
            Mode::Bash => Some(LineFormatter::Ansi),
            Mode::Powershell => Some(LineFormatter::Labeled),
            Mode::Base | Mode::Html | Mode::Pdf => None,
        }
    }

    /// Parses the first argument; a missing or unknown mode is a usage error.
    pub fn from_args<I>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = String>,
    {
        let given = args.into_iter().next();
        let parsed = given.as_deref().map(str::parse::<Mode>);
        match parsed {
            Some(Ok(mode)) => Ok(mode),
            _ => Err(AppError::Usage { given }),
        }
    }
}

impl FromStr for Mode {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        MODES
            .iter()
            .find(|entry| entry.name == value)
            .map(|entry| entry.mode)
            .ok_or(())
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
