use std::io::{self, Write};

use crate::cli::MODES;

pub fn usage_text(program: &str) -> String {
    let width = MODES.iter().map(|entry| entry.name.len()).max().unwrap_or(0);
    let mut text = format!("Usage: {program} <mode>\n\nModes:\n");
    for entry in &MODES {
        text.push_str(&format!(
            "  {:<width$}  {}\n",
            entry.name,
            entry.description,
            width = width
        ));
    }
    text
}

pub fn print_usage(program: &str) {
    let _ = io::stderr().write_all(usage_text(program).as_bytes());
}
