use anniv_domain::Bucket;
use colored::Colorize;

const LABEL_WIDTH: usize = 13;

/// How shell feed lines are decorated. One variant is active per run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineFormatter {
    /// Lines pass through unchanged.
    #[default]
    Plain,
    /// ANSI colour per bucket, reset at the end of the line.
    Ansi,
    /// Fixed-width bucket label in front of the line.
    Labeled,
}

impl LineFormatter {
    /// Forces colour output for `Ansi` so escapes survive a piped stdout.
    pub fn activate(self) {
        if self == LineFormatter::Ansi {
            colored::control::set_override(true);
        }
    }

    pub fn format_line(self, line: &str, bucket: Bucket) -> String {
        match self {
            LineFormatter::Plain => line.to_string(),
            LineFormatter::Ansi => colorize(line, bucket),
            LineFormatter::Labeled => {
                format!("{:<width$}{line}", bucket.label(), width = LABEL_WIDTH)
            }
        }
    }
}

fn colorize(line: &str, bucket: Bucket) -> String {
    match bucket {
        Bucket::LastWeek => line.bright_black().to_string(),
        Bucket::Today => line.bright_red().bold().to_string(),
        Bucket::NextWeek => line.bright_yellow().to_string(),
        Bucket::NextMonth => line.green().to_string(),
    }
}
