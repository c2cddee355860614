use anniv_core::{DateIndex, RollingWindow};
use anniv_domain::Bucket;
use chrono::NaiveDate;

use crate::render::LineFormatter;

/// One line of the shell feed; blank separators carry no bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellLine {
    pub bucket: Option<Bucket>,
    pub text: String,
}

impl ShellLine {
    fn blank() -> Self {
        Self {
            bucket: None,
            text: String::new(),
        }
    }
}

/// Renders the rolling window around today as text lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRenderer {
    formatter: LineFormatter,
}

impl ShellRenderer {
    pub fn new(formatter: LineFormatter) -> Self {
        Self { formatter }
    }

    /// Unformatted feed: a leading blank line, one line per label grouped by
    /// bucket with a blank line between groups, and a trailing blank line.
    pub fn lines(index: &DateIndex, today: NaiveDate) -> Vec<ShellLine> {
        let window = RollingWindow::new(today);
        let mut lines = vec![ShellLine::blank()];
        let mut previous: Option<Bucket> = None;

        for entry in window.select(index) {
            for label in entry.labels {
                if previous.is_some_and(|bucket| bucket != entry.bucket) {
                    lines.push(ShellLine::blank());
                }
                previous = Some(entry.bucket);
                lines.push(ShellLine {
                    bucket: Some(entry.bucket),
                    text: format!("{}  {}", entry.key, label),
                });
            }
        }

        lines.push(ShellLine::blank());
        lines
    }

    pub fn render(&self, index: &DateIndex, today: NaiveDate) -> Vec<String> {
        self.formatter.activate();
        Self::lines(index, today)
            .into_iter()
            .map(|line| match line.bucket {
                Some(bucket) => self.formatter.format_line(&line.text, bucket),
                None => line.text,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use anniv_config::ConfigModel;
    use anniv_core::DateIndexBuilder;

    use super::*;

    fn index() -> DateIndex {
        let config = ConfigModel::parse(
            "monthly.ini",
            "[Chores]\nTrash = 04-12\nRent = 05-01\nOld = 03-01\n",
            "yearly.ini",
            "[Birthdays]\nsymbol = *\nAlice = 1990-04-12\nCarol = 1971-04-05\nDave = 1980-04-01\n",
        )
        .expect("parse config");
        DateIndexBuilder::new(2024).build(&config)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 5).unwrap()
    }

    #[test]
    fn groups_are_separated_by_blank_lines() {
        let lines = ShellRenderer::new(LineFormatter::Plain).render(&index(), today());
        assert_eq!(
            lines,
            vec![
                "",
                "2024-04-01  *  DAVE (44)",
                "",
                "2024-04-05  *  CAROL (53)",
                "",
                "2024-04-12  ?  TRASH",
                "2024-04-12  *  ALICE (34)",
                "",
                "2024-05-01  ?  RENT",
                "",
            ]
        );
    }

    #[test]
    fn labeled_formatter_skips_blank_lines() {
        let lines = ShellRenderer::new(LineFormatter::Labeled).render(&index(), today());
        assert_eq!(lines.first().map(String::as_str), Some(""));
        assert_eq!(lines.last().map(String::as_str), Some(""));
        assert!(lines.contains(&"next week    2024-04-12  ?  TRASH".to_string()));
        assert!(lines.contains(&"last week    2024-04-01  *  DAVE (44)".to_string()));
    }

    #[test]
    fn ansi_feed_colours_entry_lines_only() {
        let lines = ShellRenderer::new(LineFormatter::Ansi).render(&index(), today());

        assert_eq!(lines.first().map(String::as_str), Some(""));
        assert_eq!(lines.last().map(String::as_str), Some(""));
        for line in lines.iter().filter(|line| !line.is_empty()) {
            assert!(line.starts_with("\x1b["), "{line:?}");
            assert!(line.ends_with("\x1b[0m"), "{line:?}");
        }
    }

    #[test]
    fn empty_window_is_just_the_brackets() {
        let lines = ShellRenderer::default().render(&DateIndex::default(), today());
        assert_eq!(lines, vec!["", ""]);
    }

    #[test]
    fn every_feed_line_has_a_bucket() {
        let lines = ShellRenderer::lines(&index(), today());
        for line in &lines {
            assert_eq!(line.bucket.is_none(), line.text.is_empty());
        }
    }
}
