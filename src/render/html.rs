//! Monthly HTML calendar pages.

use std::{
    fmt::Write as _,
    fs,
    path::{Path, PathBuf},
};

use anniv_core::{CalendarMonth, DateIndex, NumberedWeek, WeekNumberState};
use anniv_domain::DateKey;
use tracing::{debug, info};

use crate::{errors::AppError, settings::OutputLayout};

pub const MONTH_TOKEN: &str = "{{month}}";
pub const YEAR_TOKEN: &str = "{{year}}";
pub const CALENDAR_TOKEN: &str = "{{calendar}}";

const DEFAULT_TEMPLATE: &str = include_str!("../../templates/calendar.htm");
const HTML_EXTENSIONS: [&str; 2] = [".htm", ".html"];
const WEEKDAY_HEADERS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Appends `.htm` unless `name` already ends in `.htm` or `.html`.
pub fn html_file_name(name: &str) -> String {
    if HTML_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
        name.to_string()
    } else {
        format!("{name}.htm")
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Page template with `{{month}}`, `{{year}}` and `{{calendar}}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Default for Template {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Reads the template at `path`, or falls back to the built-in one when
    /// the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            debug!(path = %path.display(), "template not found, using built-in template");
            return Ok(Self::default());
        }
        fs::read_to_string(path)
            .map(Self::new)
            .map_err(|source| AppError::Template {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Replaces the first occurrence of each placeholder.
    ///
    /// Positions are taken from the template itself, so substituted values are
    /// never scanned for placeholders.
    pub fn fill(&self, month: &str, year: &str, calendar: &str) -> String {
        let mut hits: Vec<(usize, &str, &str)> = [
            (MONTH_TOKEN, month),
            (YEAR_TOKEN, year),
            (CALENDAR_TOKEN, calendar),
        ]
        .into_iter()
        .filter_map(|(token, value)| self.text.find(token).map(|pos| (pos, token, value)))
        .collect();
        hits.sort_by_key(|(pos, _, _)| *pos);

        let mut out = String::with_capacity(self.text.len() + calendar.len());
        let mut cursor = 0;
        for (pos, token, value) in hits {
            out.push_str(&self.text[cursor..pos]);
            out.push_str(value);
            cursor = pos + token.len();
        }
        out.push_str(&self.text[cursor..]);
        out
    }
}

/// A page written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMonth {
    pub year: i32,
    pub month: u32,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct CalendarRenderer {
    template: Template,
}

impl CalendarRenderer {
    pub fn new(template: Template) -> Self {
        Self { template }
    }

    /// Renders one month, advancing `state`. Call in month order per year.
    pub fn render(
        &self,
        index: &DateIndex,
        year: i32,
        month: u32,
        state: &mut WeekNumberState,
    ) -> Result<String, AppError> {
        let calendar = CalendarMonth::build(year, month, state)?;
        let grid = grid_markup(index, &calendar);
        Ok(self
            .template
            .fill(calendar.name(), &year.to_string(), &grid))
    }

    /// Renders all twelve months of each year into `layout`.
    pub fn write_years(
        &self,
        index: &DateIndex,
        years: &[i32],
        layout: &OutputLayout,
    ) -> Result<Vec<RenderedMonth>, AppError> {
        let mut written = Vec::with_capacity(years.len() * 12);
        for &year in years {
            let dir = layout.html_dir(year);
            fs::create_dir_all(&dir).map_err(|source| AppError::Write {
                path: dir.clone(),
                source,
            })?;

            let mut state = WeekNumberState::new();
            for month in 1..=12 {
                let html = self.render(index, year, month, &mut state)?;
                let path = layout.html_file(year, month);
                fs::write(&path, html).map_err(|source| AppError::Write {
                    path: path.clone(),
                    source,
                })?;
                written.push(RenderedMonth { year, month, path });
            }
            info!(year, dir = %dir.display(), "wrote html calendar");
        }
        Ok(written)
    }
}

fn grid_markup(index: &DateIndex, calendar: &CalendarMonth) -> String {
    let mut out = String::new();
    out.push_str("<table class=\"calendar\">\n<thead>\n<tr><th class=\"week\">Wk</th>");
    for name in WEEKDAY_HEADERS {
        let _ = write!(out, "<th>{name}</th>");
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");
    for week in &calendar.weeks {
        week_row(&mut out, index, calendar, week);
    }
    out.push_str("</tbody>\n</table>\n");
    out
}

fn week_row(out: &mut String, index: &DateIndex, calendar: &CalendarMonth, week: &NumberedWeek) {
    out.push_str("<tr>");
    match week.number {
        Some(number) => {
            let _ = write!(out, "<td class=\"week\">{number}</td>");
        }
        None => out.push_str("<td class=\"week\"></td>"),
    }
    for (column, &day) in week.days.iter().enumerate() {
        let class = if column >= 5 { "day weekend" } else { "day" };
        if day == 0 {
            out.push_str("<td class=\"empty\"></td>");
            continue;
        }
        let _ = write!(
            out,
            "<td class=\"{class}\"><span class=\"day-number\">{day}</span>"
        );
        let key = DateKey::from_ymd(calendar.year, calendar.month, day);
        if let Some(labels) = index.get(&key) {
            out.push_str("<div class=\"entries\">");
            let rendered: Vec<_> = labels.iter().map(|label| label_markup(label)).collect();
            out.push_str(&rendered.join("<br>"));
            out.push_str("</div>");
        }
        out.push_str("</td>");
    }
    out.push_str("</tr>\n");
}

fn label_markup(label: &str) -> String {
    let (marker, rest) = label.split_once(' ').unwrap_or((label, ""));
    format!(
        "<span class=\"marker\">{}</span><span class=\"label\"> {}</span>",
        escape(marker),
        escape(rest.trim_start())
    )
}
