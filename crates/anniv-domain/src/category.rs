//! Domain types representing reminder categories and their entries.

use crate::common::IntervalKind;

/// Marker used when a category does not declare a `symbol`.
pub const DEFAULT_MARKER: &str = "?";

/// Key reserved for the category marker inside a config section.
pub const MARKER_KEY: &str = "symbol";

/// A single configured reminder, e.g. `Alice = 1990-04-12`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    pub name: String,
    pub recurrence_suffix: String,
    pub marker: String,
}

impl CategoryEntry {
    pub fn new(
        name: impl Into<String>,
        recurrence_suffix: impl Into<String>,
        marker: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            recurrence_suffix: recurrence_suffix.into(),
            marker: marker.into(),
        }
    }

    /// Returns the trailing `MM-DD` part of the suffix.
    ///
    /// Suffixes shorter than five characters are returned whole; the value is
    /// not validated as a calendar date.
    pub fn month_day(&self) -> &str {
        let suffix = self.recurrence_suffix.as_str();
        let count = suffix.chars().count();
        if count <= 5 {
            return suffix;
        }
        let start = suffix
            .char_indices()
            .nth(count - 5)
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        &suffix[start..]
    }

    /// Returns the leading four characters when they look like a year
    /// (`[12][0-9]{3}`).
    pub fn birth_year(&self) -> Option<i32> {
        let bytes = self.recurrence_suffix.as_bytes();
        if bytes.len() < 4 {
            return None;
        }
        let head = &bytes[..4];
        let plausible =
            matches!(head[0], b'1' | b'2') && head[1..].iter().all(|b| b.is_ascii_digit());
        if !plausible {
            return None;
        }
        std::str::from_utf8(head).ok()?.parse().ok()
    }
}

/// Named group of entries sharing one marker symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub kind: IntervalKind,
    pub marker: Option<String>,
    pub entries: Vec<CategoryEntry>,
}

impl Category {
    pub fn new(name: impl Into<String>, kind: IntervalKind) -> Self {
        Self {
            name: name.into(),
            kind,
            marker: None,
            entries: Vec::new(),
        }
    }

    /// Returns the declared marker or [`DEFAULT_MARKER`].
    pub fn marker(&self) -> &str {
        self.marker.as_deref().unwrap_or(DEFAULT_MARKER)
    }

    /// Appends an entry carrying this category's marker.
    pub fn push_entry(&mut self, name: impl Into<String>, suffix: impl Into<String>) {
        let marker = self.marker().to_string();
        self.entries.push(CategoryEntry::new(name, suffix, marker));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_day_takes_last_five_characters() {
        let yearly = CategoryEntry::new("Alice", "1990-04-12", "*");
        let monthly = CategoryEntry::new("Trash", "04-12", "?");
        let padded = CategoryEntry::new("Rent", "every-01-05", "$");

        assert_eq!(yearly.month_day(), "04-12");
        assert_eq!(monthly.month_day(), "04-12");
        assert_eq!(padded.month_day(), "01-05");
    }

    #[test]
    fn month_day_keeps_short_suffix_whole() {
        let entry = CategoryEntry::new("Odd", "4-1", "?");
        assert_eq!(entry.month_day(), "4-1");
    }

    #[test]
    fn birth_year_requires_plausible_prefix() {
        assert_eq!(
            CategoryEntry::new("a", "1990-04-12", "?").birth_year(),
            Some(1990)
        );
        assert_eq!(
            CategoryEntry::new("b", "2001-01-01", "?").birth_year(),
            Some(2001)
        );
        assert_eq!(CategoryEntry::new("c", "0990-04-12", "?").birth_year(), None);
        assert_eq!(CategoryEntry::new("d", "3000-04-12", "?").birth_year(), None);
        assert_eq!(CategoryEntry::new("e", "04-12", "?").birth_year(), None);
        assert_eq!(CategoryEntry::new("f", "19x0-04-12", "?").birth_year(), None);
    }

    #[test]
    fn category_falls_back_to_default_marker() {
        let mut category = Category::new("Chores", IntervalKind::Monthly);
        category.push_entry("Trash", "04-12");

        assert_eq!(category.marker(), DEFAULT_MARKER);
        assert_eq!(category.entries[0].marker, "?");
    }
}
