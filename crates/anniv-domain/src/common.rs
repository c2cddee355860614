//! Shared enums for interval kinds, window buckets and label casing.

use std::{fmt, str::FromStr};

/// Which configuration source a category came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntervalKind {
    Monthly,
    Yearly,
}

impl fmt::Display for IntervalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IntervalKind::Monthly => "monthly",
            IntervalKind::Yearly => "yearly",
        };
        f.write_str(label)
    }
}

/// Rolling-window classification of a date relative to today.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bucket {
    LastWeek,
    Today,
    NextWeek,
    NextMonth,
}

impl Bucket {
    pub const ALL: [Bucket; 4] = [
        Bucket::LastWeek,
        Bucket::Today,
        Bucket::NextWeek,
        Bucket::NextMonth,
    ];

    /// Human readable label, e.g. `"next week"`.
    pub fn label(self) -> &'static str {
        match self {
            Bucket::LastWeek => "last week",
            Bucket::Today => "today",
            Bucket::NextWeek => "next week",
            Bucket::NextMonth => "next month",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Presentation transform applied to entry names in rendered labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NameCase {
    #[default]
    Upper,
    Preserve,
}

impl NameCase {
    pub fn apply(self, name: &str) -> String {
        match self {
            NameCase::Upper => name.to_uppercase(),
            NameCase::Preserve => name.to_string(),
        }
    }
}

impl FromStr for NameCase {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "upper" => Ok(NameCase::Upper),
            "preserve" => Ok(NameCase::Preserve),
            other => Err(format!("unknown name case `{other}`")),
        }
    }
}
