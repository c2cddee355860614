//! Minimal order-preserving INI reader.
//!
//! Keys keep their original casing. Supported syntax: `[section]` headers,
//! `key = value` or `key: value` pairs, `#`/`;` full-line comments and
//! indented continuation lines.

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniSection {
    pub name: String,
    entries: Vec<(String, String)>,
}

impl IniSection {
    fn new(name: String) -> Self {
        Self {
            name,
            entries: Vec::new(),
        }
    }

    /// Case-sensitive lookup.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    sections: Vec<IniSection>,
}

impl IniDocument {
    /// Parses `text`; `origin` names the source in error messages.
    pub fn parse(origin: &str, text: &str) -> Result<Self, ConfigError> {
        let mut doc = IniDocument::default();
        let mut open_key = false;

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let raw = if idx == 0 {
                raw.trim_start_matches('\u{feff}')
            } else {
                raw
            };
            let trimmed = raw.trim();

            if trimmed.is_empty() {
                open_key = false;
                continue;
            }
            if trimmed.starts_with('#') || trimmed.starts_with(';') {
                continue;
            }

            let indented = raw.starts_with(|c: char| c.is_whitespace());
            if indented && open_key {
                if let Some((_, value)) = doc
                    .sections
                    .last_mut()
                    .and_then(|section| section.entries.last_mut())
                {
                    value.push('\n');
                    value.push_str(trimmed);
                }
                continue;
            }

            if let Some(header) = trimmed.strip_prefix('[') {
                let name = header
                    .strip_suffix(']')
                    .ok_or_else(|| syntax(origin, line_no, "unterminated section header"))?
                    .trim();
                if name.is_empty() {
                    return Err(syntax(origin, line_no, "empty section name"));
                }
                if doc.section(name).is_some() {
                    return Err(ConfigError::DuplicateSection {
                        origin: origin.to_string(),
                        line: line_no,
                        section: name.to_string(),
                    });
                }
                doc.sections.push(IniSection::new(name.to_string()));
                open_key = false;
                continue;
            }

            let section = doc.sections.last_mut().ok_or_else(|| {
                syntax(origin, line_no, "key/value pair before any section header")
            })?;
            let split_at = trimmed
                .find(['=', ':'])
                .ok_or_else(|| syntax(origin, line_no, "expected `key = value`"))?;
            let key = trimmed[..split_at].trim();
            let value = trimmed[split_at + 1..].trim();
            if key.is_empty() {
                return Err(syntax(origin, line_no, "empty key"));
            }
            if section.get(key).is_some() {
                return Err(ConfigError::DuplicateKey {
                    origin: origin.to_string(),
                    line: line_no,
                    section: section.name.clone(),
                    key: key.to_string(),
                });
            }
            section.entries.push((key.to_string(), value.to_string()));
            open_key = true;
        }

        Ok(doc)
    }

    pub fn sections(&self) -> &[IniSection] {
        &self.sections
    }

    pub fn section(&self, name: &str) -> Option<&IniSection> {
        self.sections.iter().find(|section| section.name == name)
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?.get(key)
    }
}

fn syntax(origin: &str, line: usize, message: &str) -> ConfigError {
    ConfigError::Syntax {
        origin: origin.to_string(),
        line,
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sections_in_order_with_case_preserved() {
        let text = "\
# people
[Birthdays]
symbol = *
Alice = 1990-04-12
bob: 1985-01-30

[Chores]
Trash = 04-12
";
        let doc = IniDocument::parse("yearly.ini", text).expect("parse");
        let names: Vec<_> = doc.sections().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Birthdays", "Chores"]);

        let birthdays = doc.section("Birthdays").expect("section");
        let keys: Vec<_> = birthdays.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["symbol", "Alice", "bob"]);
        assert_eq!(birthdays.get("Alice"), Some("1990-04-12"));
        assert_eq!(birthdays.get("alice"), None);
        assert_eq!(doc.get("Chores", "Trash"), Some("04-12"));
    }

    #[test]
    fn joins_continuation_lines() {
        let text = "[notes]\nlong = first\n    second\nnext = x\n";
        let doc = IniDocument::parse("notes.ini", text).expect("parse");
        assert_eq!(doc.get("notes", "long"), Some("first\nsecond"));
        assert_eq!(doc.get("notes", "next"), Some("x"));
    }

    #[test]
    fn rejects_key_outside_section() {
        let err = IniDocument::parse("m.ini", "Trash = 04-12\n").unwrap_err();
        match err {
            ConfigError::Syntax { origin, line, .. } => {
                assert_eq!(origin, "m.ini");
                assert_eq!(line, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(IniDocument::parse("m.ini", "[open\n").is_err());
        assert!(IniDocument::parse("m.ini", "[]\n").is_err());
        assert!(IniDocument::parse("m.ini", "[a]\njust words\n").is_err());
        assert!(IniDocument::parse("m.ini", "[a]\n= 04-12\n").is_err());
    }

    #[test]
    fn rejects_duplicates() {
        let dup_section = IniDocument::parse("m.ini", "[a]\n[a]\n").unwrap_err();
        assert!(matches!(
            dup_section,
            ConfigError::DuplicateSection { line: 2, .. }
        ));

        let dup_key = IniDocument::parse("m.ini", "[a]\nx = 1\nx = 2\n").unwrap_err();
        assert!(matches!(dup_key, ConfigError::DuplicateKey { line: 3, .. }));
    }

    #[test]
    fn keys_differing_in_case_are_distinct() {
        let doc = IniDocument::parse("m.ini", "[a]\nAlice = 01-01\nalice = 02-02\n")
            .expect("parse");
        assert_eq!(doc.get("a", "Alice"), Some("01-01"));
        assert_eq!(doc.get("a", "alice"), Some("02-02"));
    }
}
