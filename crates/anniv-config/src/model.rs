use anniv_domain::{Category, CategoryEntry, IntervalKind, MARKER_KEY};

use crate::{ConfigError, IniDocument};

/// Both category sets, read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigModel {
    monthly: Vec<Category>,
    yearly: Vec<Category>,
}

impl ConfigModel {
    /// Parses the two sources; `*_origin` names them in error messages.
    pub fn parse(
        monthly_origin: &str,
        monthly_text: &str,
        yearly_origin: &str,
        yearly_text: &str,
    ) -> Result<Self, ConfigError> {
        let monthly = IniDocument::parse(monthly_origin, monthly_text)?;
        let yearly = IniDocument::parse(yearly_origin, yearly_text)?;
        Ok(Self::from_documents(&monthly, &yearly))
    }

    pub fn from_documents(monthly: &IniDocument, yearly: &IniDocument) -> Self {
        Self {
            monthly: categories_from(monthly, IntervalKind::Monthly),
            yearly: categories_from(yearly, IntervalKind::Yearly),
        }
    }

    pub fn categories(&self, kind: IntervalKind) -> &[Category] {
        match kind {
            IntervalKind::Monthly => &self.monthly,
            IntervalKind::Yearly => &self.yearly,
        }
    }

    /// Every entry, monthly categories first, each in file order.
    pub fn entries(&self) -> impl Iterator<Item = &CategoryEntry> {
        self.monthly
            .iter()
            .chain(self.yearly.iter())
            .flat_map(|category| category.entries.iter())
    }

    pub fn entry_count(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }
}

fn categories_from(doc: &IniDocument, kind: IntervalKind) -> Vec<Category> {
    doc.sections()
        .iter()
        .map(|section| {
            let mut category = Category::new(section.name.clone(), kind);
            category.marker = section.get(MARKER_KEY).map(str::to_string);
            for (name, suffix) in section.entries() {
                if name == MARKER_KEY {
                    continue;
                }
                category.push_entry(name, suffix);
            }
            category
        })
        .collect()
}
