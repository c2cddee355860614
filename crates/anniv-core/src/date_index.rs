use std::collections::BTreeMap;

use anniv_config::ConfigModel;
use anniv_domain::{CategoryEntry, DateKey, NameCase};
use tracing::debug;

/// Rendered labels keyed by date, for a reference year and the year after.
///
/// Keys iterate in sorted order; labels sharing a key keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateIndex {
    entries: BTreeMap<DateKey, Vec<String>>,
}

impl DateIndex {
    pub fn get(&self, key: &DateKey) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DateKey, &[String])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Keys between `from` and `to`, both inclusive.
    pub fn range<'a>(
        &'a self,
        from: &DateKey,
        to: &DateKey,
    ) -> impl Iterator<Item = (&'a DateKey, &'a [String])> {
        let bounds = (from <= to).then(|| from.clone()..=to.clone());
        bounds
            .into_iter()
            .flat_map(move |bounds| self.entries.range(bounds))
            .map(|(k, v)| (k, v.as_slice()))
    }

    /// Number of distinct date keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, key: DateKey, label: String) {
        self.entries.entry(key).or_default().push(label);
    }
}

/// Expands configured entries into a [`DateIndex`].
#[derive(Debug, Clone, Copy)]
pub struct DateIndexBuilder {
    reference_year: i32,
    name_case: NameCase,
}

impl DateIndexBuilder {
    pub fn new(reference_year: i32) -> Self {
        Self {
            reference_year,
            name_case: NameCase::default(),
        }
    }

    pub fn name_case(mut self, name_case: NameCase) -> Self {
        self.name_case = name_case;
        self
    }

    pub fn build(&self, config: &ConfigModel) -> DateIndex {
        let mut index = DateIndex::default();
        let next_year = self.reference_year + 1;

        for entry in config.entries() {
            let month_day = entry.month_day();
            let age = entry.birth_year().map(|born| self.reference_year - born);

            index.push(
                DateKey::compose(self.reference_year, month_day),
                self.label(entry, age),
            );
            index.push(
                DateKey::compose(next_year, month_day),
                self.label(entry, age.map(|age| age + 1)),
            );
        }

        debug!(
            reference_year = self.reference_year,
            dates = index.len(),
            "built date index"
        );
        index
    }

    fn label(&self, entry: &CategoryEntry, age: Option<i32>) -> String {
        let mut label = format!("{}  {}", entry.marker, self.name_case.apply(&entry.name));
        if let Some(age) = age {
            label.push_str(&format!(" ({age})"));
        }
        label
    }
}

/// Shorthand for `DateIndexBuilder::new(reference_year).build(config)`.
pub fn build(config: &ConfigModel, reference_year: i32) -> DateIndex {
    DateIndexBuilder::new(reference_year).build(config)
}
