use super::aliases::AliasTable;
use super::matcher::match_title;
use std::collections::{BTreeMap, BTreeSet};

/// Titles attributed to each canonical name, in input order. A name's count
/// is the length of its title list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NameTally {
    titles_by_name: BTreeMap<String, Vec<String>>,
}

impl NameTally {
    /// Single pass over `titles`. A title naming several philosophers counts
    /// once toward each of them.
    pub fn collect<S: AsRef<str>>(table: &AliasTable, titles: &[S]) -> Self {
        let mut tally = Self::default();

        for title in titles {
            let title = title.as_ref();
            for canonical in match_title(table, title) {
                tally.record(canonical, title);
            }
        }

        tally
    }

    fn record(&mut self, canonical: &str, title: &str) {
        match self.titles_by_name.get_mut(canonical) {
            Some(titles) => titles.push(title.to_string()),
            None => {
                self.titles_by_name
                    .insert(canonical.to_string(), vec![title.to_string()]);
            }
        }
    }

    pub fn count(&self, name: &str) -> usize {
        self.titles_by_name.get(name).map_or(0, Vec::len)
    }

    pub fn titles(&self, name: &str) -> &[String] {
        self.titles_by_name
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn unique_names(&self) -> usize {
        self.titles_by_name.len()
    }

    pub fn total_matches(&self) -> usize {
        self.titles_by_name.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.titles_by_name.is_empty()
    }

    pub fn names(&self) -> BTreeSet<&str> {
        self.titles_by_name.keys().map(String::as_str).collect()
    }

    /// Names by descending count, ties in ascending name order.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self.alphabetical();
        // Stable sort keeps the alphabetical order within equal counts.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    pub fn alphabetical(&self) -> Vec<(&str, usize)> {
        self.titles_by_name
            .iter()
            .map(|(name, titles)| (name.as_str(), titles.len()))
            .collect()
    }
}
