// src/stats.rs
use std::collections::HashMap;

use crate::npc::NpcRecord;

/// Label -> count, kept in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl FrequencyMap {
    pub fn new() -> Self { Self::default() }

    pub fn add(&mut self, label: &str) {
        match self.index.get(label) {
            Some(&ix) => self.entries[ix].1 += 1,
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push((label.to_string(), 1));
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.index.get(label).map(|&ix| self.entries[ix].1)
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(label, n)| (label.as_str(), *n))
    }

    /// Highest count first; ties keep first-seen order.
    pub fn by_count(&self) -> Vec<(&str, usize)> {
        let mut v: Vec<_> = self.iter().collect();
        v.sort_by(|a, b| b.1.cmp(&a.1));
        v
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }
}

impl<'a> Extend<&'a str> for FrequencyMap {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for label in iter {
            self.add(label);
        }
    }
}

/// The four counts shown after a scrape.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub favorite_biomes: FrequencyMap,
    pub favorite_neighbors: FrequencyMap,
    pub least_favorite_biomes: FrequencyMap,
    pub least_favorite_neighbors: FrequencyMap,
}

impl Stats {
    /// (title, map) in display order.
    pub fn categories(&self) -> [(&'static str, &FrequencyMap); 4] {
        [
            ("Favorite biomes", &self.favorite_biomes),
            ("Favorite neighbors", &self.favorite_neighbors),
            ("Least favorite biomes", &self.least_favorite_biomes),
            ("Least favorite neighbors", &self.least_favorite_neighbors),
        ]
    }
}

/// Count every entry of every NPC's four derived lists. An NPC with two
/// favorite biomes adds one to each; `N/A` is counted like any label.
pub fn aggregate<'a, I>(records: I) -> Stats
where
    I: IntoIterator<Item = &'a NpcRecord>,
{
    let mut stats = Stats::default();
    for npc in records {
        stats.favorite_biomes.extend(npc.favorite_biomes().iter().map(String::as_str));
        stats.favorite_neighbors.extend(npc.favorite_neighbors().iter().map(String::as_str));
        stats.least_favorite_biomes.extend(npc.least_favorite_biomes().iter().map(String::as_str));
        stats.least_favorite_neighbors.extend(npc.least_favorite_neighbors().iter().map(String::as_str));
    }
    stats
}
