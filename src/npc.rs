// src/npc.rs
//
// Typed living-preference data for one NPC.
//
// Two kinds of "nothing" are kept apart:
// - NpcRecord.preferences == None: the NPC has no table at all (exclusion list).
// - Cell::NotAvailable: the table exists but this (level, column) is empty.

use std::fmt;

use crate::config::consts::{BIOME_COLUMN, NEIGHBOR_COLUMN, NO_LIVING_PREFERENCES, NOT_AVAILABLE};
use crate::core::sanitize::{normalize, split_list};
use crate::error::NpcError;

/// True for NPCs the wiki documents as having no living preferences.
pub fn has_no_living_preferences(name: &str) -> bool {
    NO_LIVING_PREFERENCES.contains(&name.trim())
}

/// One table cell. Renders as `N/A` when empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Value(String),
    NotAvailable,
}

impl Cell {
    /// Normalize raw scraped text. Blank or literal `N/A` cells are not available.
    pub fn from_scraped(raw: &str) -> Self {
        let text = normalize(raw);
        if text.is_empty() || text == NOT_AVAILABLE {
            Cell::NotAvailable
        } else {
            Cell::Value(text)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Cell::Value(s) => s,
            Cell::NotAvailable => NOT_AVAILABLE,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Cell::Value(_))
    }

    /// The comma-separated entries, or None for `N/A`.
    pub fn entries(&self) -> Option<Vec<String>> {
        match self {
            Cell::Value(s) => Some(split_list(s)),
            Cell::NotAvailable => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Row label on the liking scale. Ordering comes from the row position in
/// the table, not from the label.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LikingLevel(String);

impl LikingLevel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }
    pub fn label(&self) -> &str { &self.0 }
}

impl fmt::Display for LikingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Biome,
    Neighbor,
}

impl Column {
    pub const ALL: [Column; 2] = [Column::Biome, Column::Neighbor];

    /// Header text on the wiki table.
    pub fn header(self) -> &'static str {
        match self {
            Column::Biome => BIOME_COLUMN,
            Column::Neighbor => NEIGHBOR_COLUMN,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreferenceRow {
    pub level: LikingLevel,
    pub biome: Cell,
    pub neighbor: Cell,
}

impl PreferenceRow {
    pub fn new(level: LikingLevel, biome: Cell, neighbor: Cell) -> Self {
        Self { level, biome, neighbor }
    }

    pub fn cell(&self, column: Column) -> &Cell {
        match column {
            Column::Biome => &self.biome,
            Column::Neighbor => &self.neighbor,
        }
    }
}

/// Liking scale x {Biome, Neighbor}, most liked row first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreferenceTable {
    rows: Vec<PreferenceRow>,
}

impl PreferenceTable {
    pub fn new(rows: Vec<PreferenceRow>) -> Result<Self, NpcError> {
        if rows.is_empty() {
            return Err(NpcError::EmptyTable);
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[PreferenceRow] { &self.rows }

    pub fn levels(&self) -> impl Iterator<Item = &LikingLevel> {
        self.rows.iter().map(|r| &r.level)
    }

    pub fn get(&self, level: &str, column: Column) -> Option<&Cell> {
        self.rows
            .iter()
            .find(|r| r.level.label() == level)
            .map(|r| r.cell(column))
    }

    /// First cell with data, scanning from the most liked row.
    pub fn most_liked(&self, column: Column) -> Option<&Cell> {
        self.rows.iter().map(|r| r.cell(column)).find(|c| c.is_available())
    }

    /// First cell with data, scanning from the most disliked row.
    pub fn most_disliked(&self, column: Column) -> Option<&Cell> {
        self.rows.iter().rev().map(|r| r.cell(column)).find(|c| c.is_available())
    }
}

/// One scraped NPC. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NpcRecord {
    name: String,
    preferences: Option<PreferenceTable>,
}

impl NpcRecord {
    pub fn new(name: impl Into<String>, preferences: Option<PreferenceTable>) -> Result<Self, NpcError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(NpcError::MissingName);
        }
        Ok(Self { name, preferences })
    }

    pub fn name(&self) -> &str { &self.name }

    /// None when the NPC has no living preferences at all.
    pub fn preferences(&self) -> Option<&PreferenceTable> { self.preferences.as_ref() }

    pub fn favorites(&self, column: Column) -> Vec<String> {
        Self::entries_or_na(self.preferences.as_ref().and_then(|t| t.most_liked(column)))
    }

    pub fn least_favorites(&self, column: Column) -> Vec<String> {
        Self::entries_or_na(self.preferences.as_ref().and_then(|t| t.most_disliked(column)))
    }

    pub fn favorite_biomes(&self) -> Vec<String> { self.favorites(Column::Biome) }
    pub fn favorite_neighbors(&self) -> Vec<String> { self.favorites(Column::Neighbor) }
    pub fn least_favorite_biomes(&self) -> Vec<String> { self.least_favorites(Column::Biome) }
    pub fn least_favorite_neighbors(&self) -> Vec<String> { self.least_favorites(Column::Neighbor) }

    // No data anywhere is reported as ["N/A"], never an empty list; the
    // counters rely on that.
    fn entries_or_na(cell: Option<&Cell>) -> Vec<String> {
        match cell.and_then(Cell::entries) {
            Some(list) if !list.is_empty() => list,
            _ => vec![NOT_AVAILABLE.to_string()],
        }
    }
}
