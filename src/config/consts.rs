// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://terraria.fandom.com/";
pub const INDEX_PATH: &str = "wiki/NPCs";
pub const USER_AGENT: &str = concat!("tr_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 15;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite

// Page layout
pub const INDEX_HEADING: &str = "NPCs";
pub const PREFERENCES_TABLE_CLASS: &str = "living-preferences";
pub const BIOME_COLUMN: &str = "Biome";
pub const NEIGHBOR_COLUMN: &str = "Neighbor";

// Sentinel for a cell (or derived list) with no data
pub const NOT_AVAILABLE: &str = "N/A";

/// NPCs the wiki documents as having no living preferences at all.
/// Their pages are never fetched.
pub const NO_LIVING_PREFERENCES: &[&str] = &[
    "Princess",
    "Traveling Merchant",
    "Old Man",
    "Skeleton Merchant",
    "Mc MoneyPants",
    "Star Merchant",
    "Town Cat",
    "Town Dog",
    "Town Bunny",
    "Confused",
];
