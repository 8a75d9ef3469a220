// src/lib.rs
//! Scrapes the Terraria wiki for NPC living preferences and counts the
//! favorite / least favorite biomes and neighbors across all NPCs.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod npc;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod stats;

pub use error::{FetchError, NpcError, ScrapeError};
pub use npc::{Cell, Column, LikingLevel, NpcRecord, PreferenceRow, PreferenceTable};
pub use progress::{ItemReport, ItemStatus, NullProgress, Progress, ProgressEvent};
pub use runner::{BackgroundScraper, JobMessage, ScrapeJob};
pub use scrape::{Scrape, WikiScraper};
pub use stats::{FrequencyMap, Stats, aggregate};
