// src/config/options.rs
use std::time::Duration;

use super::consts::*;

/// Runtime knobs for a scrape. Defaults point at the live wiki.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Site root; NPC links are resolved against it.
    pub base_url: String,
    /// Path of the NPC index, relative to `base_url`.
    pub index_path: String,
    pub timeout: Duration,
    /// Sleep after every NPC page fetch.
    pub pause: Duration,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            index_path: INDEX_PATH.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
        }
    }
}

impl ScrapeOptions {
    /// Same defaults, pointed at another site root.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Self::default() }
    }

    pub fn set_pause_ms(&mut self, ms: u64) {
        self.pause = Duration::from_millis(ms);
    }

    pub fn set_timeout_secs(&mut self, secs: u64) {
        self.timeout = Duration::from_secs(secs);
    }
}
