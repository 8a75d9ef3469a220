// src/error.rs
//
// Two failure tiers:
// - NpcError: one NPC page went wrong. Logged, reported as progress, skipped.
// - ScrapeError: the whole operation failed (or was misused). Terminal.

use std::io;

use thiserror::Error;

/// Transport-level failure for a single GET.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not read body of {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Recoverable, per-NPC failure.
#[derive(Debug, Error)]
pub enum NpcError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("bad link {href:?}: {source}")]
    BadLink {
        href: String,
        #[source]
        source: url::ParseError,
    },

    #[error("page has no title heading")]
    MissingName,

    #[error("living preferences table not found")]
    MissingTable,

    #[error("living preferences table has no {0:?} column")]
    MissingColumn(&'static str),

    #[error("living preferences table has no rows")]
    EmptyTable,
}

/// Terminal failure of a whole scrape.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid wiki URL {url:?}: {source}")]
    BadBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error(transparent)]
    Http(FetchError),

    #[error("could not load the NPC index: {0}")]
    IndexUnreachable(#[source] FetchError),

    #[error("NPC index has no \"NPCs\" section")]
    IndexUnparsable,

    #[error("a scrape is already running on this scraper")]
    AlreadyRunning,

    #[error("could not start scraper thread: {0}")]
    Spawn(#[source] io::Error),

    #[error("scraper thread ended without a result")]
    Disconnected,
}
