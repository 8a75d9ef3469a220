// tests/common/mod.rs
//
// In-memory wiki for driving the scraper without a network.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use tr_scrape::config::ScrapeOptions;
use tr_scrape::core::Fetch;
use tr_scrape::error::FetchError;
use url::Url;

pub const BASE: &str = "https://wiki.test/";

pub fn options() -> ScrapeOptions {
    let mut opts = ScrapeOptions::with_base_url(BASE);
    opts.set_pause_ms(0);
    opts
}

pub fn url(path: &str) -> String {
    Url::parse(BASE).unwrap().join(path).unwrap().to_string()
}

pub fn href(name: &str) -> String {
    format!("/wiki/{}", name.replace(' ', "_"))
}

/// Canned pages keyed by absolute URL. Unknown URLs are 404s.
#[derive(Default)]
pub struct FixtureWiki {
    pages: HashMap<String, Result<String, u16>>,
    requests: Mutex<Vec<String>>,
}

impl FixtureWiki {
    pub fn new() -> Self { Self::default() }

    pub fn page(mut self, path: &str, body: impl Into<String>) -> Self {
        self.pages.insert(url(path), Ok(body.into()));
        self
    }

    pub fn failing(mut self, path: &str, status: u16) -> Self {
        self.pages.insert(url(path), Err(status));
        self
    }

    /// Every URL requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Fetch for FixtureWiki {
    fn get(&self, url: &Url) -> Result<String, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        match self.pages.get(url.as_str()) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(FetchError::Status { url: url.to_string(), status: *status }),
            None => Err(FetchError::Status { url: url.to_string(), status: 404 }),
        }
    }
}

/// Index page with an "NPCs" box linking `names` in order.
pub fn index_page(names: &[&str]) -> String {
    let entries: String = names
        .iter()
        .map(|n| format!(r#"<div class="i"><a href="{}" title="{n}">{n}</a></div>"#, href(n)))
        .collect();
    format!(
        r#"<html><body><div class="box"><div class="title">NPCs</div><div class="list">{entries}</div></div></body></html>"#
    )
}

/// NPC page with a living preferences table. Rows are (level, biome, neighbor).
pub fn npc_page(name: &str, rows: &[(&str, &str, &str)]) -> String {
    let body: String = rows
        .iter()
        .map(|(l, b, n)| format!("<tr><th>{l}</th><td>{b}</td><td>{n}</td></tr>"))
        .collect();
    format!(
        r#"<html><body><h1 id="firstHeading">{name}</h1>
        <table class="terraria living-preferences"><tr><th></th><th>Biome</th><th>Neighbor</th></tr>{body}</table>
        </body></html>"#
    )
}

/// Simple four-level page liking `biome` and disliking nothing.
pub fn simple_npc(name: &str, biome: &str) -> String {
    npc_page(
        name,
        &[("Loves", "", ""), ("Likes", biome, "Guide"), ("Dislikes", "", ""), ("Hates", "", "")],
    )
}

pub fn fixture(name: &str) -> &'static str {
    match name {
        "index" => include_str!("../fixtures/npcs_index.html"),
        "guide" => include_str!("../fixtures/guide.html"),
        "merchant" => include_str!("../fixtures/merchant.html"),
        "nurse" => include_str!("../fixtures/nurse.html"),
        "angler" => include_str!("../fixtures/angler.html"),
        other => panic!("no fixture {other}"),
    }
}
