// src/scrape.rs
//
// The scrape itself: index page, then every NPC page, one at a time.
//
// `WikiScraper::scrape()` hands out a lazy `Scrape` iterator. Advancing it
// does the network work and yields progress; `Scrape::finish()` hands back
// the records. Nothing is fetched or cached ahead of the iterator.

use std::{iter::Enumerate, thread, time::Duration, vec};

use tracing::{error, info};
use url::Url;

use crate::{
    config::ScrapeOptions,
    core::{Fetch, HttpClient, html::{self, NpcLink, NpcPage}},
    error::{NpcError, ScrapeError},
    npc::{NpcRecord, has_no_living_preferences},
    progress::{ItemReport, ItemStatus, Progress, ProgressEvent},
};

pub struct WikiScraper<F> {
    fetcher: F,
    base: Url,
    index: Url,
    pause: Duration,
}

impl WikiScraper<HttpClient> {
    /// Scraper talking to the real site over HTTP.
    pub fn http(opts: &ScrapeOptions) -> Result<Self, ScrapeError> {
        let client = HttpClient::new(opts).map_err(ScrapeError::Http)?;
        Self::new(client, opts)
    }
}

impl<F: Fetch> WikiScraper<F> {
    pub fn new(fetcher: F, opts: &ScrapeOptions) -> Result<Self, ScrapeError> {
        let base = Url::parse(&opts.base_url)
            .map_err(|source| ScrapeError::BadBaseUrl { url: opts.base_url.clone(), source })?;
        let index = base.join(&opts.index_path).map_err(|source| ScrapeError::BadBaseUrl {
            url: format!("{}{}", opts.base_url, opts.index_path),
            source,
        })?;
        Ok(Self { fetcher, base, index, pause: opts.pause })
    }

    pub fn fetcher(&self) -> &F { &self.fetcher }

    pub fn index_url(&self) -> &Url { &self.index }

    /// Fresh single-pass scrape. Nothing happens until it is iterated.
    pub fn scrape(&self) -> Scrape<'_, F> {
        Scrape {
            scraper: self,
            state: State::Pending,
            records: Vec::new(),
            failure: None,
        }
    }

    /// Run a whole scrape on the calling thread, reporting to `progress`.
    pub fn run(&self, progress: &mut dyn Progress) -> Result<Vec<NpcRecord>, ScrapeError> {
        let mut scrape = self.scrape();
        for event in scrape.by_ref() {
            event.forward(progress);
        }
        progress.finish();
        scrape.finish()
    }

    fn load_index(&self) -> Result<Vec<NpcLink>, ScrapeError> {
        let body = self.fetcher.get(&self.index).map_err(ScrapeError::IndexUnreachable)?;
        let links = html::parse_index(&body).ok_or(ScrapeError::IndexUnparsable)?;
        info!("Found {} NPC links on {}", links.len(), self.index);
        Ok(links)
    }

    fn scrape_npc(&self, link: &NpcLink) -> Result<NpcRecord, NpcError> {
        if has_no_living_preferences(&link.name) {
            info!("Skipping {} (no living preferences).", link.name);
            return NpcRecord::new(link.name.as_str(), None);
        }

        let url = self
            .base
            .join(&link.href)
            .map_err(|source| NpcError::BadLink { href: link.href.clone(), source })?;
        let body = self.fetcher.get(&url);
        self.be_polite();

        let page = NpcPage::parse(&body?);
        let name = page.heading().unwrap_or_else(|| link.name.clone());
        if has_no_living_preferences(&name) {
            info!("Skipping {name} (no living preferences).");
            return NpcRecord::new(name, None);
        }

        let record = NpcRecord::new(name, Some(page.preferences()?))?;
        info!("Successfully parsed {}!", record.name());
        Ok(record)
    }

    fn be_polite(&self) {
        if !self.pause.is_zero() {
            thread::sleep(self.pause);
        }
    }
}

enum State {
    Pending,
    Running(Enumerate<vec::IntoIter<NpcLink>>),
    Done,
}

/// One pass over the wiki. Yields `Begin { total }` first, then one `Item`
/// per NPC link. If the index can't be loaded it yields nothing and
/// `finish()` returns the error.
pub struct Scrape<'s, F> {
    scraper: &'s WikiScraper<F>,
    state: State,
    records: Vec<NpcRecord>,
    failure: Option<ScrapeError>,
}

impl<F: Fetch> Scrape<'_, F> {
    /// Drive any remaining work, then return the records in index order.
    pub fn finish(mut self) -> Result<Vec<NpcRecord>, ScrapeError> {
        for _ in self.by_ref() {}
        match self.failure.take() {
            Some(err) => Err(err),
            None => Ok(std::mem::take(&mut self.records)),
        }
    }

    fn begin(&mut self) -> Option<ProgressEvent> {
        match self.scraper.load_index() {
            Ok(links) => {
                let total = links.len();
                self.state = State::Running(links.into_iter().enumerate());
                Some(ProgressEvent::Begin { total })
            }
            Err(err) => {
                error!("Scrape aborted: {err}");
                self.failure = Some(err);
                self.state = State::Done;
                None
            }
        }
    }

    fn visit(&mut self, index: usize, link: NpcLink) -> ItemReport {
        match self.scraper.scrape_npc(&link) {
            Ok(record) => {
                let status = match record.preferences() {
                    Some(_) => ItemStatus::Parsed,
                    None => ItemStatus::NoPreferences,
                };
                let name = record.name().to_string();
                self.records.push(record);
                ItemReport { index, name, status }
            }
            Err(err) => {
                error!("Failed to parse {}: {err}. Moving on...", link.name);
                ItemReport { index, name: link.name, status: ItemStatus::Failed(err) }
            }
        }
    }
}

impl<F: Fetch> Iterator for Scrape<'_, F> {
    type Item = ProgressEvent;

    fn next(&mut self) -> Option<ProgressEvent> {
        let next = match &mut self.state {
            State::Pending => return self.begin(),
            State::Running(links) => links.next(),
            State::Done => return None,
        };
        match next {
            Some((index, link)) => Some(ProgressEvent::Item(self.visit(index, link))),
            None => {
                info!("Scrape complete: {} records", self.records.len());
                self.state = State::Done;
                None
            }
        }
    }
}
