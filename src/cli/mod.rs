// src/cli/mod.rs
use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use color_eyre::eyre::Result;
use tracing::info;

use crate::{
    config::{ScrapeOptions, consts::*},
    runner::BackgroundScraper,
    scrape::WikiScraper,
    stats,
};

mod progress;
pub mod report;

pub use progress::ConsoleProgress;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Order in which labels were first seen
    #[default]
    Seen,
    /// Most common first
    Count,
}

#[derive(Parser, Debug)]
#[command(name = "tr_scrape", version, about = "Scrape Terraria NPC living preferences and count favorites")]
pub struct Args {
    /// Wiki root URL
    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    /// NPC index page, relative to the wiki root
    #[arg(long, default_value = INDEX_PATH)]
    pub index_path: String,

    /// Pause after each NPC page, in milliseconds
    #[arg(long, default_value_t = REQUEST_PAUSE_MS)]
    pub pause_ms: u64,

    /// Per-request timeout, in seconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Also print every NPC's preference table
    #[arg(long)]
    pub tables: bool,

    /// Row order of the frequency tables
    #[arg(long, value_enum, default_value_t = SortOrder::Seen)]
    pub sort: SortOrder,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn options(&self) -> ScrapeOptions {
        let mut opts = ScrapeOptions::with_base_url(self.base_url.as_str());
        opts.index_path = self.index_path.clone();
        opts.set_pause_ms(self.pause_ms);
        opts.set_timeout_secs(self.timeout_secs);
        opts
    }
}

pub fn run(args: &Args) -> Result<()> {
    crate::log::init(args.verbose);

    let scraper = BackgroundScraper::new(WikiScraper::http(&args.options())?);
    let job = scraper.start()?;

    let mut progress = ConsoleProgress::default();
    let records = job.wait(&mut progress)?;
    info!("Scraped {} NPCs", records.len());

    let stats = stats::aggregate(&records);

    let mut out = io::stdout().lock();
    if args.tables {
        report::write_tables(&mut out, &records)?;
    }
    report::write_stats(&mut out, &stats, args.sort)?;
    out.flush()?;
    Ok(())
}
