// src/bin/cli.rs
use clap::Parser;
use tr_scrape::cli::{self, Args};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    cli::run(&args)
}
