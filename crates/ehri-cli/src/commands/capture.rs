//! Capture command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use ehri_core::{ArchiveSource, SearchQuery};
use ehri_file::CaptureStore;

use crate::cli::{PortalArgs, QueryArgs};
use crate::output;
use crate::source::CliSource;

#[derive(Args, Debug)]
pub struct CaptureArgs {
    #[command(flatten)]
    pub portal: PortalArgs,

    #[command(flatten)]
    pub query: QueryArgs,

    /// Directory to write the capture into (created if missing)
    #[arg(long)]
    pub out: PathBuf,
}

pub async fn run(args: CaptureArgs) -> Result<()> {
    let source = CliSource::open(&args.portal.portal)?;
    let store = CaptureStore::new(&args.out);
    let query = SearchQuery::new(&args.query.query);

    eprintln!("{}", format!("Capturing from {}...", source.url()).dimmed());

    let countries = source
        .countries_response()
        .await
        .context("Failed to fetch countries")?;
    let countries_path = store
        .write_countries(&countries)
        .await
        .context("Failed to write countries capture")?;

    let search = source
        .search_response(&query)
        .await
        .context("Failed to fetch search facets")?;
    let search_path = store
        .write_search(&query, &search)
        .await
        .context("Failed to write search capture")?;

    output::success("Captured portal responses");
    println!();
    output::field("Countries", &countries_path.display().to_string());
    output::field("Search", &search_path.display().to_string());

    Ok(())
}
