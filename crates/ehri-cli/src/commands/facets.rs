//! Facets command implementation.

use anyhow::{Context, Result};
use clap::Args;

use ehri_core::{ArchiveSource, FacetRecord, SearchQuery};

use crate::cli::{PortalArgs, QueryArgs};
use crate::output;
use crate::source::CliSource;

pub const TITLE: &str = "Archival Descriptions Histogram";

#[derive(Args, Debug)]
pub struct FacetsArgs {
    #[command(flatten)]
    pub portal: PortalArgs,

    #[command(flatten)]
    pub query: QueryArgs,

    /// Print rows as JSON instead of a chart
    #[arg(long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long, requires = "json")]
    pub pretty: bool,
}

/// Draw the date histogram.
pub fn render(query: &SearchQuery, records: &[FacetRecord]) {
    output::header(TITLE);
    output::field("Search", &query.to_string());
    if records.is_empty() {
        output::notice("No dated descriptions found.");
        return;
    }

    let bars: Vec<(&str, u64)> = records
        .iter()
        .map(|r| (r.value.as_str(), r.count))
        .collect();
    print!("{}", output::render_bar_chart(&bars));
}

pub async fn run(args: FacetsArgs) -> Result<()> {
    let source = CliSource::open(&args.portal.portal)?;
    let query = SearchQuery::new(&args.query.query);

    let records = source
        .date_facets(&query)
        .await
        .context("Failed to load date facets")?;

    if args.json {
        return output::rows(&records, args.pretty);
    }

    render(&query, &records);
    Ok(())
}
