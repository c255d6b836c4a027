//! Countries command implementation.

use anyhow::{Context, Result};
use clap::Args;

use ehri_core::{ArchiveSource, CoordinatePolicy, CountrySummaryRow};

use crate::cli::PortalArgs;
use crate::output;
use crate::source::CliSource;

pub const TITLE: &str = "Archival Institutions per Country";

#[derive(Args, Debug)]
pub struct CountriesArgs {
    #[command(flatten)]
    pub portal: PortalArgs,

    /// Print rows as JSON instead of a chart
    #[arg(long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long, requires = "json")]
    pub pretty: bool,
}

/// Draw the per-country chart.
pub fn render(rows: &[CountrySummaryRow]) {
    output::header(TITLE);
    if rows.is_empty() {
        output::notice("No countries found.");
        return;
    }

    let bars: Vec<(&str, u64)> = rows
        .iter()
        .map(|row| (row.name.as_str(), row.item_count))
        .collect();
    print!("{}", output::render_bar_chart(&bars));
}

pub async fn run(args: CountriesArgs) -> Result<()> {
    let source = CliSource::open(&args.portal.portal)?;

    // The summary does not depend on coordinates.
    let tables = source
        .country_tables(CoordinatePolicy::default())
        .await
        .context("Failed to load countries")?;

    if args.json {
        return output::rows(&tables.summary, args.pretty);
    }

    render(&tables.summary);
    Ok(())
}
