//! Dashboard command implementation.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use ehri_core::{ArchiveSource, CountrySummaryRow, FacetRecord, GeoPoint, SearchQuery};

use super::{countries, facets, map};
use crate::cli::{CoordinateArgs, PortalArgs, QueryArgs};
use crate::output;
use crate::source::CliSource;

#[derive(Args, Debug)]
pub struct DashboardArgs {
    #[command(flatten)]
    pub portal: PortalArgs,

    #[command(flatten)]
    pub query: QueryArgs,

    #[command(flatten)]
    pub coordinates: CoordinateArgs,

    /// Print all tables as one JSON document instead of charts
    #[arg(long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long, requires = "json")]
    pub pretty: bool,
}

#[derive(Debug, Serialize)]
struct Dashboard<'a> {
    countries: &'a [CountrySummaryRow],
    points: &'a [GeoPoint],
    facets: &'a [FacetRecord],
}

/// Sections are produced strictly in order; the first failure ends the run,
/// so a failed country listing also suppresses the histogram.
pub async fn run(args: DashboardArgs) -> Result<()> {
    let source = CliSource::open(&args.portal.portal)?;
    let query = SearchQuery::new(&args.query.query);

    let tables = source
        .country_tables(args.coordinates.policy())
        .await
        .context("Failed to load countries")?;

    if !args.json {
        countries::render(&tables.summary);
        map::render(&tables.points);
    }

    let records = source
        .date_facets(&query)
        .await
        .context("Failed to load date facets")?;

    if args.json {
        let dashboard = Dashboard {
            countries: &tables.summary,
            points: &tables.points,
            facets: &records,
        };
        return output::rows(&dashboard, args.pretty);
    }

    facets::render(&query, &records);
    Ok(())
}
