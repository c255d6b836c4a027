//! Map command implementation.

use anyhow::{Context, Result};
use clap::Args;

use ehri_core::{ArchiveSource, GeoPoint};

use crate::cli::{CoordinateArgs, PortalArgs};
use crate::output;
use crate::source::CliSource;

pub const TITLE: &str = "Archival Institutions Map";

#[derive(Args, Debug)]
pub struct MapArgs {
    #[command(flatten)]
    pub portal: PortalArgs,

    #[command(flatten)]
    pub coordinates: CoordinateArgs,

    /// Print points as JSON instead of a map
    #[arg(long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long, requires = "json")]
    pub pretty: bool,
}

/// Draw the repository map.
pub fn render(points: &[GeoPoint]) {
    output::header(TITLE);
    if points.is_empty() {
        output::notice("No located institutions.");
        return;
    }

    print!(
        "{}",
        output::render_point_map(points, output::MAP_WIDTH, output::MAP_HEIGHT)
    );
}

pub async fn run(args: MapArgs) -> Result<()> {
    let source = CliSource::open(&args.portal.portal)?;

    let tables = source
        .country_tables(args.coordinates.policy())
        .await
        .context("Failed to load repository locations")?;

    if args.json {
        return output::rows(&tables.points, args.pretty);
    }

    render(&tables.points);
    Ok(())
}
