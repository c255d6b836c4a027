//! Subcommand implementations.

mod capture;
mod countries;
mod dashboard;
mod facets;
mod map;

use anyhow::Result;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Chart the number of archival items held in each country
    Countries(countries::CountriesArgs),

    /// Plot the locations of archival institutions
    Map(map::MapArgs),

    /// Chart archival descriptions per date
    Facets(facets::FacetsArgs),

    /// Show every section in turn
    Dashboard(dashboard::DashboardArgs),

    /// Save raw portal responses for offline replay
    Capture(capture::CaptureArgs),
}

pub async fn handle(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Countries(args) => countries::run(args).await,
        Commands::Map(args) => map::run(args).await,
        Commands::Facets(args) => facets::run(args).await,
        Commands::Dashboard(args) => dashboard::run(args).await,
        Commands::Capture(args) => capture::run(args).await,
    }
}
