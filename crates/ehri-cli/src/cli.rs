//! CLI argument definitions.

use clap::{Args, Parser};

use ehri_core::{CoordinatePolicy, PortalUrl};

use crate::commands::Commands;

/// Terminal dashboard for the EHRI archival portal.
#[derive(Parser, Debug)]
#[command(name = "ehri")]
#[command(author, version = env!("EHRI_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where portal data comes from.
#[derive(Args, Debug)]
pub struct PortalArgs {
    /// Portal base URL, or file:// URL of a capture directory
    #[arg(long, env = "EHRI_PORTAL", default_value = PortalUrl::DEFAULT)]
    pub portal: String,
}

/// How repository coordinates are filtered for the map.
#[derive(Args, Debug)]
pub struct CoordinateArgs {
    /// Plot repositories lying on the equator or the prime meridian
    /// (by default a coordinate of exactly 0 counts as missing)
    #[arg(long)]
    pub keep_zero_coordinates: bool,
}

impl CoordinateArgs {
    pub fn policy(&self) -> CoordinatePolicy {
        if self.keep_zero_coordinates {
            CoordinatePolicy::Present
        } else {
            CoordinatePolicy::Truthy
        }
    }
}

/// Free-text search term for the date histogram.
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Search term (optional; empty matches every archival description)
    #[arg(short, long = "query", default_value = "")]
    pub query: String,
}
