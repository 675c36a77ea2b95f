use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for mondo-cli
#[derive(Debug, Parser)]
#[command(
    name = "mondo",
    version,
    about = "Generate and inspect the precomputed data behind the MondoExplora site"
)]
pub struct CliArgs {
    /// Root data directory (default: data)
    #[arg(short = 'd', long = "data-dir", global = true, default_value = "data")]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build homepage-data.json and homepage-summary.json from the hotel feeds
    Generate {
        /// Hotel feed directory (default: <data-dir>/hotels)
        #[arg(long)]
        hotels: Option<PathBuf>,

        /// Output directory (default: <data-dir>)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Timestamp recorded as generatedAt, RFC 3339 (default: now)
        #[arg(long)]
        generated_at: Option<String>,

        /// Countries kept per region
        #[arg(long, default_value_t = 6)]
        top_countries: usize,

        /// Destinations kept per country
        #[arg(long, default_value_t = 10)]
        top_destinations: usize,
    },

    /// Build regional-analysis.json by matching hotel feeds to destination files
    Analyze {
        /// Hotel feed directory (default: <data-dir>/hotels)
        #[arg(long)]
        hotels: Option<PathBuf>,

        /// Destination description directory (default: <data-dir>/en/destination)
        #[arg(long)]
        destinations: Option<PathBuf>,

        /// Output file (default: <data-dir>/regional-analysis.json)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Show a summary of generated homepage data
    Stats {
        /// Homepage data file (default: <data-dir>/homepage-data.json)
        #[arg(short = 'i', long = "input")]
        input: Option<PathBuf>,
    },

    /// List the regions and their member countries
    Regions,

    /// Search countries and destinations by substring
    Search {
        /// Substring to search (case-insensitive, at least 2 characters)
        query: String,

        /// Homepage data file (default: <data-dir>/homepage-data.json)
        #[arg(short = 'i', long = "input")]
        input: Option<PathBuf>,

        /// Maximum number of results
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,
    },
}
