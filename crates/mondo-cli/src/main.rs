//! mondo: command-line interface for the MondoExplora data pipeline
//!
//! Usage examples
//! --------------
//!
//! - Regenerate the homepage data from `data/hotels`
//!   $ mondo generate
//!
//! - Same, with a fixed timestamp and smaller cards
//!   $ mondo generate --generated-at 2025-01-01T00:00:00Z --top-countries 4
//!
//! - Match hotel feeds to destination files and write the regional analysis
//!   $ mondo analyze
//!
//! - Inspect generated data
//!   $ mondo stats
//!   $ mondo search bangk
//!   $ mondo regions
//!
//! Set `RUST_LOG=debug` to see every skipped file.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;
use mondo_cli::report::{analysis_breakdown, homepage_breakdown, stats_report};
use mondo_core::loader::{HOMEPAGE_DATA_FILE, HOMEPAGE_SUMMARY_FILE, REGIONAL_ANALYSIS_FILE};
use mondo_core::prelude::*;
use mondo_core::regions::regions;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let data_dir = args.data_dir;
    let homepage_path = |input: Option<PathBuf>| input.unwrap_or_else(|| data_dir.join(HOMEPAGE_DATA_FILE));

    match args.command {
        Commands::Generate {
            hotels,
            out,
            generated_at,
            top_countries,
            top_destinations,
        } => {
            let hotels_dir = hotels.unwrap_or_else(|| data_dir.join("hotels"));
            let out_dir = out.unwrap_or_else(|| data_dir.clone());
            let generated_at = match generated_at {
                Some(s) => DateTime::parse_from_rfc3339(&s)
                    .with_context(|| format!("Invalid --generated-at value: {s}"))?
                    .with_timezone(&Utc),
                None => Utc::now(),
            };

            let catalog = HotelCatalog::load_dir(&hotels_dir)
                .with_context(|| format!("Cannot read hotel data from {}", hotels_dir.display()))?;
            if catalog.is_empty() {
                anyhow::bail!("No hotel data found in {}", hotels_dir.display());
            }
            info!(
                "Loaded {} destinations ({} hotels) from {}",
                catalog.len(),
                catalog.hotel_count(),
                hotels_dir.display()
            );

            let limits = TopLimits {
                countries: top_countries,
                destinations: top_destinations,
            };
            let data = HomepageData::generate(&catalog, generated_at, limits);

            let data_path = out_dir.join(HOMEPAGE_DATA_FILE);
            data.save(&data_path)
                .with_context(|| format!("Cannot write {}", data_path.display()))?;
            let summary_path = out_dir.join(HOMEPAGE_SUMMARY_FILE);
            HomepageSummary::from(&data)
                .save(&summary_path)
                .with_context(|| format!("Cannot write {}", summary_path.display()))?;
            info!("Wrote {} and {}", data_path.display(), summary_path.display());

            print!("{}", homepage_breakdown(&data));
            println!();
            println!("Files created:");
            println!("  {} (full data)", data_path.display());
            println!("  {} (summary)", summary_path.display());
        }

        Commands::Analyze {
            hotels,
            destinations,
            out,
        } => {
            let hotels_dir = hotels.unwrap_or_else(|| data_dir.join("hotels"));
            let dest_dir = destinations.unwrap_or_else(|| data_dir.join("en").join("destination"));
            let out_path = out.unwrap_or_else(|| data_dir.join(REGIONAL_ANALYSIS_FILE));

            let catalog = HotelCatalog::load_dir(&hotels_dir)
                .with_context(|| format!("Cannot read hotel data from {}", hotels_dir.display()))?;
            let index = DestinationIndex::load_dir(&dest_dir)
                .with_context(|| format!("Cannot read destinations from {}", dest_dir.display()))?;

            info!(
                "Analyzing {} hotel files against {} destination files",
                catalog.len(),
                index.len()
            );
            let analysis = analyze(&catalog, &index);
            print!("{}", analysis_breakdown(&analysis));
            save_analysis(&analysis, &out_path)
                .with_context(|| format!("Cannot write {}", out_path.display()))?;
            println!("Analysis saved to: {}", out_path.display());
        }

        Commands::Stats { input } => {
            let path = homepage_path(input);
            let data = HomepageData::load_from_path(&path)
                .with_context(|| format!("Cannot load {}", path.display()))?;
            print!("{}", stats_report(&data.stats()));
            println!("  Generated at: {}", data.generated_at.to_rfc3339());
        }

        Commands::Regions => {
            for region in regions() {
                println!("{} (fallback from ${})", region.name, region.fallback_price);
                println!("  {}", region.countries.join(", "));
            }
        }

        Commands::Search {
            query,
            input,
            limit,
        } => {
            let path = homepage_path(input);
            let index = SearchIndex::new(load_search_data(&path));
            info!("Searching {} items from {}", index.len(), path.display());
            let hits = index.filter(&query, limit);
            if hits.is_empty() {
                println!("No countries or destinations found matching: {query}");
            } else {
                for item in hits {
                    println!("{} [{}] {}", item.name, item.kind.as_str(), item.href("en"));
                }
            }
        }
    }

    Ok(())
}
