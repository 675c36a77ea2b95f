use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use anyhow::{anyhow, Result};
use tracing::info;

pub struct Config {
    pub port: u16,
    /// Precomputed homepage data, read again on every request.
    pub data_file: PathBuf,
    /// wasm-pack output served under `/pkg`.
    pub pkg_dir: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Self {
            port: try_load("MONDO_PORT", "3000")?,
            data_file: try_load("MONDO_DATA_FILE", "data/homepage-data.json")?,
            pkg_dir: try_load("MONDO_PKG_DIR", "crates/mondo-wasm/pkg")?,
        })
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    raw.parse()
        .map_err(|e| anyhow!("Invalid {key} value '{raw}': {e}"))
}
