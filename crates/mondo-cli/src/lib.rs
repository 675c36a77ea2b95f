//! mondo-cli
//! =========
//!
//! Command-line tools for the MondoExplora data pipeline.
//!
//! This crate primarily provides a binary (`mondo`). The library target
//! holds the report formatting so it can be tested without spawning the
//! binary.
//!
//! Basic usage:
//!
//! ```text
//! mondo generate
//! mondo analyze --out data/regional-analysis.json
//! mondo stats
//! mondo search bang
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod report;
