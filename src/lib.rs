//! Umbrella crate for the MondoExplora workspace; re-exports `mondo-core`
//! so the demos can `use mondo_rs::prelude::*`.
pub use mondo_core::*;
