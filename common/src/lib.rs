//! This crate provides common funcionality for working with regression data

#![deny(unused_imports)]
#![warn(missing_docs)]

#[macro_use]
extern crate log;

use rand::{rngs::SmallRng, SeedableRng};

mod dataset;
mod error;
mod generate;
mod metrics;

pub use dataset::Dataset;
pub use error::{DataError, Result};
pub use generate::make_regression;
pub use metrics::mean_squared_error;

/// Seeded Rng if a seed is given, otherwise seeded from the OS
pub(crate) fn rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    }
}
