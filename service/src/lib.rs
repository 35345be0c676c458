//! Service contains the sales analytics logic of the application.
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod domain;
#[cfg(test)]
mod fixture;
pub mod infra;
pub mod query;
pub mod read;

use std::time::Duration;

use common::DateTime;
use rand::{rngs::StdRng, SeedableRng as _};
use tokio::sync::Mutex;

#[cfg(doc)]
use infra::Source;
use infra::{Cached, Clock, Synthetic};
use read::dataset::Size;

pub use self::query::Query;

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// [`Size`] of the generated datasets.
    pub size: Size,

    /// Start of the window generated sales happen in.
    pub since: DateTime,

    /// Time a generated dataset is reused for.
    pub ttl: Duration,

    /// Seed making the generated datasets and metrics reproducible.
    ///
    /// [`None`] means seeding from the operating system.
    pub seed: Option<u64>,
}

/// Domain service.
#[derive(Debug)]
pub struct Service<Src> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Source`] of datasets of this [`Service`].
    source: Src,

    /// Random source for the values not derivable from datasets.
    rng: Mutex<StdRng>,
}

impl<Src> Service<Src> {
    /// Creates a new [`Service`] with the provided parameters.
    #[must_use]
    pub fn new(config: Config, source: Src) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self {
            config,
            source,
            rng: Mutex::new(rng),
        }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Source`] of this [`Service`].
    #[must_use]
    pub fn source(&self) -> &Src {
        &self.source
    }

    /// Returns the random source of this [`Service`].
    pub(crate) fn rng(&self) -> &Mutex<StdRng> {
        &self.rng
    }
}

impl<C: Clock + Clone> Service<Cached<Synthetic<StdRng, C>, C>> {
    /// Creates a new [`Service`] over [`Synthetic`] datasets, reused for the
    /// configured time.
    #[must_use]
    pub fn synthetic(config: Config, clock: C) -> Self {
        let synthetic = match config.seed {
            Some(seed) => {
                Synthetic::from_seed(seed, clock.clone(), config.since)
            }
            None => Synthetic::from_entropy(clock.clone(), config.since),
        };
        Self::new(config, Cached::new(synthetic, clock, config.ttl))
    }
}
