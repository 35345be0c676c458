//! [`Config`]-related definitions.

use std::time;

use common::DateTime;
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use service::read::dataset::{InvalidSize, Size};
use smart_default::SmartDefault;

/// Default start of the generation window, as a Unix timestamp of
/// `2024-01-01T00:00:00Z`.
const SINCE: u64 = 1_704_067_200;

/// Application configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset configuration.
    pub dataset: Dataset,

    /// Cache configuration.
    pub cache: Cache,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }

    /// Returns [`service::Config`] described by this [`Config`].
    ///
    /// # Errors
    ///
    /// If the configured [`Dataset`] is empty.
    pub fn service(&self) -> Result<service::Config, InvalidSize> {
        let Self {
            dataset:
                Dataset {
                    vehicles,
                    sales,
                    since,
                    seed,
                },
            cache: Cache { ttl },
            log: _,
        } = *self;

        Ok(service::Config {
            size: Size::new(vehicles, sales)?,
            since,
            ttl,
            seed,
        })
    }
}

/// Dataset configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Dataset {
    /// Number of vehicles to generate.
    #[default(50)]
    pub vehicles: usize,

    /// Number of sales to generate.
    #[default(250)]
    pub sales: usize,

    /// Start of the window generated sales happen in.
    #[default(DateTime::UNIX_EPOCH + time::Duration::from_secs(SINCE))]
    #[serde(with = "common::datetime::serde::rfc3339")]
    pub since: DateTime,

    /// Seed of the random generation.
    ///
    /// Omit to get different data on every run.
    pub seed: Option<u64>,
}

/// Cache configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Cache {
    /// Time a generated dataset is reused for.
    #[default(time::Duration::from_secs(30))]
    #[serde(with = "humantime_serde")]
    pub ttl: time::Duration,
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}
