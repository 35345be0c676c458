//! [`Sale`]-related read definitions.

pub mod list;
mod metrics;

#[cfg(doc)]
use crate::domain::Sale;

pub use self::metrics::{ConversionRate, Metrics};
