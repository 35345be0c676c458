//! Read entities definitions.

pub mod dataset;
pub mod sale;
pub mod tally;

pub use self::{dataset::Dataset, tally::Tally};
