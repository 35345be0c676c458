//! [`Query`] definition.

pub mod dataset;
pub mod metrics;
pub mod report;
pub mod sales;

/// [`Query`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Query;

pub use self::{
    dataset::FetchDataset,
    metrics::ComputeMetrics,
    sales::{ApplyFilter, CountSales, ListSales},
};
