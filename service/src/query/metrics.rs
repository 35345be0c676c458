//! [`ComputeMetrics`] [`Query`].

use std::convert::Infallible;

use crate::{domain::Sale, read::sale::Metrics, Query, Service};

/// [`Query`] summarizing [`Sale`]s into [`Metrics`].
#[derive(Clone, Copy, Debug)]
pub struct ComputeMetrics<'s> {
    /// [`Sale`]s to summarize.
    pub sales: &'s [Sale],
}

impl<Src> Query<ComputeMetrics<'_>> for Service<Src> {
    type Ok = Metrics;
    type Err = Infallible;

    async fn execute(
        &self,
        ComputeMetrics { sales }: ComputeMetrics<'_>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(Metrics::summarize(sales, &mut *self.rng().lock().await))
    }
}
