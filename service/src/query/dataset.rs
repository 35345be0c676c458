//! [`FetchDataset`] [`Query`].

use std::sync::Arc;

use common::operations::{By, Select};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{Sale, Vehicle},
    infra::{dataset, Source},
    read::{
        dataset::{Dataset, Size, Transient},
        sale::{list::Filter, Metrics},
    },
    Query, Service,
};

/// [`Query`] fetching the current [`Dataset`], optionally narrowed with a
/// [`Filter`], along with [`Metrics`] of its [`Sale`]s.
///
/// Only unfiltered fetches make the [`Dataset`] remembered by a caching
/// [`Source`].
#[derive(Clone, Debug, Default)]
pub struct FetchDataset {
    /// [`Filter`] to narrow the [`Sale`]s with.
    ///
    /// [`None`] means all the [`Sale`]s.
    pub filter: Option<Filter>,
}

/// Output of the [`FetchDataset`] [`Query`].
#[derive(Clone, Debug)]
pub struct Output {
    /// All the [`Vehicle`]s of the [`Dataset`], never filtered.
    pub vehicles: Arc<[Arc<Vehicle>]>,

    /// [`Sale`]s passed the [`Filter`], most recent first.
    pub sales: Arc<[Sale]>,

    /// [`Metrics`] of the `sales`.
    pub metrics: Metrics,
}

impl<Src> Query<FetchDataset> for Service<Src>
where
    Src: Source<
            Select<By<Dataset, Size>>,
            Ok = Dataset,
            Err = Traced<dataset::Error>,
        > + Source<
            Select<By<Dataset, Transient<Size>>>,
            Ok = Dataset,
            Err = Traced<dataset::Error>,
        >,
{
    type Ok = Output;
    type Err = Traced<dataset::Error>;

    async fn execute(
        &self,
        FetchDataset { filter }: FetchDataset,
    ) -> Result<Self::Ok, Self::Err> {
        let size = self.config().size;

        let (vehicles, sales) = if let Some(filter) = filter {
            let Dataset { vehicles, sales } = self
                .source()
                .execute(Select(By::<Dataset, _>::new(Transient(size))))
                .await
                .map_err(tracerr::wrap!())?;
            (vehicles, filter.apply(&sales).into())
        } else {
            let Dataset { vehicles, sales } = self
                .source()
                .execute(Select(By::<Dataset, _>::new(size)))
                .await
                .map_err(tracerr::wrap!())?;
            (vehicles, sales)
        };

        let metrics = Metrics::summarize(&sales, &mut *self.rng().lock().await);
        log::trace!("fetched {} of {} sales", sales.len(), size.sales());

        Ok(Output {
            vehicles,
            sales,
            metrics,
        })
    }
}
