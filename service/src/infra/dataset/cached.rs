//! [`Cached`] [`Source`] definition.

use std::time::Duration;

use common::{
    operations::{By, Select},
    DateTime,
};
use tokio::sync::Mutex;
use tracerr::Traced;
use tracing as log;

use crate::{
    infra::{clock, Clock},
    read::dataset::{Dataset, Size, Transient},
};

use super::{Error, Source};

/// [`Source`] remembering the last [`Dataset`] of the wrapped [`Source`] for
/// a limited time.
///
/// Only non-[`Transient`] selections store a [`Dataset`], while both kinds
/// of selections reuse a fresh one.
#[derive(Debug)]
pub struct Cached<S, C = clock::System> {
    /// Wrapped [`Source`].
    inner: S,

    /// [`Clock`] measuring the age of the remembered [`Dataset`].
    clock: C,

    /// Age after which the remembered [`Dataset`] is considered stale.
    ttl: Duration,

    /// Remembered [`Dataset`].
    ///
    /// Locked for the whole selection, so concurrent selections never
    /// regenerate the same [`Dataset`] twice.
    entry: Mutex<Option<Entry>>,
}

/// [`Dataset`] remembered by a [`Cached`] [`Source`].
#[derive(Debug)]
struct Entry {
    /// [`Size`] the [`Dataset`] was generated for.
    size: Size,

    /// Remembered [`Dataset`].
    dataset: Dataset,

    /// [`DateTime`] when the [`Dataset`] was generated.
    generated_at: DateTime,
}

impl<S, C> Cached<S, C> {
    /// Wraps the provided [`Source`] into a new empty [`Cached`] one.
    #[must_use]
    pub fn new(inner: S, clock: C, ttl: Duration) -> Self {
        Self {
            inner,
            clock,
            ttl,
            entry: Mutex::new(None),
        }
    }

    /// Returns the wrapped [`Source`].
    #[must_use]
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S, C: Clock> Cached<S, C> {
    /// Returns the remembered [`Dataset`] if it's of the provided [`Size`]
    /// and isn't stale yet.
    fn fresh(&self, entry: Option<&Entry>, size: Size) -> Option<Dataset> {
        let entry = entry.filter(|e| e.size == size)?;
        let age = self
            .clock
            .now()
            .duration_since(entry.generated_at)
            .unwrap_or_default();
        (age < self.ttl).then(|| entry.dataset.clone())
    }
}

impl<S, C> Source<Select<By<Dataset, Size>>> for Cached<S, C>
where
    S: Source<Select<By<Dataset, Size>>, Ok = Dataset, Err = Traced<Error>>,
    C: Clock,
{
    type Ok = Dataset;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Dataset, Size>>,
    ) -> Result<Self::Ok, Self::Err> {
        let size = by.into_inner();

        let mut entry = self.entry.lock().await;
        if let Some(dataset) = self.fresh(entry.as_ref(), size) {
            log::debug!("`Dataset` cache hit");
            return Ok(dataset);
        }

        log::debug!("`Dataset` cache miss, regenerating");
        let dataset = self
            .inner
            .execute(Select(By::new(size)))
            .await
            .map_err(tracerr::wrap!())?;
        *entry = Some(Entry {
            size,
            dataset: dataset.clone(),
            generated_at: self.clock.now(),
        });

        Ok(dataset)
    }
}

impl<S, C> Source<Select<By<Dataset, Transient<Size>>>> for Cached<S, C>
where
    S: Source<
        Select<By<Dataset, Transient<Size>>>,
        Ok = Dataset,
        Err = Traced<Error>,
    >,
    C: Clock,
{
    type Ok = Dataset;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Dataset, Transient<Size>>>,
    ) -> Result<Self::Ok, Self::Err> {
        let Transient(size) = by.into_inner();

        let fresh = self.fresh(self.entry.lock().await.as_ref(), size);
        if let Some(dataset) = fresh {
            log::debug!("`Dataset` cache hit");
            return Ok(dataset);
        }

        log::debug!("`Dataset` cache miss, generating transient one");
        self.inner
            .execute(Select(By::new(Transient(size))))
            .await
            .map_err(tracerr::wrap!())
    }
}
