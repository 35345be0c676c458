//! [`Clock`] implementations.

use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use common::DateTime;

/// Source of the current [`DateTime`].
pub trait Clock {
    /// Returns the current [`DateTime`].
    fn now(&self) -> DateTime;
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime {
        (**self).now()
    }
}

/// [`Clock`] of the operating system.
#[derive(Clone, Copy, Debug, Default)]
pub struct System;

impl Clock for System {
    fn now(&self) -> DateTime {
        DateTime::now()
    }
}

/// [`Clock`] standing still until [`Manual::advance()`]d.
///
/// Clones share the same time.
#[derive(Clone, Debug)]
pub struct Manual {
    /// [`DateTime`] this [`Manual`] clock was started at.
    start: DateTime,

    /// Microseconds elapsed since the `start`.
    elapsed: Arc<AtomicU64>,
}

impl Manual {
    /// Creates a new [`Manual`] clock showing the provided [`DateTime`].
    #[must_use]
    pub fn new(start: DateTime) -> Self {
        Self {
            start,
            elapsed: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Moves this [`Manual`] clock forward by the provided [`Duration`].
    pub fn advance(&self, by: Duration) {
        let micros = u64::try_from(by.as_micros()).unwrap_or(u64::MAX);
        _ = self.elapsed.fetch_add(micros, Ordering::SeqCst);
    }
}

impl Clock for Manual {
    fn now(&self) -> DateTime {
        self.start
            + Duration::from_micros(self.elapsed.load(Ordering::SeqCst))
    }
}
