//! [`Dataset`] read model definitions.

use std::sync::Arc;

use derive_more::{Display, Error};

use crate::domain::{Sale, Vehicle};

/// Pool of generated [`Vehicle`]s and [`Sale`]s of them.
///
/// Read-only snapshot: cloning it only bumps reference counters.
#[derive(Clone, Debug)]
pub struct Dataset {
    /// All the [`Vehicle`]s of this [`Dataset`].
    pub vehicles: Arc<[Arc<Vehicle>]>,

    /// All the [`Sale`]s of this [`Dataset`], most recent first.
    pub sales: Arc<[Sale]>,
}

impl Dataset {
    /// Creates a new [`Dataset`] out of the provided [`Vehicle`]s and
    /// [`Sale`]s.
    #[must_use]
    pub fn new(vehicles: Vec<Arc<Vehicle>>, sales: Vec<Sale>) -> Self {
        Self {
            vehicles: vehicles.into(),
            sales: sales.into(),
        }
    }

    /// Indicates whether both this and the `other` [`Dataset`]s point to the
    /// same pool.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.vehicles, &other.vehicles)
            && Arc::ptr_eq(&self.sales, &other.sales)
    }
}

/// Size of a [`Dataset`] to generate.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Size {
    /// Number of [`Vehicle`]s to generate.
    vehicles: usize,

    /// Number of [`Sale`]s to generate.
    sales: usize,
}

impl Size {
    /// Creates a new [`Size`] out of the provided counts.
    ///
    /// # Errors
    ///
    /// If any of the counts is zero.
    pub fn new(vehicles: usize, sales: usize) -> Result<Self, InvalidSize> {
        if vehicles == 0 {
            return Err(InvalidSize::NoVehicles);
        }
        if sales == 0 {
            return Err(InvalidSize::NoSales);
        }
        Ok(Self { vehicles, sales })
    }

    /// Returns the number of [`Vehicle`]s to generate.
    #[must_use]
    pub const fn vehicles(&self) -> usize {
        self.vehicles
    }

    /// Returns the number of [`Sale`]s to generate.
    #[must_use]
    pub const fn sales(&self) -> usize {
        self.sales
    }
}

impl Default for Size {
    fn default() -> Self {
        Self {
            vehicles: 50,
            sales: 250,
        }
    }
}

/// Error of creating an invalid [`Size`].
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum InvalidSize {
    /// Zero [`Vehicle`]s requested.
    #[display("number of vehicles must be positive")]
    NoVehicles,

    /// Zero [`Sale`]s requested.
    #[display("number of sales must be positive")]
    NoSales,
}

/// Wrapper around a [`Dataset`] selector indicating that the selected
/// [`Dataset`] is used only once and must not be remembered.
#[derive(Clone, Copy, Debug)]
pub struct Transient<T>(pub T);
