//! Fixed values [`Synthetic`] datasets are drawn from.
//!
//! [`Synthetic`]: super::Synthetic

use std::ops::RangeInclusive;

use crate::domain::vehicle::Kind;

/// Values describing [`Vehicle`]s of a single [`Kind`].
///
/// [`Vehicle`]: crate::domain::Vehicle
#[derive(Clone, Debug)]
pub(super) struct Catalog {
    /// Brands producing [`Vehicle`]s of this [`Kind`].
    ///
    /// [`Vehicle`]: crate::domain::Vehicle
    pub(super) brands: &'static [&'static str],

    /// Model templates, qualified with a brand when drawn.
    pub(super) models: &'static [&'static str],

    /// Range of whole base prices.
    pub(super) price: RangeInclusive<u32>,

    /// Range of engine capacities in cubic centimeters.
    pub(super) engine_capacity: RangeInclusive<u16>,
}

impl Catalog {
    /// Returns the [`Catalog`] of the provided [`Kind`].
    pub(super) fn of(kind: Kind) -> &'static Self {
        match kind {
            Kind::Car => &CARS,
            Kind::Bike => &BIKES,
        }
    }
}

/// [`Catalog`] of [`Kind::Car`]s.
static CARS: Catalog = Catalog {
    brands: &[
        "Toyota",
        "Honda",
        "BMW",
        "Mercedes",
        "Audi",
        "Ford",
        "Nissan",
        "Volkswagen",
    ],
    models: &[
        "Sedan LX",
        "SUV Pro",
        "Hatchback GT",
        "Coupe Sport",
        "Wagon Deluxe",
    ],
    price: 15_000..=80_000,
    engine_capacity: 1_000..=4_000,
};

/// [`Catalog`] of [`Kind::Bike`]s.
static BIKES: Catalog = Catalog {
    brands: &[
        "Yamaha",
        "Honda",
        "Kawasaki",
        "Suzuki",
        "BMW",
        "Ducati",
        "Harley-Davidson",
        "KTM",
    ],
    models: &[
        "Street 250",
        "Cruiser 500",
        "Sport 750",
        "Adventure 1000",
        "Touring 1200",
    ],
    price: 3_000..=25_000,
    engine_capacity: 125..=1_000,
};

/// Range of model years.
pub(super) const YEARS: RangeInclusive<u16> = 2020..=2024;

/// Maximal discount in whole percents.
pub(super) const MAX_DISCOUNT: u8 = 15;

/// Range of profit margins in hundredths of a sale price.
pub(super) const MARGIN_CENTS: RangeInclusive<i64> = 5..=25;

/// First names of people.
pub(super) const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Mike", "Sarah", "David", "Lisa", "Chris", "Emma",
    "Robert", "Maria",
];

/// Last names of people.
pub(super) const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Brown", "Davis", "Miller", "Wilson", "Moore",
    "Taylor", "Anderson", "Thomas",
];

/// Domain of all the customer emails.
pub(super) const EMAIL_DOMAIN: &str = "email.com";

#[cfg(test)]
mod spec {
    use strum::VariantArray as _;

    use crate::domain::{
        sale::{Email, PersonName},
        vehicle::{Brand, Kind, Model},
    };

    use super::{Catalog, EMAIL_DOMAIN, FIRST_NAMES, LAST_NAMES};

    #[test]
    fn all_entries_are_valid() {
        for &kind in Kind::VARIANTS {
            let catalog = Catalog::of(kind);
            assert_eq!(catalog.brands.len(), 8);
            assert_eq!(catalog.models.len(), 5);

            for b in catalog.brands {
                let brand = Brand::new(*b).unwrap();
                for m in catalog.models {
                    assert!(Model::of(&brand, m).is_some(), "{b} {m}");
                }
            }
        }

        for first in FIRST_NAMES {
            for last in LAST_NAMES {
                assert!(PersonName::new(format!("{first} {last}")).is_some());
                assert!(Email::new(format!(
                    "{}.{}@{EMAIL_DOMAIN}",
                    first.to_lowercase(),
                    last.to_lowercase(),
                ))
                .is_some());
            }
        }
    }
}
