//! Hand-made [`Sale`]s for tests.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use common::{DateTime, Money, Percent};
use uuid::Uuid;

use crate::domain::{
    sale::{
        self, Customer, Email, PaymentMethod, PersonName, Region, Salesperson,
    },
    vehicle::{self, Brand, Color, EngineCapacity, Fuel, Kind, Model, Year},
    Sale, Vehicle,
};

/// Returns a new unique [`Uuid`].
fn next_uuid() -> Uuid {
    static COUNTER: AtomicU64 = AtomicU64::new(1);

    Uuid::from_u128(u128::from(COUNTER.fetch_add(1, Ordering::Relaxed)))
}

/// Creates a new [`Vehicle`] of the provided `kind`, `brand` and `model`
/// template, priced at `price`.
pub(crate) fn vehicle(
    kind: Kind,
    brand: &str,
    model: &str,
    price: u32,
) -> Vehicle {
    let brand = Brand::new(brand).unwrap();
    Vehicle {
        id: vehicle::Id::from(next_uuid()),
        model: Model::of(&brand, model).unwrap(),
        brand,
        kind,
        price: Money::whole(price),
        year: Year::from(2022),
        color: Color::Silver,
        fuel: Fuel::Gasoline,
        transmission: None,
        engine_capacity: EngineCapacity::from(1500),
    }
}

/// Creates a new [`Sale`] of the provided [`Vehicle`] for its full price,
/// with `profit` made, happened `days` after the Unix epoch.
pub(crate) fn sale(vehicle: &Arc<Vehicle>, profit: u32, days: i64) -> Sale {
    Sale {
        id: sale::Id::from(next_uuid()),
        vehicle: Arc::clone(vehicle),
        sold_at: DateTime::from_unix_timestamp(days * 86_400)
            .unwrap()
            .coerce(),
        price: vehicle.price,
        salesperson: Salesperson {
            id: sale::SalespersonId::from(next_uuid()),
            name: PersonName::new("John Smith").unwrap(),
        },
        customer: Customer {
            name: PersonName::new("Jane Davis").unwrap(),
            email: Email::new("jane.davis@email.com").unwrap(),
        },
        region: Region::Europe,
        payment_method: PaymentMethod::Cash,
        discount: Percent::ZERO,
        profit: Money::whole(profit),
    }
}

/// Creates a new [`Sale`] of a new [`Vehicle`] of the provided `kind` and
/// `brand`, sold for `price` with `profit` made, happened `days` after the
/// Unix epoch.
pub(crate) fn sale_of(
    kind: Kind,
    brand: &str,
    price: u32,
    profit: u32,
    days: i64,
) -> Sale {
    sale(&Arc::new(vehicle(kind, brand, "Base", price)), profit, days)
}
