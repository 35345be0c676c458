//! [`Synthetic`] [`Source`] definition.

use std::{sync::Arc, time::Duration};

use common::{
    operations::{By, Select},
    DateTime, Money, Percent,
};
use rand::{rngs::StdRng, Rng, SeedableRng as _};
use rust_decimal::Decimal;
use strum::VariantArray as _;
use tokio::sync::Mutex;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        sale::{
            self, Customer, Email, PaymentMethod, PersonName, Region,
            Salesperson,
        },
        vehicle::{
            self, Brand, Color, EngineCapacity, Fuel, Kind, Model,
            Transmission, Year,
        },
        Sale, Vehicle,
    },
    infra::{clock, Clock},
    read::dataset::{Dataset, Size, Transient},
};

use super::{catalog, catalog::Catalog, Error, Source};

/// [`Source`] generating random [`Dataset`]s.
///
/// [`Sale`]s happen uniformly between the configured start of the generation
/// window and the current moment of the [`Clock`].
#[derive(Debug)]
pub struct Synthetic<R = StdRng, C = clock::System> {
    /// Random source of this [`Synthetic`] generator.
    rng: Mutex<R>,

    /// [`Clock`] bounding the generation window.
    clock: C,

    /// Start of the generation window.
    since: DateTime,
}

impl<R, C> Synthetic<R, C> {
    /// Creates a new [`Synthetic`] generator drawing from the provided
    /// random source.
    #[must_use]
    pub fn new(rng: R, clock: C, since: DateTime) -> Self {
        Self {
            rng: Mutex::new(rng),
            clock,
            since,
        }
    }
}

impl<C> Synthetic<StdRng, C> {
    /// Creates a new [`Synthetic`] generator producing the same
    /// [`Dataset`]s for the same `seed` and [`Clock`] readings.
    #[must_use]
    pub fn from_seed(seed: u64, clock: C, since: DateTime) -> Self {
        Self::new(StdRng::seed_from_u64(seed), clock, since)
    }

    /// Creates a new [`Synthetic`] generator seeded by the operating system.
    #[must_use]
    pub fn from_entropy(clock: C, since: DateTime) -> Self {
        Self::new(StdRng::from_entropy(), clock, since)
    }
}

impl<R, C> Synthetic<R, C>
where
    R: Rng,
    C: Clock,
{
    /// Generates a new [`Dataset`] of the provided [`Size`].
    async fn generate(&self, size: Size) -> Result<Dataset, Traced<Error>> {
        let now = self.clock.now();
        let window = now
            .duration_since(self.since)
            .ok_or(Error::WindowInFuture)
            .map_err(tracerr::wrap!())?;

        let mut rng = self.rng.lock().await;
        let rng = &mut *rng;

        let vehicles = (0..size.vehicles())
            .map(|_| Arc::new(random_vehicle(rng)))
            .collect::<Vec<_>>();
        let mut sales = (0..size.sales())
            .map(|_| random_sale(rng, &vehicles, self.since, window))
            .collect::<Vec<_>>();
        sales.sort_by(|a, b| b.sold_at.cmp(&a.sold_at));

        log::debug!(
            "generated {} vehicles and {} sales since `{}`",
            vehicles.len(),
            sales.len(),
            self.since.to_rfc3339(),
        );

        Ok(Dataset::new(vehicles, sales))
    }
}

impl<R, C> Source<Select<By<Dataset, Size>>> for Synthetic<R, C>
where
    R: Rng,
    C: Clock,
{
    type Ok = Dataset;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Dataset, Size>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.generate(by.into_inner()).await
    }
}

impl<R, C> Source<Select<By<Dataset, Transient<Size>>>> for Synthetic<R, C>
where
    R: Rng,
    C: Clock,
{
    type Ok = Dataset;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Dataset, Transient<Size>>>,
    ) -> Result<Self::Ok, Self::Err> {
        let Transient(size) = by.into_inner();
        self.generate(size).await
    }
}

/// Picks a random item out of the provided non-empty `items`.
fn pick<'i, T, R: Rng + ?Sized>(rng: &mut R, items: &'i [T]) -> &'i T {
    &items[rng.gen_range(0..items.len())]
}

/// Generates a random [`Vehicle`].
fn random_vehicle<R: Rng + ?Sized>(rng: &mut R) -> Vehicle {
    let kind = *pick(rng, Kind::VARIANTS);
    let catalog = Catalog::of(kind);

    let brand = *pick(rng, catalog.brands);
    let model = *pick(rng, catalog.models);
    #[expect(unsafe_code, reason = "catalog entries are valid")]
    let (brand, model) = unsafe {
        (
            Brand::new_unchecked(brand),
            Model::new_unchecked(format!("{brand} {model}")),
        )
    };

    Vehicle {
        id: vehicle::Id::random(rng),
        brand,
        model,
        kind,
        price: Money::whole(rng.gen_range(catalog.price.clone())),
        year: Year::from(rng.gen_range(catalog::YEARS)),
        color: *pick(rng, Color::VARIANTS),
        fuel: *pick(rng, Fuel::VARIANTS),
        transmission: match kind {
            Kind::Car => Some(*pick(rng, Transmission::VARIANTS)),
            Kind::Bike => None,
        },
        engine_capacity: EngineCapacity::from(
            rng.gen_range(catalog.engine_capacity.clone()),
        ),
    }
}

/// Generates a random [`Sale`] of one of the provided [`Vehicle`]s, happened
/// within the `window` after the `since` moment.
fn random_sale<R: Rng + ?Sized>(
    rng: &mut R,
    vehicles: &[Arc<Vehicle>],
    since: DateTime,
    window: Duration,
) -> Sale {
    let vehicle = Arc::clone(pick(rng, vehicles));

    let window = u64::try_from(window.as_micros()).unwrap_or(u64::MAX);
    let sold_at = since + Duration::from_micros(rng.gen_range(0..=window));

    #[expect(unsafe_code, reason = "`MAX_DISCOUNT` is a valid percentage")]
    let discount = unsafe {
        Percent::new_unchecked(Decimal::from(
            rng.gen_range(0..=catalog::MAX_DISCOUNT),
        ))
    };
    let price = vehicle.price * (Decimal::ONE - discount.fraction());
    let profit =
        price * Decimal::new(rng.gen_range(catalog::MARGIN_CENTS), 2);

    let salesperson = Salesperson {
        id: sale::SalespersonId::random(rng),
        name: random_name(rng).0,
    };
    let (name, first, last) = random_name(rng);
    #[expect(unsafe_code, reason = "catalog names form valid addresses")]
    let email = unsafe {
        Email::new_unchecked(format!(
            "{}.{}@{}",
            first.to_lowercase(),
            last.to_lowercase(),
            catalog::EMAIL_DOMAIN,
        ))
    };

    Sale {
        id: sale::Id::random(rng),
        vehicle,
        sold_at: sold_at.coerce(),
        price,
        salesperson,
        customer: Customer { name, email },
        region: *pick(rng, Region::VARIANTS),
        payment_method: *pick(rng, PaymentMethod::VARIANTS),
        discount,
        profit,
    }
}

/// Generates a random [`PersonName`], returning the first and last names it
/// consists of along with it.
fn random_name<R: Rng + ?Sized>(
    rng: &mut R,
) -> (PersonName, &'static str, &'static str) {
    let first = *pick(rng, catalog::FIRST_NAMES);
    let last = *pick(rng, catalog::LAST_NAMES);
    #[expect(unsafe_code, reason = "catalog names are valid")]
    let name = unsafe { PersonName::new_unchecked(format!("{first} {last}")) };
    (name, first, last)
}
