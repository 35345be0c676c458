//! [`Sale`]s list definitions.

use common::{define_pagination, Money};
use derive_more::{Display, From, Into};
use smart_default::SmartDefault;

use crate::domain::{sale, vehicle, Sale};

define_pagination!(Cursor, Node, Filter);

/// Node in a [`Connection`].
pub type Node = Sale;

/// Cursor pointing to a specific [`Sale`] in a list.
pub type Cursor = sale::Id;

/// Filter for [`Selector`].
///
/// All the present constraints must hold for a [`Sale`] to pass.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Filter {
    /// [`vehicle::Kind`] of the sold [`Vehicle`].
    ///
    /// [`None`] means any kind.
    ///
    /// [`Vehicle`]: crate::domain::Vehicle
    pub kind: Option<vehicle::Kind>,

    /// [`Needle`] to search for in the [`vehicle::Brand`].
    pub brand: Option<Needle>,

    /// [`Needle`] to search for in the [`sale::Region`] name.
    pub region: Option<Needle>,

    /// [`Period`] the [`Sale`] happened in.
    pub period: Period,

    /// [`PriceRange`] the [`Sale`] price falls into.
    pub price: Option<PriceRange>,
}

impl Filter {
    /// Indicates whether this [`Filter`] constrains nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.brand.is_none()
            && self.region.is_none()
            && self.period.start.is_none()
            && self.period.end.is_none()
            && self.price.is_none()
    }

    /// Checks whether the provided [`Sale`] passes this [`Filter`].
    #[must_use]
    pub fn matches(&self, sale: &Sale) -> bool {
        self.kind.map_or(true, |k| sale.vehicle.kind == k)
            && self
                .brand
                .as_ref()
                .map_or(true, |n| n.is_found_in(sale.vehicle.brand.as_ref()))
            && self
                .region
                .as_ref()
                .map_or(true, |n| n.is_found_in(sale.region.name()))
            && self.period.contains(sale.sold_at)
            && self.price.map_or(true, |r| r.contains(sale.price))
    }

    /// Applies this [`Filter`] to the provided [`Sale`]s, keeping their
    /// order.
    #[must_use]
    pub fn apply(&self, sales: &[Sale]) -> Vec<Sale> {
        sales.iter().filter(|s| self.matches(s)).cloned().collect()
    }
}

/// Case-insensitive substring to search for.
#[derive(Clone, Debug, Display, Eq, Hash, PartialEq)]
pub struct Needle(String);

impl Needle {
    /// Creates a new [`Needle`] out of the provided `input`.
    ///
    /// [`None`] is returned if the `input` is empty, meaning that nothing
    /// should be searched for.
    #[must_use]
    pub fn new(input: &str) -> Option<Self> {
        (!input.is_empty()).then(|| Self(input.to_lowercase()))
    }

    /// Checks whether this [`Needle`] occurs in the provided `haystack`,
    /// ignoring case.
    #[must_use]
    pub fn is_found_in(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.0)
    }
}

/// Inclusive period of time.
///
/// Constrains anything only when both of its bounds are present.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Period {
    /// Start of this [`Period`].
    pub start: Option<sale::CreationDateTime>,

    /// End of this [`Period`].
    pub end: Option<sale::CreationDateTime>,
}

impl Period {
    /// Checks whether the provided moment falls into this [`Period`].
    #[must_use]
    pub fn contains(&self, at: sale::CreationDateTime) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= at && at <= end,
            (None | Some(_), None) | (None, Some(_)) => true,
        }
    }
}

/// Inclusive range of [`Money`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, SmartDefault)]
pub struct PriceRange {
    /// Minimal price.
    #[default(Money::ZERO)]
    pub min: Money,

    /// Maximal price.
    #[default(Money::whole(100_000))]
    pub max: Money,
}

impl PriceRange {
    /// Checks whether the provided `price` falls into this [`PriceRange`].
    #[must_use]
    pub fn contains(&self, price: Money) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Total count of [`Sale`]s.
#[derive(
    Clone, Copy, Debug, Default, Display, Eq, From, Hash, Into, Ord, PartialEq,
    PartialOrd,
)]
pub struct TotalCount(usize);

#[cfg(test)]
mod spec {
    use common::{DateTime, Money};

    use crate::{
        domain::{sale::Region, vehicle::Kind, Sale},
        fixture,
    };

    use super::{Filter, Needle, Period, PriceRange};

    fn at(days: i64) -> crate::domain::sale::CreationDateTime {
        DateTime::from_unix_timestamp(days * 86_400).unwrap().coerce()
    }

    fn pool() -> Vec<Sale> {
        let mut sales = vec![
            fixture::sale_of(Kind::Car, "Toyota", 30_000, 3_000, 40),
            fixture::sale_of(Kind::Bike, "Yamaha", 8_000, 800, 30),
            fixture::sale_of(Kind::Car, "BMW", 60_000, 9_000, 20),
            fixture::sale_of(Kind::Bike, "BMW", 12_000, 1_200, 10),
            fixture::sale_of(Kind::Car, "Honda", 120_000, 9_000, 5),
        ];
        sales[1].region = Region::Asia;
        sales[3].region = Region::NorthAmerica;
        sales
    }

    fn brands(sales: &[Sale]) -> Vec<String> {
        sales.iter().map(|s| s.vehicle.brand.to_string()).collect()
    }

    #[test]
    fn default_is_identity() {
        let sales = pool();

        assert!(Filter::default().is_empty());
        assert_eq!(Filter::default().apply(&sales), sales);
    }

    #[test]
    fn is_idempotent() {
        let sales = pool();
        let filter = Filter {
            brand: Needle::new("m"),
            price: Some(PriceRange::default()),
            ..Filter::default()
        };

        let once = filter.apply(&sales);
        assert_eq!(filter.apply(&once), once);
    }

    #[test]
    fn filters_by_kind() {
        let sales = vec![
            fixture::sale_of(Kind::Car, "Audi", 20_000, 2_000, 2),
            fixture::sale_of(Kind::Bike, "KTM", 5_000, 500, 1),
        ];
        let filter = Filter {
            kind: Some(Kind::Car),
            ..Filter::default()
        };

        assert_eq!(filter.apply(&sales), vec![sales[0].clone()]);
    }

    #[test]
    fn searches_brand_and_region_case_insensitively() {
        let sales = pool();

        let filter = Filter {
            brand: Needle::new("bM"),
            ..Filter::default()
        };
        assert_eq!(brands(&filter.apply(&sales)), ["BMW", "BMW"]);

        let filter = Filter {
            region: Needle::new("AMERICA"),
            ..Filter::default()
        };
        assert_eq!(brands(&filter.apply(&sales)), ["BMW"]);

        let filter = Filter {
            brand: Needle::new("bmw"),
            kind: Some(Kind::Car),
            ..Filter::default()
        };
        assert_eq!(filter.apply(&sales).len(), 1);
    }

    #[test]
    fn empty_needle_is_no_constraint() {
        assert!(Needle::new("").is_none());
        assert!(Needle::new("a").unwrap().is_found_in("Yamaha"));
        assert!(!Needle::new("z").unwrap().is_found_in("Yamaha"));
    }

    #[test]
    fn keeps_only_prices_in_range() {
        let sales = pool();
        let range = PriceRange {
            min: Money::whole(8_000),
            max: Money::whole(30_000),
        };
        let filter = Filter {
            price: Some(range),
            ..Filter::default()
        };

        let filtered = filter.apply(&sales);
        assert_eq!(brands(&filtered), ["Toyota", "Yamaha", "BMW"]);
        assert!(filtered.iter().all(|s| range.contains(s.price)));
    }

    #[test]
    fn default_price_range_excludes_expensive_sales() {
        let filter = Filter {
            price: Some(PriceRange::default()),
            ..Filter::default()
        };

        assert_eq!(filter.apply(&pool()).len(), 4);
    }

    #[test]
    fn filters_by_inclusive_period() {
        let sales = pool();
        let filter = Filter {
            period: Period {
                start: Some(at(10)),
                end: Some(at(30)),
            },
            ..Filter::default()
        };

        assert_eq!(brands(&filter.apply(&sales)), ["Yamaha", "BMW", "BMW"]);
    }

    #[test]
    fn one_sided_period_constrains_nothing() {
        let sales = pool();

        for period in [
            Period {
                start: Some(at(25)),
                end: None,
            },
            Period {
                start: None,
                end: Some(at(25)),
            },
        ] {
            let filter = Filter {
                period,
                ..Filter::default()
            };
            assert_eq!(filter.apply(&sales).len(), sales.len());
        }
    }

    #[test]
    fn inverted_ranges_yield_nothing() {
        let sales = pool();

        let filter = Filter {
            period: Period {
                start: Some(at(30)),
                end: Some(at(10)),
            },
            ..Filter::default()
        };
        assert!(filter.apply(&sales).is_empty());

        let filter = Filter {
            price: Some(PriceRange {
                min: Money::whole(50_000),
                max: Money::whole(1_000),
            }),
            ..Filter::default()
        };
        assert!(filter.apply(&sales).is_empty());
    }
}
