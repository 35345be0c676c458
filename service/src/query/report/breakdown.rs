//! [`Breakdown`] definition.

use std::convert::Infallible;

use common::{datetime::YearMonth, Money};
use itertools::Itertools as _;

use crate::{
    domain::{
        vehicle::{self, Brand},
        Sale,
    },
    read::{sale::list::TotalCount, Tally},
    Query, Service,
};

/// Maximal number of [`Brand`]s in the [`Output::top_brands`].
pub const TOP_BRANDS: usize = 8;

/// [`Query`] breaking [`Sale`]s down by months, [`vehicle::Kind`]s and
/// [`Brand`]s.
#[derive(Clone, Copy, Debug)]
pub struct Breakdown<'s> {
    /// [`Sale`]s to break down.
    pub sales: &'s [Sale],
}

/// Output of the [`Breakdown`] [`Query`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Output {
    /// [`Month`]s having [`Sale`]s, in chronological order.
    pub months: Vec<Month>,

    /// Number of [`Sale`]s of each [`vehicle::Kind`], in the order the
    /// [`vehicle::Kind`]s were first sold in.
    pub kinds: Vec<(vehicle::Kind, TotalCount)>,

    /// Up to [`TOP_BRANDS`] [`Brand`]s with the greatest revenue,
    /// descending.
    pub top_brands: Vec<(Brand, Money)>,
}

/// [`Sale`]s of a single month.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Month {
    /// [`YearMonth`] of this [`Month`].
    pub month: YearMonth,

    /// Number of [`Sale`]s in this [`Month`].
    pub sales: TotalCount,

    /// Sum of [`Sale`] prices in this [`Month`].
    pub revenue: Money,
}

impl<Src> Query<Breakdown<'_>> for Service<Src> {
    type Ok = Output;
    type Err = Infallible;

    async fn execute(
        &self,
        Breakdown { sales }: Breakdown<'_>,
    ) -> Result<Self::Ok, Self::Err> {
        let months = sales
            .iter()
            .into_grouping_map_by(|s| s.sold_at.year_month())
            .fold((0_usize, Money::ZERO), |(count, revenue), _, s| {
                (count + 1, revenue + s.price)
            })
            .into_iter()
            .sorted_unstable_by_key(|(month, _)| *month)
            .map(|(month, (count, revenue))| Month {
                month,
                sales: TotalCount::from(count),
                revenue,
            })
            .collect();

        let mut kinds = Tally::default();
        let mut brands = Tally::default();
        for sale in sales {
            kinds.count(sale.vehicle.kind);
            brands.add(&sale.vehicle.brand, sale.price);
        }

        Ok(Output {
            months,
            kinds: kinds
                .into_entries()
                .into_iter()
                .map(|(kind, count)| (kind, TotalCount::from(count)))
                .collect(),
            top_brands: brands
                .into_ranked()
                .into_iter()
                .take(TOP_BRANDS)
                .map(|(brand, revenue)| (brand.clone(), revenue))
                .collect(),
        })
    }
}

#[cfg(test)]
mod spec {
    use common::{datetime::YearMonth, DateTime, Money};

    use crate::{
        domain::{vehicle::Kind, Sale},
        fixture,
        read::{dataset::Size, sale::list::TotalCount},
        Config, Query as _, Service,
    };

    use super::{Breakdown, Output, TOP_BRANDS};

    async fn break_down(sales: &[Sale]) -> Output {
        let config = Config {
            size: Size::default(),
            since: DateTime::UNIX_EPOCH,
            ttl: std::time::Duration::from_secs(30),
            seed: Some(1),
        };
        Service::new(config, ())
            .execute(Breakdown { sales })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn breaks_down_by_month_chronologically() {
        // Days since the Unix epoch: 0 is 1970-01-01, 31 is 1970-02-01.
        let sales = [
            fixture::sale_of(Kind::Car, "Audi", 20_000, 2_000, 40),
            fixture::sale_of(Kind::Car, "Audi", 30_000, 3_000, 31),
            fixture::sale_of(Kind::Bike, "KTM", 5_000, 500, 30),
            fixture::sale_of(Kind::Bike, "KTM", 7_000, 700, 0),
        ];

        let out = break_down(&sales).await;

        let months = out
            .months
            .iter()
            .map(|m| (m.month.to_string(), usize::from(m.sales), m.revenue))
            .collect::<Vec<_>>();
        assert_eq!(
            months,
            [
                ("1970-01".to_owned(), 2, Money::whole(12_000)),
                ("1970-02".to_owned(), 2, Money::whole(50_000)),
            ],
        );
        assert_eq!(out.months[0].month, YearMonth { year: 1970, month: 1 });
    }

    #[tokio::test]
    async fn breaks_down_by_kind() {
        let sales = [
            fixture::sale_of(Kind::Bike, "KTM", 5_000, 500, 3),
            fixture::sale_of(Kind::Car, "Audi", 20_000, 2_000, 2),
            fixture::sale_of(Kind::Car, "Ford", 20_000, 2_000, 1),
        ];

        let out = break_down(&sales).await;

        assert_eq!(
            out.kinds,
            [
                (Kind::Bike, TotalCount::from(1)),
                (Kind::Car, TotalCount::from(2)),
            ],
        );
    }

    #[tokio::test]
    async fn ranks_top_brands_by_revenue() {
        let brands = [
            "Toyota", "Honda", "BMW", "Mercedes", "Audi", "Ford", "Nissan",
            "Volkswagen", "Yamaha", "KTM",
        ];
        let sales = brands
            .iter()
            .zip(1..)
            .map(|(b, i)| fixture::sale_of(Kind::Car, b, i * 1_000, 0, 1))
            .chain([fixture::sale_of(Kind::Car, "Toyota", 9_500, 0, 1)])
            .collect::<Vec<_>>();

        let out = break_down(&sales).await;

        let top = out
            .top_brands
            .iter()
            .map(|(b, r)| (b.to_string(), r.to_string()))
            .collect::<Vec<_>>();
        assert_eq!(top.len(), TOP_BRANDS);
        assert_eq!(top[0], ("Toyota".to_owned(), "10500".to_owned()));
        assert_eq!(top[1], ("KTM".to_owned(), "10000".to_owned()));
        assert_eq!(top[2], ("Yamaha".to_owned(), "9000".to_owned()));
        assert!(!top.iter().any(|(b, _)| b == "Honda"));
    }

    #[tokio::test]
    async fn breaks_down_nothing() {
        assert_eq!(break_down(&[]).await, Output::default());
    }
}
