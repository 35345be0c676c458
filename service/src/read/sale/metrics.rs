//! [`Metrics`] definition.

use common::Money;
use derive_more::{Display, Into};
use rand::Rng;
use rust_decimal::Decimal;

use crate::{
    domain::{
        vehicle::{Brand, Model},
        Sale,
    },
    read::tally::Tally,
};

use super::list::TotalCount;

/// Summary of a list of [`Sale`]s.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Metrics {
    /// Number of the [`Sale`]s.
    pub total_sales: TotalCount,

    /// Sum of all the [`Sale`] prices.
    pub total_revenue: Money,

    /// Mean [`Sale`] price.
    pub average_sale_price: Money,

    /// Sum of all the [`Sale`] profits.
    pub total_profit: Money,

    /// [`ConversionRate`] of the [`Sale`]s.
    pub conversion_rate: ConversionRate,

    /// [`Brand`] sold most often.
    ///
    /// [`None`] if there are no [`Sale`]s.
    pub top_selling_brand: Option<Brand>,

    /// [`Model`] sold most often.
    ///
    /// [`None`] if there are no [`Sale`]s.
    pub top_selling_model: Option<Model>,
}

impl Metrics {
    /// Summarizes the provided [`Sale`]s in a single pass.
    ///
    /// The [`ConversionRate`] is not derivable from [`Sale`]s, so a
    /// [`ConversionRate::placeholder()`] is drawn from the `rng` instead,
    /// unless there are no [`Sale`]s at all.
    ///
    /// Ties for the top [`Brand`] and [`Model`] are resolved in favor of the
    /// one sold first in the list.
    #[must_use]
    pub fn summarize<R: Rng + ?Sized>(sales: &[Sale], rng: &mut R) -> Self {
        if sales.is_empty() {
            return Self::default();
        }

        let mut revenue = Money::ZERO;
        let mut profit = Money::ZERO;
        let mut brands = Tally::default();
        let mut models = Tally::default();
        for sale in sales {
            revenue = revenue + sale.price;
            profit = profit + sale.profit;
            brands.count(&sale.vehicle.brand);
            models.count(&sale.vehicle.model);
        }

        Self {
            total_sales: TotalCount::from(sales.len()),
            total_revenue: revenue,
            average_sale_price: revenue / Decimal::from(sales.len()),
            total_profit: profit,
            conversion_rate: ConversionRate::placeholder(rng),
            top_selling_brand: brands.max().map(|(&b, _)| b.clone()),
            top_selling_model: models.max().map(|(&m, _)| m.clone()),
        }
    }
}

/// Share of visitors turned into buyers, on the `0..=1` scale.
#[derive(
    Clone, Copy, Debug, Default, Display, Eq, Hash, Into, Ord, PartialEq,
    PartialOrd,
)]
pub struct ConversionRate(Decimal);

impl ConversionRate {
    /// Zero [`ConversionRate`].
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Draws a plausible [`ConversionRate`] from `0.15` to `0.35` with two
    /// decimal places.
    pub fn placeholder<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(Decimal::new(rng.gen_range(15..=35), 2))
    }

    /// Returns the value of this [`ConversionRate`].
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}
