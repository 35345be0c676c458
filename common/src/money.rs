//! [`Money`]-related definitions.

use std::{fmt, iter, ops, str::FromStr};

use derive_more::{Add, From, Into};
use rust_decimal::{Decimal, RoundingStrategy};

/// Amount of money in the dashboard's reporting currency.
#[derive(
    Add,
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub struct Money(Decimal);

impl Money {
    /// Zero amount of [`Money`].
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new [`Money`] out of the provided whole `amount`.
    #[must_use]
    pub fn whole(amount: u32) -> Self {
        Self(Decimal::from(amount))
    }

    /// Returns the exact amount of this [`Money`].
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns this [`Money`] rounded to whole cents.
    #[must_use]
    pub fn to_cents(self) -> Self {
        Self(self.0.round_dp_with_strategy(
            2,
            RoundingStrategy::MidpointAwayFromZero,
        ))
    }
}

impl ops::Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl ops::Div<Decimal> for Money {
    type Output = Self;

    fn div(self, rhs: Decimal) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.to_cents().0;
        if cents.is_integer() {
            write!(f, "{}", cents.trunc())
        } else {
            write!(f, "{cents:.2}")
        }
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s).map_err(|_| "invalid amount")?;
        if amount.is_sign_negative() {
            return Err("negative amount");
        }
        Ok(Self(amount))
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::Money;

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn from_str() {
        assert_eq!(
            Money::from_str("123.45").unwrap(),
            Money::from(decimal("123.45")),
        );
        assert_eq!(Money::from_str("100000").unwrap(), Money::whole(100_000));

        assert!(Money::from_str("123.45USD").is_err());
        assert!(Money::from_str("-1").is_err());
        assert!(Money::from_str("").is_err());

        assert!(Money::from_str("123.00").is_ok());
        assert!(Money::from_str("123.0").is_ok());
        assert!(Money::from_str("0").is_ok());
    }

    #[test]
    fn to_string() {
        assert_eq!(Money::from(decimal("123.45")).to_string(), "123.45");
        assert_eq!(Money::from(decimal("123.40")).to_string(), "123.40");
        assert_eq!(Money::from(decimal("123.00")).to_string(), "123");
        assert_eq!(Money::from(decimal("123.0")).to_string(), "123");
        assert_eq!(Money::from(decimal("123")).to_string(), "123");
        assert_eq!(Money::from(decimal("12.345")).to_string(), "12.35");
        assert_eq!(Money::from(decimal("12.3449")).to_string(), "12.34");
    }

    #[test]
    fn arithmetic_is_exact() {
        let price = Money::whole(15_001) * (Decimal::ONE - decimal("0.13"));
        assert_eq!(price, Money::from(decimal("13050.87")));

        let total: Money = [10_000, 20_000, 30_000]
            .into_iter()
            .map(Money::whole)
            .sum();
        assert_eq!(total, Money::whole(60_000));
        assert_eq!(total / Decimal::from(3), Money::whole(20_000));

        assert_eq!(Money::ZERO + Money::whole(5), Money::whole(5));
        assert_eq!(std::iter::empty::<Money>().sum::<Money>(), Money::ZERO);
    }
}
