//! [`Sale`] definitions.

use std::sync::Arc;

#[cfg(doc)]
use common::DateTime;
use common::{define_kind, unit, DateTimeOf, Money, Percent};
use derive_more::{AsRef, Display, From, FromStr, Into};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Vehicle;

/// Sale of a [`Vehicle`] to a [`Customer`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sale {
    /// ID of this [`Sale`].
    pub id: Id,

    /// [`Vehicle`] sold in this [`Sale`].
    ///
    /// Shared with other [`Sale`]s of the same [`Vehicle`].
    pub vehicle: Arc<Vehicle>,

    /// [`DateTime`] when this [`Sale`] happened.
    pub sold_at: CreationDateTime,

    /// Price the [`Vehicle`] was actually sold for, after the `discount`.
    pub price: Money,

    /// [`Salesperson`] who made this [`Sale`].
    pub salesperson: Salesperson,

    /// [`Customer`] who bought the [`Vehicle`].
    pub customer: Customer,

    /// [`Region`] this [`Sale`] happened in.
    pub region: Region,

    /// [`PaymentMethod`] the [`Customer`] paid with.
    pub payment_method: PaymentMethod,

    /// Discount off the [`Vehicle`] base price.
    pub discount: Percent,

    /// Profit made on this [`Sale`].
    pub profit: Money,
}

/// ID of a [`Sale`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`] out of the provided random source.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(uuid::Builder::from_random_bytes(rng.gen()).into_uuid())
    }
}

/// [`DateTime`] when a [`Sale`] happened.
pub type CreationDateTime = DateTimeOf<(Sale, unit::Creation)>;

/// Employee who made a [`Sale`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Salesperson {
    /// ID of this [`Salesperson`].
    pub id: SalespersonId,

    /// [`PersonName`] of this [`Salesperson`].
    pub name: PersonName,
}

/// ID of a [`Salesperson`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct SalespersonId(Uuid);

impl SalespersonId {
    /// Creates a new random [`SalespersonId`] out of the provided random
    /// source.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(uuid::Builder::from_random_bytes(rng.gen()).into_uuid())
    }
}

/// Buyer of a [`Vehicle`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Customer {
    /// [`PersonName`] of this [`Customer`].
    pub name: PersonName,

    /// [`Email`] of this [`Customer`].
    pub email: Email,
}

/// Full name of a person (e.g. `Jane Smith`).
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str, String)]
pub struct PersonName(String);

impl PersonName {
    /// Creates a new [`PersonName`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`PersonName`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`PersonName`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for PersonName {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `PersonName`")
    }
}

/// Email address of a [`Customer`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str, String)]
pub struct Email(String);

impl Email {
    /// Creates a new [`Email`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `address` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Creates a new [`Email`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Email`].
    ///
    /// Only the overall `local@domain` shape is checked.
    fn check(address: impl AsRef<str>) -> bool {
        let address = address.as_ref();
        let Some((local, domain)) = address.split_once('@') else {
            return false;
        };
        !local.is_empty()
            && domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
            && !address.chars().any(char::is_whitespace)
            && address.len() <= 254
    }
}

impl FromStr for Email {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Email`")
    }
}

/// Sales region.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[strum(ascii_case_insensitive)]
pub enum Region {
    /// North America.
    #[strum(serialize = "North America")]
    NorthAmerica,

    /// Europe.
    #[strum(serialize = "Europe")]
    Europe,

    /// Asia.
    #[strum(serialize = "Asia")]
    Asia,

    /// South America.
    #[strum(serialize = "South America")]
    SouthAmerica,

    /// Australia.
    #[strum(serialize = "Australia")]
    Australia,

    /// Africa.
    #[strum(serialize = "Africa")]
    Africa,
}

impl Region {
    /// Returns the human-readable name of this [`Region`].
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}

define_kind! {
    #[doc = "Method a [`Customer`] paid for a [`Sale`] with."]
    enum PaymentMethod {
        #[doc = "Paid in full upfront."]
        Cash = 1,

        #[doc = "Paid with a loan."]
        Finance = 2,

        #[doc = "Leased instead of bought."]
        Lease = 3,
    }
}
