//! [`Vehicle`] definitions.

use common::{define_kind, Money};
use derive_more::{AsRef, Display, From, FromStr, Into};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Vehicle offered for sale.
///
/// Immutable once generated: [`Sale`]s share it instead of owning it.
///
/// [`Sale`]: crate::domain::Sale
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Vehicle {
    /// ID of this [`Vehicle`].
    pub id: Id,

    /// [`Brand`] of this [`Vehicle`].
    pub brand: Brand,

    /// [`Model`] of this [`Vehicle`], qualified with its [`Brand`].
    pub model: Model,

    /// [`Kind`] of this [`Vehicle`].
    pub kind: Kind,

    /// Base price of this [`Vehicle`], before any discount.
    pub price: Money,

    /// Model [`Year`] of this [`Vehicle`].
    pub year: Year,

    /// [`Color`] of this [`Vehicle`].
    pub color: Color,

    /// [`Fuel`] this [`Vehicle`] runs on.
    pub fuel: Fuel,

    /// [`Transmission`] of this [`Vehicle`].
    ///
    /// Always [`None`] for a [`Kind::Bike`].
    pub transmission: Option<Transmission>,

    /// [`EngineCapacity`] of this [`Vehicle`].
    pub engine_capacity: EngineCapacity,
}

/// ID of a [`Vehicle`].
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

/// Brand of a [`Vehicle`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str, String)]
pub struct Brand(String);

impl Brand {
    /// Creates a new [`Brand`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `brand` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(brand: impl Into<String>) -> Self {
        Self(brand.into())
    }

    /// Creates a new [`Brand`] if the given `brand` is valid.
    #[must_use]
    pub fn new(brand: impl Into<String>) -> Option<Self> {
        let brand = brand.into();
        Self::check(&brand).then_some(Self(brand))
    }

    /// Checks whether the given `brand` is a valid [`Brand`].
    fn check(brand: impl AsRef<str>) -> bool {
        let brand = brand.as_ref();
        brand.trim() == brand && !brand.is_empty() && brand.len() <= 128
    }
}

impl FromStr for Brand {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Brand`")
    }
}

/// Model of a [`Vehicle`], qualified with its [`Brand`] (e.g. `Honda Sport
/// 750`).
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str, String)]
pub struct Model(String);

impl Model {
    /// Creates a new [`Model`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `model` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(model: impl Into<String>) -> Self {
        Self(model.into())
    }

    /// Creates a new [`Model`] of the provided [`Brand`] out of its
    /// unqualified `name`.
    ///
    /// [`None`] is returned if the `name` is empty or is not trimmed.
    #[must_use]
    pub fn of(brand: &Brand, name: &str) -> Option<Self> {
        (name.trim() == name && !name.is_empty())
            .then(|| Self(format!("{brand} {name}")))
    }

    /// Creates a new [`Model`] if the given `model` is valid.
    #[must_use]
    pub fn new(model: impl Into<String>) -> Option<Self> {
        let model = model.into();
        (model.trim() == model && !model.is_empty() && model.len() <= 256)
            .then_some(Self(model))
    }
}

impl FromStr for Model {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Model`")
    }
}

/// Model year of a [`Vehicle`].
#[derive(
    Clone, Copy, Debug, Display, Eq, From, Hash, Into, Ord, PartialEq,
    PartialOrd,
)]
pub struct Year(u16);

/// Engine capacity of a [`Vehicle`] in cubic centimeters.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, Hash, Into, Ord, PartialEq,
    PartialOrd,
)]
#[display("{_0}cc")]
pub struct EngineCapacity(u16);

define_kind! {
    #[doc = "Kind of a [`Vehicle`]."]
    enum Kind {
        #[doc = "Four-wheeled car."]
        Car = 1,

        #[doc = "Motorbike."]
        Bike = 2,
    }
}

define_kind! {
    #[doc = "Body color of a [`Vehicle`]."]
    enum Color {
        #[doc = "Red."]
        Red = 1,

        #[doc = "Blue."]
        Blue = 2,

        #[doc = "Black."]
        Black = 3,

        #[doc = "White."]
        White = 4,

        #[doc = "Silver."]
        Silver = 5,

        #[doc = "Gray."]
        Gray = 6,

        #[doc = "Green."]
        Green = 7,

        #[doc = "Yellow."]
        Yellow = 8,
    }
}

define_kind! {
    #[doc = "Fuel a [`Vehicle`] runs on."]
    enum Fuel {
        #[doc = "Gasoline."]
        Gasoline = 1,

        #[doc = "Diesel."]
        Diesel = 2,

        #[doc = "Electricity."]
        Electric = 3,

        #[doc = "Combination of gasoline and electricity."]
        Hybrid = 4,
    }
}

define_kind! {
    #[doc = "Transmission of a [`Kind::Car`]."]
    enum Transmission {
        #[doc = "Manual gearbox."]
        Manual = 1,

        #[doc = "Automatic gearbox."]
        Automatic = 2,
    }
}
