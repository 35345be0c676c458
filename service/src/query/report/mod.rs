//! Reports [`Query`]s.
//!
//! [`Query`]: crate::Query

pub mod breakdown;

pub use self::breakdown::Breakdown;
