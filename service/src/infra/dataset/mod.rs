//! [`Source`]s of [`Dataset`]s.
//!
//! [`Dataset`]: crate::read::Dataset

pub mod cached;
mod catalog;
pub mod synthetic;

use derive_more::{Display, Error as StdError};

pub use self::{cached::Cached, synthetic::Synthetic};

/// [`Dataset`] source operation.
///
/// [`Dataset`]: crate::read::Dataset
pub use common::Handler as Source;

/// [`Source`] error.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, StdError)]
pub enum Error {
    /// Generation window starts later than the current moment.
    #[display("generation window starts in the future")]
    WindowInFuture,
}
