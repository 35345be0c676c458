//! Infrastructure layer.

pub mod clock;
pub mod dataset;

pub use self::{
    clock::Clock,
    dataset::{Cached, Source, Synthetic},
};
