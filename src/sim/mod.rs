//! The mutable entity model: stat formulas, effect kinds, and the individual
//! creature built on top of the static registries.

pub mod effects;
pub mod mon;
pub mod stats;

pub use mon::{Mon, MonConfig};
