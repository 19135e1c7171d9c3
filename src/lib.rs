//! Species/variant registry and individual-entity model for a creature simulator.
//!
//! The static side (species, forms, type chart, generation-scoped dexes) is loaded
//! once from a JSON corpus and read-only afterwards; the mutable side is [`sim::Mon`],
//! which derives its battle stats on demand and is only ever mutated through
//! [`sim::Mon::apply`].

pub mod data;
pub mod error;
pub mod naming;
pub mod sim;

pub use error::DexError;

/// Commonly used exports for external consumers.
pub mod prelude {
    pub use crate::data::dex::{dex, Dex, GenerationView};
    pub use crate::data::species::{BaseStats, Species, Variant};
    pub use crate::data::types::{Type, TypeChart};
    pub use crate::error::DexError;
    pub use crate::naming::display_name;
    pub use crate::sim::effects::{Effect, StageOutcome, StatChange, StatusCondition, StatusEffect};
    pub use crate::sim::mon::{Mon, MonConfig};
    pub use crate::sim::stats::{Nature, StageStat, StatKey};
}
