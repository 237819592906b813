//! Domain types for the type-effectiveness system

mod multiplier;
mod pokemon_type;
mod type_set;

pub use multiplier::Multiplier;
pub use pokemon_type::{Type, TYPE_COUNT};
pub use type_set::TypeSet;
