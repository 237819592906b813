//! Type-effectiveness table and defensive coverage calculator.
//!
//! Given the one or two types of a Pokemon, this crate folds the 18x18
//! effectiveness chart across them and sorts every opposing type into a
//! bucket: what the Pokemon resists, what it is weak to, what is neutral
//! and what cannot touch it at all.
//!
//! # Overview
//!
//! ```text
//! poketeam-client (fetch Pokemon by name)
//!        │  TypeSet
//!        ▼
//! poketeam-coverage (chart + calculator) ← THIS CRATE
//!        │  Coverage
//!        ▼
//! poketeam-cli (roster + rendering)
//! ```
//!
//! # Main Types
//!
//! - [`Type`] - the 18 elemental types, in canonical order
//! - [`Multiplier`] - one of 0x, 0.5x, 1x, 2x
//! - [`TypeSet`] - the 1-2 distinct types of one Pokemon
//! - [`EffectivenessTable`] - per-type lookups over [`TYPE_CHART`]
//! - [`Coverage`] - net multipliers partitioned into [`Bucket`]s
//!
//! # Example Usage
//!
//! ```
//! use poketeam_coverage::{compute_coverage, Bucket, Type, TypeSet};
//!
//! let gengar = TypeSet::dual(Type::Ghost, Type::Poison).unwrap();
//! let coverage = compute_coverage(&gengar);
//!
//! assert_eq!(coverage.bucket_of(Type::Normal), Some(Bucket::NoEffect));
//! assert_eq!(coverage.multiplier(Type::Psychic), Some(2.0));
//! ```

pub mod error;
pub mod query;
pub mod table;
pub mod types;

pub use error::CoverageError;
pub use query::{
    compute_coverage, compute_coverage_names, compute_effectiveness, Bucket, Coverage,
    Effectiveness, TypeEffectiveness,
};
pub use table::{EffectivenessTable, TypeRelations, TYPE_CHART};
pub use types::{Multiplier, Type, TypeSet, TYPE_COUNT};
