//! Coverage queries over the effectiveness table
//!
//! Everything here is a pure function of its inputs: no caching, no
//! shared mutable state, safe to call from any number of threads.

mod coverage;

pub use coverage::{
    compute_coverage, compute_coverage_names, compute_effectiveness, Bucket, Coverage,
    Effectiveness, TypeEffectiveness,
};
