//! Defensive coverage of a Pokemon across the whole type universe

use crate::error::CoverageError;
use crate::table::EffectivenessTable;
use crate::types::{Type, TypeSet, TYPE_COUNT};

/// Classification of a net multiplier.
///
/// Buckets describe the Pokemon bearing the types: a `Strength` is a type it
/// takes reduced damage from, a `Weakness` one it takes extra damage from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Bucket {
    /// 0 < multiplier < 1
    Strength,
    /// multiplier > 1
    Weakness,
    /// multiplier == 1
    Neutral,
    /// multiplier == 0
    NoEffect,
}

impl Bucket {
    /// Order buckets are presented in
    pub const ALL: [Bucket; 4] = [
        Bucket::Weakness,
        Bucket::Strength,
        Bucket::Neutral,
        Bucket::NoEffect,
    ];

    /// Classify a net multiplier; rules are checked in order and exactly one applies
    pub fn classify(value: f32) -> Self {
        if value == 0.0 {
            Bucket::NoEffect
        } else if value == 1.0 {
            Bucket::Neutral
        } else if value < 1.0 {
            Bucket::Strength
        } else {
            Bucket::Weakness
        }
    }

    /// Heading used when displaying the bucket
    pub fn label(&self) -> &'static str {
        match self {
            Bucket::Strength => "Strengths",
            Bucket::Weakness => "Weaknesses",
            Bucket::Neutral => "Neutral",
            Bucket::NoEffect => "No Effect",
        }
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Net multiplier of every opposing type against one [`TypeSet`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Effectiveness {
    values: [f32; TYPE_COUNT],
}

impl Effectiveness {
    /// Net multiplier of `opposing`
    pub fn get(&self, opposing: Type) -> f32 {
        self.values[opposing.index()]
    }

    /// `(opposing type, multiplier)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Type, f32)> + '_ {
        Type::all().iter().map(|t| (*t, self.values[t.index()]))
    }
}

/// One entry of a coverage bucket
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeEffectiveness {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: Type,
    pub multiplier: f32,
}

/// Net multipliers partitioned into the four buckets.
///
/// Within each bucket, entries follow the canonical type order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coverage {
    pub strengths: Vec<TypeEffectiveness>,
    pub weaknesses: Vec<TypeEffectiveness>,
    pub neutrals: Vec<TypeEffectiveness>,
    pub no_effects: Vec<TypeEffectiveness>,
}

impl Coverage {
    /// Entries classified into `bucket`
    pub fn bucket(&self, bucket: Bucket) -> &[TypeEffectiveness] {
        match bucket {
            Bucket::Strength => &self.strengths,
            Bucket::Weakness => &self.weaknesses,
            Bucket::Neutral => &self.neutrals,
            Bucket::NoEffect => &self.no_effects,
        }
    }

    /// Which bucket `opposing` landed in
    pub fn bucket_of(&self, opposing: Type) -> Option<Bucket> {
        Bucket::ALL
            .into_iter()
            .find(|b| self.bucket(*b).iter().any(|e| e.ty == opposing))
    }

    /// Net multiplier recorded for `opposing`
    pub fn multiplier(&self, opposing: Type) -> Option<f32> {
        self.iter_buckets()
            .flat_map(|(_, entries)| entries.iter())
            .find(|e| e.ty == opposing)
            .map(|e| e.multiplier)
    }

    /// Buckets in presentation order, empty ones included
    pub fn iter_buckets(&self) -> impl Iterator<Item = (Bucket, &[TypeEffectiveness])> + '_ {
        Bucket::ALL.into_iter().map(|b| (b, self.bucket(b)))
    }

    fn push(&mut self, ty: Type, multiplier: f32) {
        let entry = TypeEffectiveness { ty, multiplier };
        match Bucket::classify(multiplier) {
            Bucket::Strength => self.strengths.push(entry),
            Bucket::Weakness => self.weaknesses.push(entry),
            Bucket::Neutral => self.neutrals.push(entry),
            Bucket::NoEffect => self.no_effects.push(entry),
        }
    }
}

/// Fold the chart across every type in `types`
pub fn compute_effectiveness(types: &TypeSet) -> Effectiveness {
    let table = EffectivenessTable::new();
    let mut values = [1.0_f32; TYPE_COUNT];

    for ty in types.iter() {
        for (opposing, m) in table.lookup(ty).iter() {
            values[opposing.index()] *= m.value();
        }
    }

    Effectiveness { values }
}

/// Net multipliers for `types`, classified into buckets
pub fn compute_coverage(types: &TypeSet) -> Coverage {
    let mut coverage = Coverage::default();
    for (opposing, value) in compute_effectiveness(types).iter() {
        coverage.push(opposing, value);
    }
    coverage
}

/// [`compute_coverage`] from raw type names, validated before computing
pub fn compute_coverage_names<I, S>(names: I) -> Result<Coverage, CoverageError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let types = TypeSet::from_names(names)?;
    Ok(compute_coverage(&types))
}
