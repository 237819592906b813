//! Type effectiveness chart and per-type defensive lookups

use crate::error::CoverageError;
use crate::types::{Multiplier, Type, TYPE_COUNT};

const IM: Multiplier = Multiplier::Immune;
const HF: Multiplier = Multiplier::Half;
const NE: Multiplier = Multiplier::Neutral;
const SE: Multiplier = Multiplier::Double;

/// 18x18 type effectiveness chart
/// Row = attacking type, Column = defending type
/// IM = 0x, HF = 0.5x, NE = 1x, SE = 2x
///
/// Order: Normal, Fire, Water, Electric, Grass, Ice, Fighting, Poison, Ground,
///        Flying, Psychic, Bug, Rock, Ghost, Dragon, Dark, Steel, Fairy
#[rustfmt::skip]
pub static TYPE_CHART: [[Multiplier; TYPE_COUNT]; TYPE_COUNT] = [
    // Normal
    [NE, NE, NE, NE, NE, NE, NE, NE, NE, NE, NE, NE, HF, IM, NE, NE, HF, NE],
    // Fire
    [NE, HF, HF, NE, SE, SE, NE, NE, NE, NE, NE, SE, HF, NE, HF, NE, SE, NE],
    // Water
    [NE, SE, HF, NE, HF, NE, NE, NE, SE, NE, NE, NE, SE, NE, HF, NE, NE, NE],
    // Electric
    [NE, NE, SE, HF, HF, NE, NE, NE, IM, SE, NE, NE, NE, NE, HF, NE, NE, NE],
    // Grass
    [NE, HF, SE, NE, HF, NE, NE, HF, SE, HF, NE, HF, SE, NE, HF, NE, HF, NE],
    // Ice
    [NE, HF, HF, NE, SE, HF, NE, NE, SE, SE, NE, NE, NE, NE, SE, NE, HF, NE],
    // Fighting
    [SE, NE, NE, NE, NE, SE, NE, HF, NE, HF, HF, HF, SE, IM, NE, SE, SE, HF],
    // Poison
    [NE, NE, NE, NE, SE, NE, NE, HF, HF, NE, NE, NE, HF, HF, NE, NE, IM, SE],
    // Ground
    [NE, SE, NE, SE, HF, NE, NE, SE, NE, IM, NE, HF, SE, NE, NE, NE, SE, NE],
    // Flying
    [NE, NE, NE, HF, SE, NE, SE, NE, NE, NE, NE, SE, HF, NE, NE, NE, HF, NE],
    // Psychic
    [NE, NE, NE, NE, NE, NE, SE, SE, NE, NE, HF, NE, NE, NE, NE, IM, HF, NE],
    // Bug
    [NE, HF, NE, NE, SE, NE, HF, HF, NE, HF, SE, NE, NE, HF, NE, SE, HF, HF],
    // Rock
    [NE, SE, NE, NE, NE, SE, HF, NE, HF, SE, NE, SE, NE, NE, NE, NE, HF, NE],
    // Ghost
    [IM, NE, NE, NE, NE, NE, NE, NE, NE, NE, SE, NE, NE, SE, NE, HF, NE, NE],
    // Dragon
    [NE, NE, NE, NE, NE, NE, NE, NE, NE, NE, NE, NE, NE, NE, SE, NE, HF, IM],
    // Dark
    [NE, NE, NE, NE, NE, NE, HF, NE, NE, NE, SE, NE, NE, SE, NE, HF, NE, HF],
    // Steel
    [NE, HF, HF, HF, NE, SE, NE, NE, NE, NE, NE, NE, SE, NE, NE, NE, HF, SE],
    // Fairy
    [NE, HF, NE, NE, NE, NE, SE, HF, NE, NE, NE, NE, NE, NE, SE, SE, HF, NE],
];

impl Type {
    /// Multiplier this type deals when attacking a single defending type
    pub fn effectiveness(&self, defender: Type) -> Multiplier {
        TYPE_CHART[self.index()][defender.index()]
    }
}

/// Read-only view over [`TYPE_CHART`].
///
/// The chart is a `static`, so the table carries no state and can be
/// shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct EffectivenessTable;

impl EffectivenessTable {
    /// The table over the static chart
    pub fn new() -> Self {
        Self
    }

    /// Multipliers every opposing type applies to a Pokemon bearing `ty`.
    ///
    /// For `Water` this yields `Fire -> 0.5` and `Grass -> 2`: the column of
    /// the chart where `ty` defends.
    pub fn lookup(&self, ty: Type) -> TypeRelations {
        let mut relations = [Multiplier::Neutral; TYPE_COUNT];
        for attacker in Type::all() {
            relations[attacker.index()] = attacker.effectiveness(ty);
        }
        TypeRelations { ty, relations }
    }

    /// [`lookup`](Self::lookup) by type name
    pub fn lookup_name(&self, name: &str) -> Result<TypeRelations, CoverageError> {
        Ok(self.lookup(Type::from_name(name)?))
    }
}

/// How every type in the universe interacts with one defending type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeRelations {
    ty: Type,
    relations: [Multiplier; TYPE_COUNT],
}

impl TypeRelations {
    /// The defending type these relations describe
    pub fn ty(&self) -> Type {
        self.ty
    }

    /// Multiplier `opposing` applies to this type
    pub fn get(&self, opposing: Type) -> Multiplier {
        self.relations[opposing.index()]
    }

    /// `(opposing type, multiplier)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Type, Multiplier)> + '_ {
        Type::all().iter().map(|t| (*t, self.relations[t.index()]))
    }
}
