//! The closed set of elemental types

use std::str::FromStr;

use crate::error::CoverageError;

/// Pokemon types (18 types as of Gen 6+)
///
/// Discriminants follow the canonical enumeration order, which is also the
/// order every coverage bucket is reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

/// Number of types in the universe
pub const TYPE_COUNT: usize = 18;

impl Type {
    /// All 18 Pokemon types, in canonical order
    pub const ALL: [Type; TYPE_COUNT] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    /// Position of this type in [`Type::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse a type name (case-insensitive, surrounding whitespace ignored)
    pub fn from_name(name: &str) -> Result<Self, CoverageError> {
        let ty = match name.trim().to_lowercase().as_str() {
            "normal" => Type::Normal,
            "fire" => Type::Fire,
            "water" => Type::Water,
            "electric" => Type::Electric,
            "grass" => Type::Grass,
            "ice" => Type::Ice,
            "fighting" => Type::Fighting,
            "poison" => Type::Poison,
            "ground" => Type::Ground,
            "flying" => Type::Flying,
            "psychic" => Type::Psychic,
            "bug" => Type::Bug,
            "rock" => Type::Rock,
            "ghost" => Type::Ghost,
            "dragon" => Type::Dragon,
            "dark" => Type::Dark,
            "steel" => Type::Steel,
            "fairy" => Type::Fairy,
            _ => return Err(CoverageError::InvalidType(name.to_string())),
        };
        Ok(ty)
    }

    /// Display name ("Fire")
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }

    /// Lowercase identifier as served by the remote data source ("fire")
    pub fn as_id(&self) -> &'static str {
        match self {
            Type::Normal => "normal",
            Type::Fire => "fire",
            Type::Water => "water",
            Type::Electric => "electric",
            Type::Grass => "grass",
            Type::Ice => "ice",
            Type::Fighting => "fighting",
            Type::Poison => "poison",
            Type::Ground => "ground",
            Type::Flying => "flying",
            Type::Psychic => "psychic",
            Type::Bug => "bug",
            Type::Rock => "rock",
            Type::Ghost => "ghost",
            Type::Dragon => "dragon",
            Type::Dark => "dark",
            Type::Steel => "steel",
            Type::Fairy => "fairy",
        }
    }
}

impl FromStr for Type {
    type Err = CoverageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Type::from_name(s)
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
