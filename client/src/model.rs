//! Pokemon as served by the lookup API

use poketeam_coverage::{CoverageError, TypeSet};
use serde::{Deserialize, Serialize};

/// A named link to another API resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlot {
    #[serde(default)]
    pub is_hidden: bool,
    pub slot: u8,
    pub ability: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub ty: NamedResource,
}

/// A Pokemon entity; fields the app does not use are ignored on decode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    pub types: Vec<TypeSlot>,
}

impl Pokemon {
    /// The Pokemon's types in slot order, validated for the calculator
    pub fn type_set(&self) -> Result<TypeSet, CoverageError> {
        let mut slots: Vec<&TypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|t| t.slot);
        TypeSet::from_names(slots.iter().map(|t| t.ty.name.as_str()))
    }

    /// Ability names in slot order
    pub fn ability_names(&self) -> Vec<&str> {
        let mut slots: Vec<&AbilitySlot> = self.abilities.iter().collect();
        slots.sort_by_key(|a| a.slot);
        slots.iter().map(|a| a.ability.name.as_str()).collect()
    }

    pub fn sprite_url(&self) -> Option<&str> {
        self.sprites.front_default.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poketeam_coverage::Type;

    const ROTOM_WASH: &str = r#"{
        "id": 10009,
        "name": "rotom-wash",
        "base_experience": 182,
        "sprites": { "front_default": "https://example.test/10009.png", "back_default": null },
        "abilities": [
            { "is_hidden": false, "slot": 1, "ability": { "name": "levitate", "url": "https://pokeapi.co/api/v2/ability/26/" } }
        ],
        "types": [
            { "slot": 2, "type": { "name": "water", "url": "https://pokeapi.co/api/v2/type/11/" } },
            { "slot": 1, "type": { "name": "electric", "url": "https://pokeapi.co/api/v2/type/13/" } }
        ]
    }"#;

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let pokemon: Pokemon = serde_json::from_str(ROTOM_WASH).unwrap();
        assert_eq!(pokemon.id, 10009);
        assert_eq!(pokemon.name, "rotom-wash");
        assert_eq!(pokemon.sprite_url(), Some("https://example.test/10009.png"));
        assert_eq!(pokemon.ability_names(), vec!["levitate"]);
    }

    #[test]
    fn test_type_set_uses_slot_order() {
        let pokemon: Pokemon = serde_json::from_str(ROTOM_WASH).unwrap();
        let types = pokemon.type_set().unwrap();
        assert_eq!(types.primary(), Type::Electric);
        assert_eq!(types.secondary(), Some(Type::Water));
    }

    #[test]
    fn test_type_set_rejects_unknown_type() {
        let json = r#"{
            "id": 1,
            "name": "missingno",
            "types": [ { "slot": 1, "type": { "name": "bird" } } ]
        }"#;
        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.sprite_url(), None);
        assert!(pokemon.abilities.is_empty());
        assert_eq!(
            pokemon.type_set(),
            Err(CoverageError::InvalidType("bird".to_string()))
        );
    }

    #[test]
    fn test_type_set_rejects_typeless() {
        let json = r#"{ "id": 2, "name": "nothing", "types": [] }"#;
        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.type_set(), Err(CoverageError::EmptyTypeSet));
    }
}
