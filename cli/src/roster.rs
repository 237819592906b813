//! The list of Pokemon currently on display

use poketeam_client::Pokemon;
use poketeam_coverage::{compute_coverage, Coverage, CoverageError, TypeSet};
use serde::Serialize;

/// A displayed Pokemon with its coverage computed once, at insertion
#[derive(Debug, Clone, Serialize)]
pub struct RosterEntry {
    pub pokemon: Pokemon,
    pub types: TypeSet,
    pub coverage: Coverage,
}

impl RosterEntry {
    /// Validate the Pokemon's types and compute its coverage
    pub fn new(pokemon: Pokemon) -> Result<Self, CoverageError> {
        let types = pokemon.type_set()?;
        let coverage = compute_coverage(&types);
        Ok(Self {
            pokemon,
            types,
            coverage,
        })
    }
}

/// Owned by the caller and handed to the renderer; insertion order is kept
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    /// Empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a Pokemon; the same species may appear more than once
    pub fn push(&mut self, pokemon: Pokemon) -> Result<&RosterEntry, CoverageError> {
        let entry = RosterEntry::new(pokemon)?;
        self.entries.push(entry);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Remove the entry at `index`, if any
    pub fn remove(&mut self, index: usize) -> Option<RosterEntry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &RosterEntry> {
        self.entries.iter()
    }

    /// Number of displayed Pokemon
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
