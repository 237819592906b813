use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use crate::model::Pokemon;

struct CacheEntry {
    inserted: Instant,
    pokemon: Pokemon,
}

/// In-memory Pokemon cache keyed by normalized name, entries expire after `ttl`
pub struct TtlCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl TtlCache {
    /// Empty cache whose entries live for `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Cached Pokemon, unless missing or expired
    pub fn get(&self, name: &str) -> Option<Pokemon> {
        let entries = self.entries.read().ok()?;
        let entry = entries.get(name)?;
        (entry.inserted.elapsed() < self.ttl).then(|| entry.pokemon.clone())
    }

    /// Store a Pokemon, dropping expired entries
    pub fn insert(&self, name: &str, pokemon: Pokemon) {
        if let Ok(mut entries) = self.entries.write() {
            entries.retain(|_, e| e.inserted.elapsed() < self.ttl);
            entries.insert(
                name.to_string(),
                CacheEntry {
                    inserted: Instant::now(),
                    pokemon,
                },
            );
        }
    }

    /// Number of stored entries, expired ones included until the next insert
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pokemon(name: &str) -> Pokemon {
        Pokemon {
            id: 1,
            name: name.to_string(),
            sprites: Default::default(),
            abilities: Vec::new(),
            types: Vec::new(),
        }
    }

    #[test]
    fn test_hit_and_miss() {
        let cache = TtlCache::new(Duration::from_secs(60));
        assert!(cache.is_empty());
        assert_eq!(cache.get("wailord"), None);

        cache.insert("wailord", pokemon("wailord"));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("wailord").unwrap().name, "wailord");
        assert_eq!(cache.get("wailmer"), None);
    }

    #[test]
    fn test_expired_entries() {
        let cache = TtlCache::new(Duration::ZERO);
        cache.insert("wailord", pokemon("wailord"));
        assert_eq!(cache.get("wailord"), None);

        cache.insert("wailmer", pokemon("wailmer"));
        assert_eq!(cache.len(), 1);
    }
}
