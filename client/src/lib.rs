//! Look up Pokemon by name over HTTP.
//!
//! [`PokemonClient`] issues a single GET per lookup against a PokeAPI-shaped
//! REST service and keeps successful results in a short-lived in-memory
//! cache. There is no retry and no timeout: a failure is returned to the
//! caller as-is.

mod cache;
mod config;
mod error;
mod model;

pub use cache::TtlCache;
pub use config::{ClientConfig, POKEAPI_URL};
pub use error::FetchError;
pub use model::{AbilitySlot, NamedResource, Pokemon, Sprites, TypeSlot};

pub use poketeam_coverage::{CoverageError, TypeSet};

/// Async Pokemon lookup client
pub struct PokemonClient {
    http: reqwest::Client,
    config: ClientConfig,
    cache: Option<TtlCache>,
}

impl PokemonClient {
    /// Build a client with its own `reqwest::Client`
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self::with_http(http, config))
    }

    /// Use a preconfigured `reqwest::Client` (proxies, TLS roots, ...)
    pub fn with_http(http: reqwest::Client, config: ClientConfig) -> Self {
        let cache = config.cache_ttl.map(TtlCache::new);
        Self {
            http,
            config,
            cache,
        }
    }

    /// Settings in use
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch a Pokemon by name ("Mr Mime" and "mr-mime" are the same lookup)
    pub async fn fetch_pokemon_by_name(&self, name: &str) -> Result<Pokemon, FetchError> {
        let name = normalize_name(name);
        if name.is_empty() {
            return Err(FetchError::EmptyName);
        }
        if !is_resource_name(&name) {
            return Err(FetchError::NotFound(name));
        }

        if let Some(cache) = &self.cache
            && let Some(pokemon) = cache.get(&name)
        {
            tracing::debug!(name = %name, "Retrieved from cache");
            return Ok(pokemon);
        }

        let url = self.config.pokemon_url(&name);
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(name));
        }
        if !status.is_success() {
            tracing::warn!(name = %name, status = %status, "Pokemon lookup failed");
            return Err(FetchError::Status { status, name });
        }

        let pokemon: Pokemon = response.json().await?;
        tracing::info!(name = %name, id = pokemon.id, "Retrieved from API");

        if let Some(cache) = &self.cache {
            cache.insert(&name, pokemon.clone());
        }

        Ok(pokemon)
    }
}

/// Trim, lowercase and hyphenate inner whitespace
fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// False for names that can never name a resource and would change the
/// request path once the URL is parsed (dot segments, separators, escapes)
fn is_resource_name(name: &str) -> bool {
    name != "." && name != ".." && !name.contains(['/', '\\', '?', '#', '%'])
}
