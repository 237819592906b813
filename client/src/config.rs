use std::time::Duration;

pub const POKEAPI_URL: &str = "https://pokeapi.co/api/v2/";

const API_URL_ENV: &str = "POKETEAM_API_URL";
const CACHE_TTL_ENV: &str = "POKETEAM_CACHE_TTL_SECS";

/// Settings for [`PokemonClient`](crate::PokemonClient)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base of the REST API; `pokemon/{name}` is appended to it
    pub base_url: String,
    /// How long fetched Pokemon are kept in memory. `None` disables caching.
    pub cache_ttl: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: POKEAPI_URL.to_string(),
            cache_ttl: Some(Duration::from_secs(5 * 60)),
            user_agent: concat!("poketeam/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults, overridden by `POKETEAM_API_URL` and `POKETEAM_CACHE_TTL_SECS`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_ENV).filter(|u| !u.trim().is_empty()) {
            config = config.with_base_url(url.trim());
        }

        if let Some(raw) = lookup(CACHE_TTL_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(0) => config.cache_ttl = None,
                Ok(secs) => config.cache_ttl = Some(Duration::from_secs(secs)),
                Err(e) => tracing::warn!(
                    value = %raw,
                    error = %e,
                    "Ignoring invalid {}",
                    CACHE_TTL_ENV
                ),
            }
        }

        config
    }

    /// Replace the base URL, ensuring it ends in `/`
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let mut url = url.into();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.base_url = url;
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Option<Duration>) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub(crate) fn pokemon_url(&self, name: &str) -> String {
        format!("{}pokemon/{}", self.base_url, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, POKEAPI_URL);
        assert_eq!(config.cache_ttl, Some(Duration::from_secs(300)));
        assert!(config.user_agent.starts_with("poketeam/"));
    }

    #[test]
    fn test_env_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (API_URL_ENV, "http://localhost:8080"),
            (CACHE_TTL_ENV, "30"),
        ]));
        assert_eq!(config.base_url, "http://localhost:8080/");
        assert_eq!(config.cache_ttl, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_zero_ttl_disables_cache() {
        let config = ClientConfig::from_lookup(lookup_from(&[(CACHE_TTL_ENV, "0")]));
        assert_eq!(config.cache_ttl, None);
    }

    #[test]
    fn test_invalid_ttl_keeps_default() {
        let config = ClientConfig::from_lookup(lookup_from(&[(CACHE_TTL_ENV, "soon")]));
        assert_eq!(config.cache_ttl, ClientConfig::default().cache_ttl);
    }

    #[test]
    fn test_pokemon_url() {
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:9000/api");
        assert_eq!(config.pokemon_url("wailord"), "http://127.0.0.1:9000/api/pokemon/wailord");
    }
}
