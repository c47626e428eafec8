pub use crate::analysis::ranker::DEFAULT_RUNNER_UPS;
use crate::error::AppError;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_REGION: &str = "na1";
pub const DEFAULT_MATCH_COUNT: usize = 50;
pub const MAX_MATCH_COUNT: usize = 100;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub region: String,
    pub match_count: usize,
    pub runner_ups: usize,
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: None,
            region: DEFAULT_REGION.to_string(),
            match_count: DEFAULT_MATCH_COUNT,
            runner_ups: DEFAULT_RUNNER_UPS,
            catalog_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup, so tests don't touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let api_key = lookup("RIOT_API_KEY").filter(|k| !k.trim().is_empty());
        let region = lookup("RIOT_REGION").unwrap_or(defaults.region);

        let match_count = match lookup("RESONANCE_MATCH_COUNT") {
            Some(raw) => parse_count("RESONANCE_MATCH_COUNT", &raw)?,
            None => defaults.match_count,
        };
        let runner_ups = match lookup("RESONANCE_RUNNER_UPS") {
            Some(raw) => parse_count("RESONANCE_RUNNER_UPS", &raw)?,
            None => defaults.runner_ups,
        };
        let catalog_path = lookup("RESONANCE_CATALOG").map(PathBuf::from);

        Ok(Config {
            api_key,
            region,
            match_count: clamp_match_count(match_count),
            runner_ups,
            catalog_path,
        })
    }

    pub fn require_api_key(&self) -> Result<&str, AppError> {
        self.api_key.as_deref().ok_or_else(|| {
            AppError::ConfigError("RIOT_API_KEY not found in .env file".to_string())
        })
    }
}

pub fn clamp_match_count(count: usize) -> usize {
    count.clamp(1, MAX_MATCH_COUNT)
}

fn parse_count(key: &str, raw: &str) -> Result<usize, AppError> {
    raw.trim().parse::<usize>().map_err(|_| {
        AppError::ConfigError(format!("{} must be a non-negative integer, got '{}'", key, raw))
    })
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
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.region, "na1");
        assert_eq!(config.match_count, 50);
        assert_eq!(config.runner_ups, 2);
        assert!(config.api_key.is_none());
        assert!(config.require_api_key().is_err());
    }

    #[test]
    fn match_count_is_clamped() {
        let config =
            Config::from_lookup(lookup_from(&[("RESONANCE_MATCH_COUNT", "500")])).unwrap();
        assert_eq!(config.match_count, MAX_MATCH_COUNT);

        let config = Config::from_lookup(lookup_from(&[("RESONANCE_MATCH_COUNT", "0")])).unwrap();
        assert_eq!(config.match_count, 1);
    }

    #[test]
    fn malformed_number_is_config_error() {
        let err = Config::from_lookup(lookup_from(&[("RESONANCE_RUNNER_UPS", "two")]))
            .unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let config = Config::from_lookup(lookup_from(&[("RIOT_API_KEY", "  ")])).unwrap();
        assert!(config.api_key.is_none());

        let config = Config::from_lookup(lookup_from(&[("RIOT_API_KEY", "RGAPI-x")])).unwrap();
        assert_eq!(config.require_api_key().unwrap(), "RGAPI-x");
    }
}
