//! Tuning knobs for the home screen.

use crate::home::ConfigError;
use serde::Deserialize;
use std::time::Duration;

pub const USER_DATA_DELAY_ENV: &str = "HOME_FEED_USER_DELAY_MS";
pub const POSTS_DELAY_ENV: &str = "HOME_FEED_POSTS_DELAY_MS";
pub const STORE_BUFFER_ENV: &str = "HOME_FEED_STORE_BUFFER";

/// Settings for [`HomeViewModel`](crate::home::HomeViewModel).
///
/// The two delays are minimum loading times: a fetch that finishes early still
/// waits this long before its result is published, so the loading indicator
/// does not flash. Set them to zero with [`HomeConfig::immediate`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    pub user_data_delay_ms: u64,
    pub posts_delay_ms: u64,
    /// Capacity of the state store's request queue.
    pub store_buffer: usize,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            user_data_delay_ms: 1000,
            posts_delay_ms: 500,
            store_buffer: 32,
        }
    }
}

impl HomeConfig {
    /// No minimum loading time.
    pub fn immediate() -> Self {
        Self {
            user_data_delay_ms: 0,
            posts_delay_ms: 0,
            ..Self::default()
        }
    }

    pub fn user_data_delay(&self) -> Duration {
        Duration::from_millis(self.user_data_delay_ms)
    }

    pub fn posts_delay(&self) -> Duration {
        Duration::from_millis(self.posts_delay_ms)
    }

    /// Reads overrides from the process environment.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(USER_DATA_DELAY_ENV) {
            config.user_data_delay_ms = parse(USER_DATA_DELAY_ENV, value)?;
        }
        if let Some(value) = lookup(POSTS_DELAY_ENV) {
            config.posts_delay_ms = parse(POSTS_DELAY_ENV, value)?;
        }
        if let Some(value) = lookup(STORE_BUFFER_ENV) {
            config.store_buffer = parse(STORE_BUFFER_ENV, value)?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store_buffer == 0 {
            return Err(ConfigError::Zero("store_buffer"));
        }
        Ok(())
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_minimum_loading_times() {
        let config = HomeConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, HomeConfig::default());
        assert_eq!(config.user_data_delay(), Duration::from_secs(1));
        assert_eq!(config.posts_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_env_overrides() {
        let config = HomeConfig::from_lookup(lookup(&[
            (USER_DATA_DELAY_ENV, "0"),
            (POSTS_DELAY_ENV, " 25 "),
            (STORE_BUFFER_ENV, "4"),
        ]))
        .unwrap();
        assert_eq!(config.user_data_delay(), Duration::ZERO);
        assert_eq!(config.posts_delay_ms, 25);
        assert_eq!(config.store_buffer, 4);
    }

    #[test]
    fn test_bad_values_are_rejected() {
        let err = HomeConfig::from_lookup(lookup(&[(POSTS_DELAY_ENV, "soon")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue { key: POSTS_DELAY_ENV, value: "soon".into() }
        );

        let err = HomeConfig::from_lookup(lookup(&[(STORE_BUFFER_ENV, "0")])).unwrap_err();
        assert_eq!(err, ConfigError::Zero("store_buffer"));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: HomeConfig = serde_json::from_str(r#"{ "posts_delay_ms": 0 }"#).unwrap();
        assert_eq!(config.posts_delay_ms, 0);
        assert_eq!(config.user_data_delay_ms, 1000);
    }
}
