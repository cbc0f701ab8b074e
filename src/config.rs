//! Configuration for the singleton's simulated timings and upstream.
//!
//! Values come from defaults, from `SINGLETON_DI_*` environment variables,
//! or (with the `config` feature) from a JSON document. The library itself
//! never reads the environment; the binary calls [`SingletonConfig::from_env`].

use std::env::{self, VarError};
use std::str::FromStr;
use std::time::Duration;
#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::singleton::{SimulatedUpstream, SingletonOptions};

/// Environment variable holding the init delay in milliseconds.
pub const ENV_INIT_DELAY_MS: &str = "SINGLETON_DI_INIT_DELAY_MS";
/// Environment variable holding the work delay in milliseconds.
pub const ENV_WORK_DELAY_MS: &str = "SINGLETON_DI_WORK_DELAY_MS";
/// Environment variable toggling upstream availability.
pub const ENV_UPSTREAM_AVAILABLE: &str = "SINGLETON_DI_UPSTREAM_AVAILABLE";

/// Plain-data settings for building [`SingletonOptions`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct SingletonConfig {
    pub init_delay_ms: u64,
    pub work_delay_ms: u64,
    pub upstream_available: bool,
}

impl Default for SingletonConfig {
    fn default() -> Self {
        Self {
            init_delay_ms: 1000,
            work_delay_ms: 1000,
            upstream_available: true,
        }
    }
}

impl SingletonConfig {
    /// Reads overrides from the process environment.
    ///
    /// Unset variables keep their defaults; set but unparsable ones fail.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            init_delay_ms: env_or(ENV_INIT_DELAY_MS, defaults.init_delay_ms)?,
            work_delay_ms: env_or(ENV_WORK_DELAY_MS, defaults.work_delay_ms)?,
            upstream_available: env_or(ENV_UPSTREAM_AVAILABLE, defaults.upstream_available)?,
        })
    }

    /// Parses a JSON document; missing fields take their defaults.
    #[cfg(feature = "config")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds factory options using the Tokio clock.
    pub fn into_options(self) -> SingletonOptions {
        let upstream = if self.upstream_available {
            SimulatedUpstream::available()
        } else {
            SimulatedUpstream::unavailable()
        };
        SingletonOptions::new()
            .with_init_delay(Duration::from_millis(self.init_delay_ms))
            .with_work_delay(Duration::from_millis(self.work_delay_ms))
            .with_upstream(upstream)
    }
}

fn env_or<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value: raw }),
        Err(VarError::NotPresent) => Ok(default),
        Err(VarError::NotUnicode(raw)) => Err(ConfigError::InvalidValue {
            name,
            value: raw.to_string_lossy().into_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_factory_defaults() {
        let options = SingletonConfig::default().into_options();
        assert_eq!(options.init_delay(), crate::singleton::DEFAULT_INIT_DELAY);
        assert_eq!(options.work_delay(), crate::singleton::DEFAULT_WORK_DELAY);
    }

    #[cfg(feature = "config")]
    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let config = SingletonConfig::from_json(r#"{ "work_delay_ms": 5 }"#).unwrap();
        assert_eq!(
            config,
            SingletonConfig {
                work_delay_ms: 5,
                ..SingletonConfig::default()
            }
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn json_rejects_wrong_types() {
        let err = SingletonConfig::from_json(r#"{ "init_delay_ms": "soon" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
