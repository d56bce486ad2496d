use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("cache budget must be greater than zero")]
    ZeroBudget,

    #[error("pressure threshold must lie in (0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("malformed engine configuration: {0}")]
    Malformed(String),
}

/// Engine configuration: the cache's memory budget and the advisory
/// memory-pressure threshold.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Maximum total bytes the cache may account for before evicting.
    pub max_cache_bytes: usize,
    /// Used-heap over heap-limit ratio above which the engine reports
    /// memory pressure.
    pub pressure_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_cache_bytes: 64 * 1024 * 1024,
            pressure_threshold: 0.8,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_cache_bytes == 0 {
            return Err(ConfigError::ZeroBudget);
        }
        if !(self.pressure_threshold > 0.0 && self.pressure_threshold <= 1.0) {
            return Err(ConfigError::InvalidThreshold(self.pressure_threshold));
        }
        Ok(())
    }

    /// Deserializes and validates a configuration from TOML text supplied by
    /// the host.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(s).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Default)]
pub struct EngineConfigBuilder {
    max_cache_bytes: Option<usize>,
    pressure_threshold: Option<f64>,
}

impl EngineConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_cache_bytes(mut self, bytes: usize) -> Self {
        self.max_cache_bytes = Some(bytes);
        self
    }

    pub fn pressure_threshold(mut self, threshold: f64) -> Self {
        self.pressure_threshold = Some(threshold);
        self
    }

    pub fn build(self) -> Result<EngineConfig, ConfigError> {
        let defaults = EngineConfig::default();
        let config = EngineConfig {
            max_cache_bytes: self.max_cache_bytes.unwrap_or(defaults.max_cache_bytes),
            pressure_threshold: self
                .pressure_threshold
                .unwrap_or(defaults.pressure_threshold),
        };
        config.validate()?;
        Ok(config)
    }
}
