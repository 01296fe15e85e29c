//! Engine configuration
//!
//! Loaded from `BENEFITS_*` environment variables. Every field has a
//! default, so an empty environment yields a working configuration.
//!
//! * `BENEFITS_DEFAULT_LOCALE` - locale used when a caller names none (default: en)
//! * `BENEFITS_FALLBACK_LOCALE` - locale consulted when a label is missing (default: en)
//! * `BENEFITS_TIMEZONE` - IANA zone deciding which date "today" is (default: UTC)
//! * `BENEFITS_LOG_LEVEL` - tracing filter for binaries (default: info)

use core_kernel::{SystemClock, Timezone};
use serde::{Deserialize, Serialize};

use crate::error::BenefitError;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_locale")]
    pub default_locale: String,
    #[serde(default = "default_locale")]
    pub fallback_locale: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            fallback_locale: default_locale(),
            timezone: default_timezone(),
            log_level: default_log_level(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, BenefitError> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("BENEFITS"))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// The configured timezone
    pub fn timezone(&self) -> Result<Timezone, BenefitError> {
        Ok(Timezone::parse(&self.timezone)?)
    }

    /// A system clock reading "today" in the configured timezone
    pub fn clock(&self) -> Result<SystemClock, BenefitError> {
        self.timezone().map(SystemClock::new)
    }
}
