//! Runtime knobs for the analyzer. Defaults are compiled in; the delay can
//! be overridden from the environment for demos and screenshots.

use std::time::Duration;

use thiserror::Error;

/// How long the mock analysis pretends to work.
pub const DEFAULT_ANALYSIS_DELAY: Duration = Duration::from_millis(3000);
pub const DEFAULT_TRUST_SUBTITLE: &str = "Based on 500+ data points";

pub const ANALYSIS_DELAY_ENV: &str = "SELLER_TRUST_ANALYSIS_DELAY_MS";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub analysis_delay: Duration,
    pub trust_subtitle: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            analysis_delay: DEFAULT_ANALYSIS_DELAY,
            trust_subtitle: DEFAULT_TRUST_SUBTITLE.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SELLER_TRUST_ANALYSIS_DELAY_MS must be a whole number of milliseconds, got {0:?}")]
    InvalidDelay(String),
}

impl AnalyzerConfig {
    /// Reads overrides from the process environment. A malformed value is
    /// logged and the default kept.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(ANALYSIS_DELAY_ENV) {
            match parse_delay(&raw) {
                Ok(delay) => config.analysis_delay = delay,
                Err(err) => tracing::warn!("{err}; keeping {:?}", config.analysis_delay),
            }
        }
        tracing::debug!(?config, "analyzer config loaded");
        config
    }
}

fn parse_delay(raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidDelay(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_product_copy() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.analysis_delay, Duration::from_secs(3));
        assert_eq!(config.trust_subtitle, "Based on 500+ data points");
    }

    #[test]
    fn parses_delay_override() {
        assert_eq!(parse_delay("250"), Ok(Duration::from_millis(250)));
        assert_eq!(parse_delay(" 0 "), Ok(Duration::ZERO));
    }

    #[test]
    fn rejects_malformed_delay() {
        assert_eq!(
            parse_delay("3s"),
            Err(ConfigError::InvalidDelay("3s".to_string()))
        );
        assert!(parse_delay("-5").is_err());
    }
}
