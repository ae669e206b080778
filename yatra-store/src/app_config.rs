use serde::Deserialize;
use std::env;
use std::time::Duration;
use yatra_booking::BookingRules;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub booking: BookingRules,
    #[serde(default)]
    pub gateway: GatewayRules,
    #[serde(default)]
    pub catalog: CatalogRules,
}

/// Wiring for the mock reservation desk
#[derive(Debug, Deserialize, Clone)]
pub struct GatewayRules {
    #[serde(default = "default_mock_latency_ms")]
    pub mock_latency_ms: u64,
}

fn default_mock_latency_ms() -> u64 {
    150
}

impl Default for GatewayRules {
    fn default() -> Self {
        Self {
            mock_latency_ms: default_mock_latency_ms(),
        }
    }
}

impl GatewayRules {
    pub fn mock_latency(&self) -> Duration {
        Duration::from_millis(self.mock_latency_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogRules {
    /// Tier preselected on the booking form
    #[serde(default = "default_tier")]
    pub default_tier: String,
}

fn default_tier() -> String {
    "standard".to_string()
}

impl Default for CatalogRules {
    fn default() -> Self {
        Self {
            default_tier: default_tier(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Environment overrides, e.g. YATRA_BOOKING__SUBMISSION_TIMEOUT_MS=2000
            .add_source(config::Environment::with_prefix("YATRA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_sections() {
        let cfg: Config = config::Config::builder()
            .add_source(config::File::from_str("", config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg.booking.submission_timeout_ms, 5000);
        assert_eq!(cfg.gateway.mock_latency_ms, 150);
        assert_eq!(cfg.catalog.default_tier, "standard");
    }

    #[test]
    fn file_values_override_defaults() {
        let toml = r#"
            [booking]
            submission_timeout_ms = 2500

            [gateway]
            mock_latency_ms = 10
        "#;

        let cfg: Config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg.booking.submission_timeout_ms, 2500);
        assert_eq!(cfg.booking.submission_timeout(), Duration::from_millis(2500));
        assert_eq!(cfg.gateway.mock_latency(), Duration::from_millis(10));
        // Untouched section keeps its default
        assert_eq!(cfg.catalog.default_tier, "standard");
    }
}
