//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Reporting configuration.
    #[serde(default)]
    pub reporting: ReportingConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Reporting configuration.
///
/// Drives which unit feeds the KPI summary, which fiscal years the
/// comparison matrix covers, and which metrics read as costs.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportingConfig {
    /// Slug of the business unit shown on the KPI summary.
    #[serde(default = "default_group_slug")]
    pub group_slug: String,
    /// Most recent full year with actuals.
    #[serde(default = "default_current_year")]
    pub current_year: i32,
    /// Number of years shown in the comparison matrix, ending at
    /// `current_year`.
    #[serde(default = "default_comparison_span")]
    pub comparison_span: u8,
    /// Metric slugs where a lower value is the favorable direction.
    #[serde(default = "default_cost_metric_slugs")]
    pub cost_metric_slugs: Vec<String>,
}

fn default_group_slug() -> String {
    "group".to_string()
}

fn default_current_year() -> i32 {
    2025
}

fn default_comparison_span() -> u8 {
    3
}

fn default_cost_metric_slugs() -> Vec<String> {
    vec!["opex".to_string()]
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            group_slug: default_group_slug(),
            current_year: default_current_year(),
            comparison_span: default_comparison_span(),
            cost_metric_slugs: default_cost_metric_slugs(),
        }
    }
}

impl ReportingConfig {
    /// Year immediately preceding the current year.
    #[must_use]
    pub const fn prior_year(&self) -> i32 {
        self.current_year - 1
    }

    /// Years covered by the comparison matrix, ascending and ending at
    /// `current_year`.
    #[must_use]
    pub fn comparison_years(&self) -> Vec<i32> {
        let span = i32::from(self.comparison_span.max(1));
        (self.current_year - span + 1..=self.current_year).collect()
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FINBOARD").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporting_defaults() {
        let reporting = ReportingConfig::default();
        assert_eq!(reporting.group_slug, "group");
        assert_eq!(reporting.current_year, 2025);
        assert_eq!(reporting.prior_year(), 2024);
        assert_eq!(reporting.cost_metric_slugs, vec!["opex".to_string()]);
    }

    #[test]
    fn test_comparison_years_ascending() {
        let reporting = ReportingConfig::default();
        assert_eq!(reporting.comparison_years(), vec![2023, 2024, 2025]);
    }

    #[test]
    fn test_comparison_years_minimum_span() {
        let reporting = ReportingConfig {
            comparison_span: 0,
            ..ReportingConfig::default()
        };
        assert_eq!(reporting.comparison_years(), vec![2025]);
    }
}
