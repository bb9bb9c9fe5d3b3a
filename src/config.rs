use std::{env, str::FromStr};

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use pupuk_shared::Category;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    /// IANA zone deciding which calendar day is "today"
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Category reported when none is given on the command line
    #[serde(default = "default_category")]
    pub category: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            category: default_category(),
        }
    }
}

fn default_timezone() -> String {
    "Asia/Jakarta".to_string()
}

fn default_category() -> String {
    Category::OilPalm.to_string()
}

impl ReportConfig {
    pub fn category(&self) -> Result<Category, String> {
        Category::from_str(&self.category)
            .map_err(|_| format!("Unknown report category '{}'", self.category))
    }
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (PUPUK__DATABASE__URL, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("database.url", "sqlite:pupuk.db")?
            .set_default("database.max_connections", 5)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PUPUK")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if !pupuk_shared::is_known_timezone(&self.report.timezone) {
            return Err(format!("Unknown report timezone '{}'", self.report.timezone));
        }
        self.report.category()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use temp_dir::TempDir;

    use super::*;

    fn config() -> Config {
        Config {
            database: DatabaseConfig {
                url: "sqlite:test.db".to_string(),
                max_connections: 5,
            },
            observability: ObservabilityConfig::default(),
            report: ReportConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        let config = config();

        assert!(config.validate().is_ok());
        assert_eq!(config.report.category(), Ok(Category::OilPalm));
    }

    #[test]
    fn test_validation_zero_connections() {
        let mut config = config();
        config.database.max_connections = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_unknown_timezone() {
        let mut config = config();
        config.report.timezone = "Asia/Atlantis".to_string();

        assert_eq!(
            config.validate().unwrap_err(),
            "Unknown report timezone 'Asia/Atlantis'"
        );
    }

    #[test]
    fn test_validation_unknown_category() {
        let mut config = config();
        config.report.category = "cocoa".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.child("pupuk.toml");
        std::fs::write(
            &path,
            "[database]\nurl = \"sqlite:estate.db\"\nmax_connections = 2\n\n[report]\ntimezone = \"Asia/Makassar\"\ncategory = \"rubber\"\n",
        )
        .unwrap();

        let config = Config::load(Some(path.to_str().unwrap().to_string())).unwrap();

        assert_eq!(config.database.max_connections, 2);
        assert_eq!(config.report.timezone, "Asia/Makassar");
        assert_eq!(config.report.category(), Ok(Category::Rubber));
        assert_eq!(config.observability.log_level, "info");
    }
}
