use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// How the command line prints an import
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    #[default]
    Pretty,
    /// Human readable listing
    Summary,
}

/// Importer configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ImporterConfig {
    /// Output format of the command line tool
    #[serde(default)]
    pub output: OutputFormat,
    /// Also reject pasted text that yields no instructions
    #[serde(default)]
    pub require_instructions: bool,
    /// Default log filter when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ImporterConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            require_instructions: false,
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl ImporterConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_IMPORT__ prefix
    /// 2. recipe-import.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_IMPORT__REQUIRE_INSTRUCTIONS
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables, see [`ImporterConfig::load`]
pub fn load_config() -> Result<ImporterConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe-import").required(false))
        .add_source(
            Environment::with_prefix("RECIPE_IMPORT")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
