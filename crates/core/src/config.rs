use serde::Deserialize;

/// Root application configuration. Loaded from environment variables with
/// the prefix `CAMPAIGN_PILOT__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_company")]
    pub company: String,
    #[serde(default)]
    pub personas: PersonaConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// Where the bundled persona source table lives.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonaConfig {
    #[serde(default = "default_persona_file")]
    pub file: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// How many personas the recommendation surfaces by default.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
}

// Default functions
fn default_company() -> String {
    "Demo Company".to_string()
}
fn default_persona_file() -> String {
    "personas.csv".to_string()
}
fn default_top_k() -> usize {
    5
}
fn default_out_dir() -> String {
    "exports".to_string()
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            file: default_persona_file(),
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            company: default_company(),
            personas: PersonaConfig::default(),
            scoring: ScoringConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("CAMPAIGN_PILOT")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
