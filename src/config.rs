use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::sequencing::{ControllerOptions, SequenceParams};

/// Main configuration structure for the damper sequencer
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SequencerConfig {
    /// Lifecycle controller behaviour
    pub sequencer: SequencerSettings,
    /// Default generator parameters
    pub defaults: SequenceDefaults,
    /// Observability settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SequencerSettings {
    /// Treat complete/skip/pause with no active session as an error
    pub strict_active_session: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SequenceDefaults {
    pub start_floor: i32,
    pub floor_count: u32,
    pub dampers_per_floor: u32,
    /// Inspection point label applied to every generated item
    pub location: String,
    pub shaft_id_prefix: String,
}

impl Default for SequenceDefaults {
    fn default() -> Self {
        Self {
            start_floor: 0,
            floor_count: 1,
            dampers_per_floor: 1,
            location: "Smoke Shaft".to_string(),
            shaft_id_prefix: "SS1".to_string(),
        }
    }
}

impl SequenceDefaults {
    pub fn to_params(&self) -> SequenceParams {
        SequenceParams {
            start_floor: self.start_floor,
            floor_count: self.floor_count,
            dampers_per_floor: self.dampers_per_floor,
            location: self.location.clone(),
            shaft_id_prefix: self.shaft_id_prefix.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level used when RUST_LOG is not set
    pub log_level: String,
    /// Emit JSON log lines instead of human-readable ones
    pub json_logs: bool,
    /// Log metric counters when a command finishes
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            metrics_enabled: true,
        }
    }
}

impl SequencerConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration files (damper-seq.toml, .damper-seq-rc)
    /// 3. Environment variables (prefixed with DAMPER_SEQ_, nested keys split on `__`)
    pub fn load() -> Result<Self> {
        let mut builder = Config::builder();

        if Path::new("damper-seq.toml").exists() {
            builder = builder.add_source(File::with_name("damper-seq"));
        }

        if Path::new(".damper-seq-rc").exists() {
            builder = builder.add_source(File::with_name(".damper-seq-rc").format(config::FileFormat::Toml));
        }

        builder = builder.add_source(Self::environment());

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Load from an explicit TOML file, still honouring environment overrides
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()).format(config::FileFormat::Toml))
            .add_source(Self::environment())
            .build()?;
        Ok(config.try_deserialize()?)
    }

    fn environment() -> Environment {
        Environment::with_prefix("DAMPER_SEQ")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }

    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            strict_active_session: self.sequencer.strict_active_session,
        }
    }
}

/// Global configuration instance
static CONFIG: std::sync::LazyLock<Result<SequencerConfig, anyhow::Error>> =
    std::sync::LazyLock::new(|| {
        let _ = SequencerConfig::load_env_file();
        SequencerConfig::load()
    });

/// Get the global configuration
pub fn config() -> Result<&'static SequencerConfig> {
    CONFIG
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}
