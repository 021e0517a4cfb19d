//! Configuration System
//!
//! Engine configuration: producer coroutine settings and logging. Loaded through the `config`
//! crate with defaults, an optional TOML file, and `LAZYSEQ__*` environment overrides.

use crate::error::EngineError;
use crate::logging::LoggingConfig;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Smallest coroutine stack accepted, in machine words.
pub const MIN_STACK_SIZE: usize = 0x800;

const DEFAULT_STACK_SIZE: usize = 0x4000;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Settings for the coroutines that back generator suspension points
    #[serde(default)]
    pub producer: ProducerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Producer coroutine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProducerConfig {
    /// Stack size for each producer coroutine, in machine words
    #[serde(default = "default_stack_size")]
    pub stack_size: usize,
}

fn default_stack_size() -> usize {
    DEFAULT_STACK_SIZE
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            stack_size: default_stack_size(),
        }
    }
}

impl ProducerConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.stack_size < MIN_STACK_SIZE {
            return Err(format!(
                "Stack size {} is below the minimum of {} words",
                self.stack_size, MIN_STACK_SIZE
            ));
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Producer(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Producer(msg) => write!(f, "Producer: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl EngineConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.producer.validate() {
            errors.push(ValidationError::Producer(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Loads [`EngineConfig`] from layered sources.
///
/// Precedence (lowest to highest): defaults, TOML file, `LAZYSEQ__` environment variables.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from defaults and environment only.
    pub fn load() -> Result<EngineConfig, EngineError> {
        let builder = Self::builder_with_defaults()?;
        Self::finish(builder.add_source(Self::environment()))
    }

    /// Load with a TOML file layered between defaults and environment.
    pub fn load_from_file(path: &Path) -> Result<EngineConfig, EngineError> {
        let path_str = path.to_str().ok_or_else(|| {
            EngineError::ConfigError(format!("Config path is not valid UTF-8: {:?}", path))
        })?;
        let builder = Self::builder_with_defaults()?
            .add_source(File::with_name(path_str).required(true))
            .add_source(Self::environment());
        Self::finish(builder)
    }

    fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
    {
        Config::builder()
            .set_default("producer.stack_size", default_stack_size() as i64)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "text")?
            .set_default("logging.output", "stderr")
    }

    fn environment() -> Environment {
        Environment::with_prefix("LAZYSEQ")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
    }

    fn finish(
        builder: ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<EngineConfig, EngineError> {
        let config: EngineConfig = builder.build()?.try_deserialize()?;

        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            EngineError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        Ok(config)
    }
}
