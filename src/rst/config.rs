//! Parser configuration
//!
//!     `defaults/rst.default.yaml` is embedded into the library so that the documented
//!     defaults and the runtime behavior stay in sync. Callers layer their own YAML on top of
//!     it with [`Loader`] before it is deserialized into a [`ParserConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_YAML: &str = include_str!("../../defaults/rst.default.yaml");

/// Knobs of the tree builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Columns of indentation per block quote level
    pub indent_width: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { indent_width: 4 }
    }
}

impl ParserConfig {
    /// Read a configuration from YAML text. Missing keys take their default values.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Loader::new().with_yaml(text).build()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent_width == 0 {
            return Err(ConfigError::Message(
                "indent_width must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_YAML, FileFormat::Yaml));
        Self { builder }
    }

    /// Layer YAML text. Keys present in `text` replace earlier values.
    pub fn with_yaml(mut self, text: &str) -> Self {
        if text.trim().is_empty() {
            return self;
        }
        self.builder = self.builder.add_source(File::from_str(text, FileFormat::Yaml));
        self
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Yaml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Yaml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Deserialize the layered configuration and validate it.
    pub fn build(self) -> Result<ParserConfig, ConfigError> {
        let config: ParserConfig = self.builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
