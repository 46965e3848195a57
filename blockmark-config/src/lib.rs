//! Shared configuration loader for blockmark.
//!
//! `defaults/blockmark.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`BlockmarkConfig`].

use blockmark::{BulletStyle, ConvertOptions};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/blockmark.default.toml");

/// Top-level configuration consumed by blockmark applications.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockmarkConfig {
    pub import: ImportConfig,
    pub export: ExportConfig,
}

/// Markdown → blocks knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportConfig {
    pub strip_front_matter: bool,
    pub smart_punctuation: bool,
}

/// Blocks → Markdown knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub ordered_style: BulletStyle,
}

impl From<&BlockmarkConfig> for ConvertOptions {
    fn from(config: &BlockmarkConfig) -> Self {
        ConvertOptions {
            strip_front_matter: config.import.strip_front_matter,
            smart_punctuation: config.import.smart_punctuation,
            ordered_style: config.export.ordered_style,
        }
    }
}

impl From<BlockmarkConfig> for ConvertOptions {
    fn from(config: BlockmarkConfig) -> Self {
        ConvertOptions::from(&config)
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
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
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

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<BlockmarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<BlockmarkConfig, ConfigError> {
    Loader::new().build()
}
