//! Shared configuration loader for the BQC toolchain.
//!
//! `defaults/bqc.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`BqcConfig`].

use bqc_parser::bqc::parsing::ParseOptions;
use bqc_parser::bqc::repair::RepairOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError as BqcConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/bqc.default.toml");

/// Top-level configuration consumed by BQC applications.
#[derive(Debug, Clone, Deserialize)]
pub struct BqcConfig {
    pub parser: ParserConfig,
    pub repair: RepairConfig,
    pub output: OutputConfig,
}

/// Mirrors [`ParseOptions`].
#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    pub default_placeholder: String,
    pub default_section_title: String,
}

/// Values written into rebuilt frontmatter, see [`RepairOptions`].
#[derive(Debug, Clone, Deserialize)]
pub struct RepairConfig {
    pub fallback_title: String,
    pub fallback_slug: String,
    pub description: String,
    pub author: String,
    pub version: String,
    pub max_slug_len: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub pretty: bool,
}

impl BqcConfig {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            default_placeholder: self.parser.default_placeholder.clone(),
            default_section_title: self.parser.default_section_title.clone(),
        }
    }

    pub fn repair_options(&self) -> RepairOptions {
        let repair = &self.repair;
        RepairOptions {
            fallback_title: repair.fallback_title.clone(),
            fallback_slug: repair.fallback_slug.clone(),
            description: repair.description.clone(),
            author: repair.author.clone(),
            version: repair.version.clone(),
            max_slug_len: repair.max_slug_len,
        }
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

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<BqcConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<BqcConfig, ConfigError> {
    Loader::new().build()
}
