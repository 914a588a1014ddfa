//! Generator configuration
//!
//! Settings come from an optional `wirekey.toml` and are overridden by
//! command-line flags:
//!
//! ```toml
//! input = "src"
//! output = "src/generated"
//! file_name = "object_parser.rs"
//! module_prefix = "crate"
//! log_level = "info"
//! ```
//!
//! Relative paths in a config file are resolved against the file's folder.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use wirekey_codegen::ARTIFACT_FILE_NAME;
use wirekey_core::{WirekeyError, WirekeyResult};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "wirekey.toml";

/// wirekey.toml structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Folder scanned for model types
    pub input: Option<PathBuf>,

    /// Folder the artifact is written to
    pub output: PathBuf,

    /// Artifact file name
    pub file_name: String,

    /// Path prefix of generated `use` lines (`crate`, `super`, or a crate name)
    pub module_prefix: String,

    /// Default log filter when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: PathBuf::from("."),
            file_name: ARTIFACT_FILE_NAME.to_string(),
            module_prefix: "crate".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Values given on the command line; `None` keeps the configured value
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub file_name: Option<String>,
    pub module_prefix: Option<String>,
}

/// A validated configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub file_name: String,
    pub module_prefix: String,
}

impl ResolvedConfig {
    /// Where the artifact is written
    pub fn artifact_path(&self) -> PathBuf {
        self.output.join(&self.file_name)
    }
}

impl GeneratorConfig {
    /// Load configuration from a file
    pub fn from_file(path: impl AsRef<Path>) -> WirekeyResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| WirekeyError::io(path, e))?;

        let mut config = Self::from_toml(&content)
            .map_err(|e| WirekeyError::Config(format!("{}: {e}", path.display())))?;

        if let Some(base) = path.parent() {
            config.rebase(base);
        }
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load `explicit`, or `wirekey.toml` from `dir` if present, or defaults
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> WirekeyResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let default_path = dir.join(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            tracing::debug!(path = %default_path.display(), "using config file");
            Self::from_file(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(input) = overrides.input {
            self.input = Some(input);
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if let Some(file_name) = overrides.file_name {
            self.file_name = file_name;
        }
        if let Some(module_prefix) = overrides.module_prefix {
            self.module_prefix = module_prefix;
        }
        self
    }

    /// Validate the configuration
    pub fn resolve(self) -> WirekeyResult<ResolvedConfig> {
        let input = self.input.ok_or(WirekeyError::MissingInput)?;
        if !input.exists() {
            return Err(WirekeyError::InputNotFound(input));
        }

        if self.file_name.is_empty() || self.file_name.contains(|c: char| c == '/' || c == '\\') {
            return Err(WirekeyError::Config(format!(
                "file_name must be a plain file name, got {:?}",
                self.file_name
            )));
        }

        let prefix_is_path = self
            .module_prefix
            .split("::")
            .all(|segment| !segment.is_empty() && !segment.contains(char::is_whitespace));
        if !self.module_prefix.is_empty() && !prefix_is_path {
            return Err(WirekeyError::Config(format!(
                "module_prefix must be a Rust path such as `crate`, got {:?}",
                self.module_prefix
            )));
        }

        Ok(ResolvedConfig {
            input,
            output: self.output,
            file_name: self.file_name,
            module_prefix: self.module_prefix,
        })
    }

    fn rebase(&mut self, base: &Path) {
        if let Some(input) = &self.input {
            if input.is_relative() {
                self.input = Some(base.join(input));
            }
        }
        if self.output.is_relative() {
            self.output = base.join(&self.output);
        }
    }
}
