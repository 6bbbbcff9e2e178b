//! Codec configuration via TOML
//!
//! ```toml
//! # Key of the reserved format version entry in encoded maps
//! version_key = ":sv"
//!
//! # Default silent mode for frozen associations
//! silent = false
//! ```

use std::path::Path;

use freezer_core::{decode_key, FreezerError, FreezerResult, TypeTag};
use serde::{Deserialize, Serialize};

/// Default key of the format version marker
pub const DEFAULT_VERSION_KEY: &str = ":sv";

/// Codec configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreezerConfig {
    /// Key of the reserved format version entry
    #[serde(default = "default_version_key")]
    pub version_key: String,
    /// Default silent mode for frozen associations
    #[serde(default)]
    pub silent: bool,
}

fn default_version_key() -> String {
    DEFAULT_VERSION_KEY.to_string()
}

impl Default for FreezerConfig {
    fn default() -> Self {
        Self {
            version_key: default_version_key(),
            silent: false,
        }
    }
}

impl FreezerConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Freezer codec configuration
#
# Key of the reserved format version entry in encoded maps.
# Must not look like an encoded attribute key ("name:<registry type>").
version_key = ":sv"

# Silent mode default for frozen associations (default: false)
#   false = writes to a frozen snapshot fail with an error
#   true  = writes to a frozen snapshot are ignored
silent = false
"#
    }

    /// Check that the version key cannot collide with an attribute key
    ///
    /// # Errors
    ///
    /// Returns `Config` for an empty key, or a key that decodes as an
    /// attribute of a registry type.
    pub fn validate(&self) -> FreezerResult<()> {
        if self.version_key.is_empty() {
            return Err(FreezerError::Config(
                "version_key cannot be empty".to_string(),
            ));
        }
        if let Ok((name, tag)) = decode_key(&self.version_key) {
            if TypeTag::from_name(&tag).is_some() {
                return Err(FreezerError::Config(format!(
                    "version_key '{}' collides with attribute '{}' of type {}",
                    self.version_key, name, tag
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a TOML document
    ///
    /// # Errors
    ///
    /// Returns `Config` if the document cannot be parsed or does not validate.
    pub fn from_toml_str(content: &str) -> FreezerResult<Self> {
        let config: FreezerConfig = toml::from_str(content)
            .map_err(|e| FreezerError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> FreezerResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FreezerError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize this config to TOML and write it to the given path.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the file cannot be written.
    pub fn write_to_file(&self, path: &Path) -> FreezerResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FreezerError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            FreezerError::Config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
