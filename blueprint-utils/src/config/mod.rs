//! Configuration loading
//!
//! Two entry points:
//! - [`load_config`] reads a single TOML, JSON or YAML file, picking the
//!   format from the extension.
//! - [`load_layered`] merges compiled-in defaults, an optional file and
//!   environment variables (`PREFIX_SECTION__KEY=value`), in that order of
//!   increasing precedence.

use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> crate::Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "toml" => Ok(ConfigFormat::Toml),
            "json" => Ok(ConfigFormat::Json),
            "yml" | "yaml" => Ok(ConfigFormat::Yaml),
            _ => Err(crate::UtilError::Config(format!(
                "Unsupported config format: '{extension}' ({})",
                path.display()
            ))),
        }
    }

    fn as_file_format(self) -> config::FileFormat {
        match self {
            ConfigFormat::Toml => config::FileFormat::Toml,
            ConfigFormat::Json => config::FileFormat::Json,
            ConfigFormat::Yaml => config::FileFormat::Yaml,
        }
    }
}

/// Parse `content` in the given format.
pub fn parse_config<T>(content: &str, format: ConfigFormat) -> crate::Result<T>
where
    T: DeserializeOwned,
{
    match format {
        ConfigFormat::Toml => toml::from_str(content)
            .map_err(|e| crate::UtilError::Config(format!("TOML parse error: {e}"))),
        ConfigFormat::Json => serde_json::from_str(content)
            .map_err(|e| crate::UtilError::Config(format!("JSON parse error: {e}"))),
        ConfigFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| crate::UtilError::Config(format!("YAML parse error: {e}"))),
    }
}

/// Load a configuration file, detecting its format from the extension.
pub fn load_config<T>(path: &Path) -> crate::Result<T>
where
    T: DeserializeOwned,
{
    let format = ConfigFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    parse_config(&content, format)
}

/// Layer defaults, an optional file and environment overrides.
///
/// Nested keys in environment variables are separated by a double
/// underscore: with prefix `BLUEPRINT`, `BLUEPRINT_ANALYSIS__REQUIRE_SUMMARY=true`
/// sets `analysis.require_summary`.
pub fn load_layered<T>(path: Option<&Path>, env_prefix: &str) -> crate::Result<T>
where
    T: Default + Serialize + DeserializeOwned,
{
    let defaults = config::Config::try_from(&T::default())
        .map_err(|e| crate::UtilError::Serialization(format!("Default config error: {e}")))?;

    let mut builder = config::Config::builder().add_source(defaults);

    if let Some(path) = path {
        if !path.exists() {
            return Err(crate::UtilError::Config(format!(
                "Config file does not exist: {}",
                path.display()
            )));
        }
        let format = ConfigFormat::from_path(path)?;
        builder = builder.add_source(config::File::from(path).format(format.as_file_format()));
    }

    builder = builder.add_source(
        config::Environment::with_prefix(env_prefix)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    builder
        .build()
        .and_then(|layered| layered.try_deserialize::<T>())
        .map_err(|e| crate::UtilError::Config(format!("Config layering error: {e}")))
}
