use std::path::Path;
use tracing::debug;

use super::error::ConfigError;
use super::types::GeneratorConfig;

/// Serialization format of a configuration document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// `.yaml` / `.yml` files are YAML, everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                ConfigFormat::Yaml
            }
            _ => ConfigFormat::Json,
        }
    }
}

/// Parse and validate a configuration document held in memory.
///
/// `origin` only appears in error messages.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] for malformed documents or missing keys and
/// the validation errors of [`GeneratorConfig::validate`].
pub fn parse_config(
    content: &str,
    format: ConfigFormat,
    origin: &str,
) -> Result<GeneratorConfig, ConfigError> {
    let parse_err = |message: String| ConfigError::Parse {
        origin: origin.to_string(),
        message,
    };
    let config: GeneratorConfig = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| parse_err(e.to_string()))?,
        ConfigFormat::Json => serde_json::from_str(content).map_err(|e| parse_err(e.to_string()))?,
    };
    config.validate()?;
    Ok(config)
}

/// Load the configuration document at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::Read`] when the file cannot be read, otherwise the
/// errors of [`parse_config`].
pub fn load_config(path: &Path) -> Result<GeneratorConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let format = ConfigFormat::from_path(path);
    let config = parse_config(&content, format, &path.display().to_string())?;
    debug!(
        path = %path.display(),
        ?format,
        entities = config.entities.len(),
        "loaded generator configuration"
    );
    Ok(config)
}
