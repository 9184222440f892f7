//! Configuration system

pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }

    /// Load configuration from file, falling back to defaults when the file
    /// does not exist
    fn load_or_default(path: &str) -> Result<Self, ConfigError> {
        if std::path::Path::new(path).exists() {
            Self::load_from_file(path)
        } else {
            log::debug!("Config file {} not found, using defaults", path);
            Ok(Self::default())
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Window settings for the smoke-test probe
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Window title
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Vulkan Smoke Test".to_string(),
        }
    }
}

/// Settings for the `vulkan_smoke` probe
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmokeConfig {
    /// Window creation parameters
    pub window: WindowConfig,
    /// Whether to request the Khronos validation layer
    pub validation: bool,
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            validation: true,
        }
    }
}

impl Config for SmokeConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smoke_config_defaults() {
        let config = SmokeConfig::default();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert!(config.validation);
    }

    #[test]
    fn test_smoke_config_parses_partial_toml() {
        // Omitted fields fall back to defaults
        let config: SmokeConfig = toml::from_str(
            r#"
            validation = false

            [window]
            width = 1200
            height = 675
            "#,
        )
        .unwrap();

        assert_eq!(config.window.width, 1200);
        assert_eq!(config.window.height, 675);
        assert_eq!(config.window.title, WindowConfig::default().title);
        assert!(!config.validation);
    }

    #[test]
    fn test_smoke_config_toml_round_trip() {
        let mut config = SmokeConfig::default();
        config.window.title = "Probe".to_string();
        config.validation = false;

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: SmokeConfig = toml::from_str(&text).unwrap();

        assert_eq!(parsed.window.title, "Probe");
        assert!(!parsed.validation);
    }
}
