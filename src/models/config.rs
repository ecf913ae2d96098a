use crate::assets::AssetLoader;
use cvd_sim::VisionType;
use serde::Deserialize;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Vision type used when a request does not name one
    #[serde(default = "default_vision_type")]
    pub default_vision_type: String,

    /// Upload limits
    #[serde(default)]
    pub upload: UploadConfig,

    /// Cross-origin access
    #[serde(default)]
    pub cors: CorsConfig,
}

fn default_vision_type() -> String {
    VisionType::default().name().to_string()
}

/// Limits applied to `/analyze` uploads
#[derive(Debug, Deserialize, Clone)]
pub struct UploadConfig {
    /// Maximum request body size in bytes
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,
}

fn default_max_bytes() -> usize {
    10 * 1024 * 1024 // 10 MiB
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_bytes: default_max_bytes(),
        }
    }
}

/// CORS policy
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CorsConfig {
    /// Allowed origins. Empty means any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        default_vision_type = %config.default_vision_type,
                        applied = %config.default_vision(),
                        max_upload_bytes = config.upload.max_bytes,
                        cors_origins = config.cors.allowed_origins.len(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// The requested vision type label, or the configured default when the
    /// caller named none.
    pub fn requested_or_default(&self, requested: Option<String>) -> String {
        requested.unwrap_or_else(|| self.default_vision_type.clone())
    }

    /// The configured default vision type, resolved.
    ///
    /// An unrecognized configured name resolves to protanopia like any
    /// other unrecognized name.
    pub fn default_vision(&self) -> VisionType {
        VisionType::parse_or_default(&self.default_vision_type)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_vision_type: default_vision_type(),
            upload: UploadConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.default_vision_type, "protanopia");
        assert_eq!(config.upload.max_bytes, 10 * 1024 * 1024);
        assert!(config.cors.allowed_origins.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
default_vision_type: achromatopsia
upload:
  max_bytes: 2048
cors:
  allowed_origins:
    - https://example.org
    - http://localhost:3000
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.default_vision(), VisionType::Achromatopsia);
        assert_eq!(config.upload.max_bytes, 2048);
        assert_eq!(config.cors.allowed_origins.len(), 2);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = AppConfig::from_yaml("upload:\n  max_bytes: 1\n").unwrap();
        assert_eq!(config.default_vision_type, "protanopia");
        assert_eq!(config.upload.max_bytes, 1);

        let config = AppConfig::from_yaml("").unwrap();
        assert_eq!(config.upload.max_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_unrecognized_default_vision_resolves_to_protanopia() {
        let config = AppConfig::from_yaml("default_vision_type: sepia\n").unwrap();
        assert_eq!(config.default_vision(), VisionType::Protanopia);
    }

    #[test]
    fn test_requested_or_default() {
        let config = AppConfig::from_yaml("default_vision_type: tritanopia\n").unwrap();
        assert_eq!(config.requested_or_default(None), "tritanopia");
        assert_eq!(
            config.requested_or_default(Some("sepia".to_string())),
            "sepia"
        );
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(AppConfig::from_yaml("upload: [not, a, map]").is_err());
    }

    #[test]
    fn test_load_from_embedded_assets() {
        let config = AppConfig::load_from_assets(&AssetLoader::new(None));
        assert_eq!(config.default_vision_type, "protanopia");
        assert_eq!(config.upload.max_bytes, 10485760);
    }

    #[test]
    fn test_load_falls_back_on_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "cors: 12\n").unwrap();

        let config = AppConfig::load_from_assets(&AssetLoader::new(Some(path)));
        assert_eq!(config.upload.max_bytes, 10 * 1024 * 1024);
    }
}
