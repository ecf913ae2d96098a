//! Embedded assets with filesystem override
//!
//! Two assets ship inside the binary:
//!
//! - `config.yaml`, the default configuration
//! - `static/index.html`, the upload page served at `/`
//!
//! If `CONFIG_FILE` is set and the file exists, it replaces the embedded
//! config. If it is set but missing, it is seeded from the embedded copy.

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

/// Embedded web UI
#[derive(RustEmbed)]
#[folder = "static/"]
struct EmbeddedStatic;

/// Asset category for selective operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Config,
    Static,
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Asset loader with optional filesystem config override
pub struct AssetLoader {
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// `config_file` should be `Some` only if CONFIG_FILE was set.
    pub fn new(config_file: Option<PathBuf>) -> Self {
        Self { config_file }
    }

    /// Create a loader from the process environment
    pub fn from_env() -> Self {
        Self::new(std::env::var("CONFIG_FILE").ok().map(PathBuf::from))
    }

    /// Human-readable description of where config is read from
    pub fn config_source(&self) -> String {
        match self.config_file {
            Some(ref path) if path.exists() => path.display().to_string(),
            Some(_) => "embedded (file not found)".to_string(),
            None => "embedded".to_string(),
        }
    }

    /// Read the config file
    ///
    /// If an external path is configured and exists, uses that.
    /// Otherwise falls back to embedded config.
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.config_file {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading config from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
        }

        EmbeddedConfig::get("config.yaml")
            .map(|f| {
                tracing::trace!("Loading config from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml not found")
            })
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Read an embedded web UI file (e.g. `index.html`)
    pub fn read_static(name: &str) -> Option<Cow<'static, [u8]>> {
        EmbeddedStatic::get(name).map(|f| f.data)
    }

    /// Write the embedded config to the configured path if it does not exist yet.
    ///
    /// Returns true if a file was written.
    pub fn seed_if_configured(&self) -> io::Result<bool> {
        let Some(ref path) = self.config_file else {
            return Ok(false);
        };
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        match EmbeddedConfig::get("config.yaml") {
            Some(data) => {
                fs::write(path, &*data.data)?;
                tracing::info!(path = %path.display(), "Seeded config file with embedded default");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Extract embedded assets to the filesystem (init command)
    ///
    /// Config goes to the configured path (default `./config.yaml`), web UI
    /// files to `./static/`.
    pub fn init(&self, categories: &[AssetCategory], force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();

        for category in categories {
            match category {
                AssetCategory::Config => {
                    let path = self
                        .config_file
                        .clone()
                        .unwrap_or_else(|| PathBuf::from("./config.yaml"));
                    if path.exists() && !force {
                        report.skipped.push(path.display().to_string());
                        continue;
                    }
                    if let Some(parent) = path.parent() {
                        if !parent.as_os_str().is_empty() {
                            fs::create_dir_all(parent)?;
                        }
                    }
                    if let Some(data) = EmbeddedConfig::get("config.yaml") {
                        fs::write(&path, &*data.data)?;
                        report.written.push(path.display().to_string());
                    }
                }
                AssetCategory::Static => {
                    let dir = PathBuf::from("./static");
                    for file in EmbeddedStatic::iter() {
                        let path = dir.join(file.as_ref());
                        if path.exists() && !force {
                            report.skipped.push(path.display().to_string());
                            continue;
                        }
                        if let Some(data) = EmbeddedStatic::get(&file) {
                            fs::create_dir_all(&dir)?;
                            fs::write(&path, &*data.data)?;
                            report.written.push(path.display().to_string());
                        }
                    }
                }
            }
        }

        Ok(report)
    }

    /// List embedded file names for a category
    pub fn list_embedded(category: AssetCategory) -> Vec<String> {
        match category {
            AssetCategory::Config => vec!["config.yaml".to_string()],
            AssetCategory::Static => {
                let mut files: Vec<String> =
                    EmbeddedStatic::iter().map(|f| f.to_string()).collect();
                files.sort();
                files
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_available() {
        let loader = AssetLoader::new(None);
        let config = loader.read_config_string().unwrap();
        assert!(config.contains("default_vision_type"));
        assert_eq!(loader.config_source(), "embedded");
    }

    #[test]
    fn test_external_config_takes_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.yaml");
        fs::write(&path, "default_vision_type: tritanopia\n").unwrap();

        let loader = AssetLoader::new(Some(path.clone()));
        assert_eq!(
            loader.read_config_string().unwrap(),
            "default_vision_type: tritanopia\n"
        );
        assert_eq!(loader.config_source(), path.display().to_string());
    }

    #[test]
    fn test_missing_external_config_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let loader = AssetLoader::new(Some(dir.path().join("missing.yaml")));
        assert!(loader.read_config_string().unwrap().contains("upload"));
        assert_eq!(loader.config_source(), "embedded (file not found)");
    }

    #[test]
    fn test_seed_writes_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let loader = AssetLoader::new(Some(path.clone()));

        assert!(loader.seed_if_configured().unwrap());
        assert!(path.exists());
        assert!(!loader.seed_if_configured().unwrap());
    }

    #[test]
    fn test_init_skips_existing_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "# mine\n").unwrap();
        let loader = AssetLoader::new(Some(path.clone()));

        let report = loader.init(&[AssetCategory::Config], false).unwrap();
        assert!(report.written.is_empty());
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");

        let report = loader.init(&[AssetCategory::Config], true).unwrap();
        assert_eq!(report.written.len(), 1);
        assert!(fs::read_to_string(&path)
            .unwrap()
            .contains("default_vision_type"));
    }

    #[test]
    fn test_index_page_is_embedded() {
        assert!(AssetLoader::read_static("index.html").is_some());
        assert_eq!(
            AssetLoader::list_embedded(AssetCategory::Static),
            vec!["index.html".to_string()]
        );
    }
}
