use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/app.yaml";
pub const DEFAULT_MODEL_PATH: &str = "model/brainTumor_model.pt";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub model: ModelConfig,
    pub upload: UploadConfig,
    pub frontend: FrontendConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8081,
            workers: None,
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub path: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub max_bytes: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    pub dist_dir: PathBuf,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        let dist_dir = if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
            format!("{}/../frontend/dist", manifest_dir)
        } else {
            "/usr/src/app/frontend/dist".to_string()
        };
        Self {
            dist_dir: PathBuf::from(dist_dir),
        }
    }
}

impl AppConfig {
    /// Reads the file named by `APP_CONFIG` (or `config/app.yaml`) and
    /// applies the `PORT` override.
    pub fn load() -> Result<Self, ConfigError> {
        let path = env::var("APP_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        let mut config = Self::from_file_or_default(&path)?;
        config.apply_port_override(env::var("PORT").ok())?;
        Ok(config)
    }

    pub fn from_file_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::warn!(
                "Config file {} not found, using built-in defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    fn apply_port_override(&mut self, port: Option<String>) -> Result<(), ConfigError> {
        if let Some(port) = port {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config: AppConfig = serde_yaml::from_str("server:\n  port: 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.model.path, PathBuf::from(DEFAULT_MODEL_PATH));
        assert_eq!(config.upload.max_bytes, DEFAULT_MAX_UPLOAD_BYTES);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = env::temp_dir().join("brain-mri-missing-config.yaml");
        let config = AppConfig::from_file_or_default(&path).unwrap();
        assert_eq!(config.server.bind_address(), "0.0.0.0:8081");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = env::temp_dir().join(format!("brain-mri-bad-{}.yaml", uuid::Uuid::new_v4()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "server: [not, a, map").unwrap();

        let result = AppConfig::from_file_or_default(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn port_override() {
        let mut config = AppConfig::default();
        config.apply_port_override(Some("9090".into())).unwrap();
        assert_eq!(config.server.port, 9090);

        config.apply_port_override(None).unwrap();
        assert_eq!(config.server.port, 9090);

        let err = config.apply_port_override(Some("http".into())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(p) if p == "http"));
    }
}
