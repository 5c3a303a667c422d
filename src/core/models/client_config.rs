use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::global_constants;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_endpoint: String,
    pub api_key: String,
    pub bucket_name: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_endpoint: global_constants::DEFAULT_API_ENDPOINT.to_string(),
            api_key: global_constants::DEFAULT_API_KEY.to_string(),
            bucket_name: global_constants::DEFAULT_BUCKET_NAME.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn load(explicit_path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit_path {
            return Self::load_from_path(path);
        }

        let settings_path = Self::get_config_file_path()?;
        if !settings_path.exists() {
            log::info!("[CONFIG] No config file found, using built-in defaults");
            return Ok(Self::default());
        }

        Self::load_from_path(&settings_path)
    }

    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config {:?}: {}", path, e))?;
        let config: ClientConfig = serde_json::from_str(&contents)?;

        log::info!("[CONFIG] Loaded config from {:?}", path);
        log::debug!("[CONFIG] API endpoint: {}", config.api_endpoint);

        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;

        log::info!("[CONFIG] Saved config to {:?}", path);
        Ok(())
    }

    pub fn get_config_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::CONFIG_DIR_NAME);

        Ok(config_dir.join(global_constants::CONFIG_FILE_NAME))
    }

    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.api_endpoint.trim_end_matches('/'), path)
    }

    pub fn masked_api_key(&self) -> String {
        let visible: String = self.api_key.chars().take(4).collect();
        format!("{}****", visible)
    }

    pub fn placeholder_warnings(&self) -> Vec<&'static str> {
        let mut warnings = Vec::new();

        if self
            .api_endpoint
            .contains(global_constants::PLACEHOLDER_API_ENDPOINT_MARKER)
        {
            warnings.push("api_endpoint still holds the placeholder API Gateway URL");
        }
        if self.api_key == global_constants::PLACEHOLDER_API_KEY {
            warnings.push("api_key still holds the placeholder API key");
        }
        if self.bucket_name == global_constants::PLACEHOLDER_BUCKET_NAME {
            warnings.push("bucket_name still holds the placeholder bucket name");
        }

        warnings
    }

    pub fn report_startup(&self) {
        log::info!("[CONFIG] API Endpoint: {}", self.api_endpoint);
        log::info!("[CONFIG] Bucket: {}", self.bucket_name);

        for warning in self.placeholder_warnings() {
            log::warn!("[CONFIG] WARNING: {}, update the client configuration", warning);
        }
    }
}
