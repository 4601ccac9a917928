use crate::cli::Args;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSection {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub request_timeout: Option<u64>,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            url: None,
            request_timeout: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JsonConfig {
    #[serde(default)]
    pub api: ApiSection,
}

impl JsonConfig {
    /// Load `~/.config/tienda/config.json`. A missing file is the default
    /// config; a malformed one is an error so typos do not silently fall
    /// back.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: JsonConfig = serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON in {}", path.display()))?;
        Ok(config)
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tienda").join("config.json"))
    }
}

pub struct Config {
    pub api_url: String,
    pub request_timeout: u64,
    pub verbose: bool,
}

impl Config {
    pub fn from_env_and_args(args: &Args) -> Result<Self, String> {
        let json_config = match JsonConfig::load() {
            Ok(config) => config,
            Err(e) => return Err(format!("{:#}", e)),
        };

        // API URL: CLI args > env var > JSON config > default
        let api_url = args
            .api_url
            .clone()
            .or_else(|| env::var("TIENDA_API_URL").ok())
            .or(json_config.api.url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let request_timeout = json_config
            .api
            .request_timeout
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        Ok(Self {
            api_url,
            request_timeout,
            verbose: args.verbose,
        })
    }
}
