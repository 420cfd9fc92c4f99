use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Config {
    pub http_port: u16,
    pub geolocation: GeolocationConfig,
}

#[derive(Deserialize)]
pub struct GeolocationConfig {
    // may be omitted in the file and supplied via GEOLOCATION_API_KEY instead
    api_key: Option<String>,
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_url() -> String {
    "https://www.googleapis.com/geolocation/v1/geolocate".to_string()
}

fn default_timeout() -> u64 {
    5
}

impl GeolocationConfig {
    pub fn api_key(&self) -> Result<String> {
        match &self.api_key {
            Some(x) => Ok(x.clone()),
            None => dotenvy::var("GEOLOCATION_API_KEY")
                .context("geolocation api key not found in config or GEOLOCATION_API_KEY"),
        }
    }
}

pub fn load(path: &Path) -> Result<Config> {
    let data = fs::read_to_string(path).context("Failed to read config")?;
    let config = toml::from_str(&data).context("Failed to parse config")?;
    Ok(config)
}
