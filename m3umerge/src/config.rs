use std::{fs::File, path::Path};

use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// File paths or http(s) urls, merged in this order
    pub sources: Vec<String>,
    /// Destination file, stdout when absent
    pub output: Option<String>,
    #[serde(default)]
    pub skip_invalid: bool,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpConfig {
    pub user_agent: Option<String>,
    pub proxy: Option<String>,
    /// Request timeout in seconds
    pub timeout: Option<u64>,
}

pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    let file = File::open(path.as_ref())?;
    let config: Config = serde_yaml::from_reader(file)?;
    Ok(config)
}
