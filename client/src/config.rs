use anyhow::{Context, Result};
use serde::Deserialize;
use shared::DEFAULT_MODEL;

const ENV_PREFIX: &str = "WX_";

#[derive(Debug, Deserialize, PartialEq)]
pub struct Config {
    /// Where the backend is served. `WX_API_URL`
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Weather model asked for when none is given. `WX_MODEL`
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_api_url() -> String {
    "http://127.0.0.1:8000/".to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Config {
    pub fn from_env() -> Result<Config> {
        envy::prefixed(ENV_PREFIX)
            .from_env::<Config>()
            .context("Invalid WX_ configuration")
    }

    pub fn from_vars<I>(vars: I) -> Result<Config>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX)
            .from_iter(vars)
            .context("Invalid WX_ configuration")
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: default_api_url(),
            model: default_model(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_without_vars() {
        let config = Config::from_vars(vars(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.model, "gfs");
    }

    #[test]
    fn test_prefixed_vars() {
        let config = Config::from_vars(vars(&[
            ("WX_API_URL", "https://wx.example.com/app/"),
            ("WX_MODEL", "ecmwf"),
            ("API_URL", "http://ignored"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "https://wx.example.com/app/");
        assert_eq!(config.model, "ecmwf");
    }
}
