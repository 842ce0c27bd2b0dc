use crate::utils::url::{DEFAULT_CATALOGUE_BASE_URL, DEFAULT_SEARCH_API_URL};
use std::time::Duration;
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {name}: '{value}'")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub catalogue_base_url: String,
    pub search_api_url: String,
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            catalogue_base_url: DEFAULT_CATALOGUE_BASE_URL.to_string(),
            search_api_url: DEFAULT_SEARCH_API_URL.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from any variable source; unset variables keep their
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => parse_var("PORT", value)?,
            None => defaults.port,
        };
        let http_timeout = match lookup("HTTP_TIMEOUT_SECS") {
            Some(value) => Duration::from_secs(parse_var("HTTP_TIMEOUT_SECS", value)?),
            None => defaults.http_timeout,
        };

        Ok(Self {
            port,
            catalogue_base_url: lookup("CATALOGUE_BASE_URL").unwrap_or(defaults.catalogue_base_url),
            search_api_url: lookup("SEARCH_API_URL").unwrap_or(defaults.search_api_url),
            http_timeout,
        })
    }

    pub fn addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.catalogue_base_url, "http://books.toscrape.com");
        assert_eq!(config.search_api_url, "https://gutendex.com/books/");
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert_eq!(config.addr(), "0.0.0.0:3000");
    }

    #[test]
    fn overrides_from_environment() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("CATALOGUE_BASE_URL", "http://localhost:9000"),
            ("SEARCH_API_URL", "http://localhost:9001/books/"),
            ("HTTP_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.catalogue_base_url, "http://localhost:9000");
        assert_eq!(config.search_api_url, "http://localhost:9001/books/");
        assert_eq!(config.http_timeout, Duration::from_secs(5));
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = Config::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));
    }

    #[test]
    fn rejects_non_numeric_timeout() {
        assert!(Config::from_lookup(lookup(&[("HTTP_TIMEOUT_SECS", "soon")])).is_err());
    }
}
