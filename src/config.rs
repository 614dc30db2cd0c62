use std::env;

use crate::error::Error;

pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Service configuration, read once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
    pub app_name: String,
    pub app_version: String,
    pub environment: String,
    pub is_debug: bool,
    pub bind_address: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            app_name: "Campaign Management Dashboard".to_string(),
            app_version: "1.0.0".to_string(),
            environment: "development".to_string(),
            is_debug: false,
            bind_address: "127.0.0.1:8080".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the environment, reading `.env` if present.
    pub fn from_env() -> Result<Config, Error> {
        let _ = dotenvy::dotenv();

        Config::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let api_base_url = lookup("API_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(defaults.api_base_url)
            .trim()
            .trim_end_matches('/')
            .to_string();

        let bind_address = match lookup("BIND_ADDRESS") {
            Some(address) if address.trim().is_empty() => {
                return Err(Error::InvalidConfig {
                    key: "BIND_ADDRESS",
                    reason: "must not be empty",
                })
            }
            Some(address) => address.trim().to_string(),
            None => defaults.bind_address,
        };

        Ok(Config {
            api_base_url,
            app_name: lookup("APP_NAME").unwrap_or(defaults.app_name),
            app_version: lookup("APP_VERSION").unwrap_or(defaults.app_version),
            environment: lookup("APP_ENV").unwrap_or(defaults.environment),
            // only the literal "true" turns debugging on
            is_debug: lookup("APP_DEBUG").as_deref() == Some("true"),
            bind_address,
        })
    }
}
