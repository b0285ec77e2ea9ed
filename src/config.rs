use std::env;

use http::HeaderValue;

use crate::error::AppError;

pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
pub const DEFAULT_MARKET_DATA_URL: &str = "https://query1.finance.yahoo.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub host: String,
    pub app_env: AppEnv,
    pub cors_origin: HeaderValue,
    pub market_data_url: String,
    pub log_filter: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEnv {
    Development,
    Production,
    Test,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup, so parsing can be checked without
    /// touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server config
        let port = lookup("PORT")
            .unwrap_or_else(|| "8000".into())
            .parse::<u16>()
            .map_err(|_| AppError::ConfigError("Invalid PORT".into()))?;

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let app_env_str = lookup("APP_ENV").unwrap_or_else(|| "development".into());
        let app_env = match app_env_str.to_lowercase().as_str() {
            "production" => AppEnv::Production,
            "test" => AppEnv::Test,
            _ => AppEnv::Development,
        };

        // CORS config
        let cors_origin_str = lookup("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.into());
        let cors_origin = HeaderValue::from_str(cors_origin_str.trim())
            .map_err(|_| AppError::ConfigError("Invalid CORS_ORIGIN".into()))?;

        // Market data config
        let market_data_url = lookup("MARKET_DATA_URL")
            .unwrap_or_else(|| DEFAULT_MARKET_DATA_URL.into())
            .trim_end_matches('/')
            .to_string();
        if market_data_url.is_empty() {
            return Err(AppError::ConfigError("MARKET_DATA_URL must not be empty".into()));
        }

        let log_filter = lookup("RUST_LOG").unwrap_or_else(|| default_log_filter(&app_env).into());

        Ok(Self {
            port,
            host,
            app_env,
            cors_origin,
            market_data_url,
            log_filter,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "0.0.0.0".into(),
            app_env: AppEnv::Development,
            cors_origin: HeaderValue::from_static(DEFAULT_CORS_ORIGIN),
            market_data_url: DEFAULT_MARKET_DATA_URL.into(),
            log_filter: default_log_filter(&AppEnv::Development).into(),
        }
    }
}

fn default_log_filter(app_env: &AppEnv) -> &'static str {
    match app_env {
        AppEnv::Development => "debug",
        AppEnv::Production | AppEnv::Test => "info",
    }
}
