use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str =
    "https://mvw9e7kvt9.execute-api.ap-southeast-1.amazonaws.com/Prod";
pub const DEFAULT_ORIGIN: &str = "https://readytalent2.singaporetech.edu.sg";
pub const DEFAULT_REFERER: &str = "https://readytalent2.singaporetech.edu.sg/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub api_rps: u32,
    pub log_format: LogFormat,
    pub upstream: UpstreamConfig,
}

/// Everything the transport client needs to reach the upstream service.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: Url,
    pub origin: String,
    pub referer: String,
    pub timeout: Duration,
}

impl UpstreamConfig {
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: parse_url("READYTALENT_BASE_URL", base_url)?,
            ..Self::default()
        })
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            origin: DEFAULT_ORIGIN.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let base_url = get_env_or("READYTALENT_BASE_URL", DEFAULT_BASE_URL);
        let timeout_secs: u64 = get_env_parse_or("UPSTREAM_TIMEOUT_SECS", 30)?;

        Ok(Self {
            server_address: get_env_or("SERVER_ADDRESS", "127.0.0.1:8080"),
            api_rps: get_env_parse_or("API_RPS", 20)?,
            log_format: parse_log_format(&get_env_or("LOG_FORMAT", "pretty"))?,
            upstream: UpstreamConfig {
                base_url: parse_url("READYTALENT_BASE_URL", &base_url)?,
                origin: get_env_or("READYTALENT_ORIGIN", DEFAULT_ORIGIN),
                referer: get_env_or("READYTALENT_REFERER", DEFAULT_REFERER),
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        _ => Ok(default),
    }
}

fn parse_url(name: &str, raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e)))
}

fn parse_log_format(raw: &str) -> Result<LogFormat> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "pretty" | "text" => Ok(LogFormat::Pretty),
        "json" => Ok(LogFormat::Json),
        other => Err(Error::Config(format!(
            "Invalid value for LOG_FORMAT: {}",
            other
        ))),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
