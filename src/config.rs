use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, bail};
use clap::Parser;
use dotenvy::dotenv;

pub const DEFAULT_UPSTREAM_URL: &str = "https://newsapi.org/v2";

/// Process configuration. Built once in `main` and handed to the router,
/// nothing reads it from the environment after startup.
#[derive(Parser, Debug, Clone)]
#[command(name = "newsdesk", about = "Search front end for the News API")]
pub struct Config {
    /// News API access key
    #[arg(long = "apikey", env = "NEWS_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: ApiKey,

    #[arg(long, env = "PORT", default_value_t = 2000)]
    pub port: u16,

    /// Base URL of the news API, without the `/everything` path
    #[arg(long, env = "NEWS_API_URL", default_value = DEFAULT_UPSTREAM_URL)]
    pub upstream_url: String,

    /// Language filter sent with every search
    #[arg(long, env = "NEWS_LANGUAGE", default_value = "en")]
    pub language: String,

    #[arg(long, env = "ASSETS_DIR", default_value = "assets")]
    pub assets_dir: PathBuf,

    /// Upper bound on a single upstream call
    #[arg(long, env = "NEWS_API_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,
}

impl Config {
    /// Loads `.env` if present, then parses flags and environment.
    pub fn load() -> Result<Config> {
        dotenv().ok();
        let config = Config::parse();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.expose().trim().is_empty() {
            bail!("apikey must be set (--apikey or NEWS_API_KEY)");
        }
        if self.timeout_secs == 0 {
            bail!("timeout must be at least one second");
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Opaque credential for the news API. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> ApiKey {
        ApiKey(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        ApiKey(key)
    }
}
