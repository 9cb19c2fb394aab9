use anyhow::{anyhow, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;
use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::str::FromStr;

const FEATURE_PREFIX: &str = "FEATURE_";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub http_addr: String,
    pub database_url: String,
    pub database_key: Option<String>,
    pub db_max_connections: u32,
    pub db_connect_timeout_seconds: u64,
    pub db_idle_timeout_seconds: u64,
    pub db_max_lifetime_seconds: u64,
    pub run_migrations: bool,
    pub migrations_dir: String,
    pub session_key: [u8; 32],
    pub session_ttl_minutes: u64,
    pub runtime: RuntimeConfig,
}

/// Values handed to the client application as-is.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub map_token: Option<String>,
    pub analytics_key: Option<String>,
    pub default_country_code: Option<String>,
    pub features: BTreeMap<String, bool>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let http_addr = env_or("HTTP_ADDR", "0.0.0.0:8080");
        let _parsed_http_addr = SocketAddr::from_str(&http_addr)
            .map_err(|err| anyhow!("invalid HTTP_ADDR: {}", err))?;

        Ok(Self {
            http_addr,
            database_url: env_or_err("DATABASE_URL")?,
            database_key: std::env::var("DATABASE_KEY").ok(),
            db_max_connections: env_or_parse("DB_MAX_CONNECTIONS", "25")?,
            db_connect_timeout_seconds: env_or_parse("DB_CONNECT_TIMEOUT_SECONDS", "5")?,
            db_idle_timeout_seconds: env_or_parse("DB_IDLE_TIMEOUT_SECONDS", "300")?,
            db_max_lifetime_seconds: env_or_parse("DB_MAX_LIFETIME_SECONDS", "1800")?,
            run_migrations: parse_flag(&env_or("DB_RUN_MIGRATIONS", "false")),
            migrations_dir: env_or("DB_MIGRATIONS_DIR", "migrations"),
            session_key: env_key_32("SESSION_KEY")?,
            session_ttl_minutes: env_or_parse("SESSION_TTL_MINUTES", "60")?,
            runtime: RuntimeConfig::from_vars(std::env::vars()),
        })
    }
}

impl RuntimeConfig {
    /// Builds the pass-through config from an arbitrary set of variables.
    /// Nothing here is validated; unknown flag values read as `false`.
    pub fn from_vars<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut config = RuntimeConfig::default();
        for (key, value) in vars {
            match key.as_str() {
                "MAP_TOKEN" => config.map_token = Some(value),
                "ANALYTICS_KEY" => config.analytics_key = Some(value),
                "DEFAULT_COUNTRY_CODE" => config.default_country_code = Some(value),
                _ => {
                    if let Some(name) = key.strip_prefix(FEATURE_PREFIX) {
                        if !name.is_empty() {
                            config
                                .features
                                .insert(name.to_ascii_lowercase(), parse_flag(&value));
                        }
                    }
                }
            }
        }
        config
    }
}

pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_or_err(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| anyhow!("missing required env var: {}", key))
}

fn env_or_parse<T>(key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    let value = std::env::var(key).unwrap_or_else(|_| default.to_string());
    value
        .parse::<T>()
        .map_err(|err| anyhow!("invalid {}: {}", key, err))
}

fn env_key_32(key: &str) -> Result<[u8; 32]> {
    let value = env_or_err(key)?;
    decode_key_32(key, &value)
}

fn decode_key_32(key: &str, value: &str) -> Result<[u8; 32]> {
    let decoded = STANDARD
        .decode(value.as_bytes())
        .map_err(|err| anyhow!("invalid {}: {}", key, err))?;
    if decoded.len() != 32 {
        return Err(anyhow!("invalid {}: expected 32 bytes", key));
    }
    let mut key_bytes = [0u8; 32];
    key_bytes.copy_from_slice(&decoded);
    Ok(key_bytes)
}
