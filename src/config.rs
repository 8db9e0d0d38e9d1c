//! Runtime configuration from the environment (and `.env`)

use crate::error::AdvisorError;
use crate::Result;
use std::env;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_SESSION_TTL_MINUTES: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorConfig {
    pub port: u16,
    /// Postgres store when set, in-memory otherwise.
    pub database_url: Option<String>,
    /// HTTP quote service when set, simulated figures otherwise.
    pub market_data_base_url: Option<String>,
    pub log_filter: String,
    /// In-memory sessions idle this long are dropped.
    pub session_ttl_minutes: u32,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            market_data_base_url: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            session_ttl_minutes: DEFAULT_SESSION_TTL_MINUTES,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl AdvisorConfig {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match non_empty(lookup("PORT").or_else(|| lookup("API_PORT"))) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| AdvisorError::ConfigError(format!("invalid port '{}': {}", raw, e)))?,
            None => DEFAULT_PORT,
        };

        let session_ttl_minutes = match non_empty(lookup("SESSION_TTL_MINUTES")) {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|minutes| *minutes > 0)
                .ok_or_else(|| AdvisorError::ConfigError(format!("invalid session TTL '{}'", raw)))?,
            None => DEFAULT_SESSION_TTL_MINUTES,
        };

        Ok(Self {
            port,
            database_url: non_empty(lookup("DATABASE_URL").or_else(|| lookup("POSTGRES_URL"))),
            market_data_base_url: non_empty(lookup("MARKET_DATA_BASE_URL")),
            log_filter: non_empty(lookup("ADVISOR_LOG")).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            session_ttl_minutes,
        })
    }
}
