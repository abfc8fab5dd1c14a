use std::net::{IpAddr, Ipv4Addr};

const DEFAULT_DATABASE_URL: &str = "sqlite://app.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_PORT: u16 = 5555;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Clone, Debug, PartialEq)]
pub struct BakeryConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub log_json: bool,
}

impl Default for BakeryConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_json: false,
        }
    }
}

impl BakeryConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // every setting is optional; anything missing or unparseable keeps its default
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let database_url = lookup("DATABASE_URL")
            .filter(|val| !val.trim().is_empty())
            .unwrap_or(defaults.database_url);

        let max_connections = lookup("MAX_CONNECTIONS")
            .and_then(|val| val.parse::<u32>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(defaults.max_connections);

        let host = lookup("HOST")
            .and_then(|val| val.parse::<IpAddr>().ok())
            .unwrap_or(defaults.host);

        let port = lookup("PORT")
            .and_then(|val| val.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        let log_level = lookup("LOG_LEVEL")
            .filter(|val| !val.trim().is_empty())
            .unwrap_or(defaults.log_level);

        let log_json = lookup("LOG_JSON")
            .map(|val| val == "true")
            .unwrap_or(defaults.log_json);

        Self {
            database_url,
            max_connections,
            host,
            port,
            log_level,
            log_json,
        }
    }
}
