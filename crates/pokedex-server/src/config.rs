//! Server configuration
//!
//! Read from the environment (after `.env` is loaded by `main`).

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Configuration for the Pokedex API server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// JSON file loaded once at startup
    pub data_path: PathBuf,
    /// Shared secret expected by the admin access gate
    pub admin_secret: String,
    /// Admin level-up budget per window
    pub rate_limit_max: u32,
    pub rate_limit_window: Duration,
    /// Stall applied to requests carrying `X-Server-Fatigue: true`
    pub fatigue_delay: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            data_path: PathBuf::from("pokemons.json"),
            admin_secret: "admin-secret".to_string(),
            rate_limit_max: 5,
            rate_limit_window: Duration::from_secs(10),
            fatigue_delay: Duration::from_millis(500),
        }
    }
}

impl ServerConfig {
    /// Load from `POKEDEX_*` variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            host: lookup("POKEDEX_HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "POKEDEX_PORT", defaults.port),
            data_path: lookup("POKEDEX_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            admin_secret: lookup("POKEDEX_ADMIN_SECRET").unwrap_or(defaults.admin_secret),
            rate_limit_max: parse_or(&lookup, "POKEDEX_RATE_LIMIT_MAX", defaults.rate_limit_max),
            rate_limit_window: Duration::from_secs(parse_or(
                &lookup,
                "POKEDEX_RATE_LIMIT_WINDOW_SECS",
                defaults.rate_limit_window.as_secs(),
            )),
            fatigue_delay: Duration::from_millis(parse_or(
                &lookup,
                "POKEDEX_FATIGUE_DELAY_MS",
                defaults.fatigue_delay.as_millis() as u64,
            )),
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("⚠️  Invalid {}={:?}, using default {}", key, raw, default);
            default
        }),
    }
}
