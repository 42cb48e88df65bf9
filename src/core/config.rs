use dotenv::dotenv;
use std::env;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Errori di caricamento della configurazione
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key}: {reason}")]
    InvalidValue { key: &'static str, reason: &'static str },
}

/// Formato dei log emessi dal subscriber tracing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    /// Prefisso assoluto per i link (Location, index). Se assente si usa l'header Host.
    pub public_base_url: Option<String>,
    pub app_env: String,
    pub log_format: LogFormat,
}

pub const DEFAULT_DATABASE_URL: &str = "sqlite://suppliers.db?mode=rwc";

impl Config {
    /// Carica la configurazione dalle variabili d'ambiente
    /// Chiama dotenv() automaticamente
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Costruisce la configurazione da una sorgente chiave/valore qualsiasi
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let server_port = lookup("SERVER_PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidValue {
                key: "SERVER_PORT",
                reason: "must be a number between 0-65535",
            })?;

        let max_connections = lookup("MAX_DB_CONNECTIONS")
            .unwrap_or_else(|| "5".to_string())
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or(ConfigError::InvalidValue {
                key: "MAX_DB_CONNECTIONS",
                reason: "must be a positive number",
            })?;

        let acquire_timeout_secs = lookup("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|| "5".to_string())
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidValue {
                key: "DB_ACQUIRE_TIMEOUT_SECS",
                reason: "must be a positive number",
            })?;

        let public_base_url = lookup("PUBLIC_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        let app_env = lookup("APP_ENV").unwrap_or_else(|| "development".to_string());

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(Config {
            database_url,
            server_host,
            server_port,
            max_connections,
            acquire_timeout_secs,
            public_base_url,
            app_env,
            log_format,
        })
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    /// Logga la configurazione (nascondendo le credenziali del database)
    pub fn print_info(&self) {
        info!("Server configuration:");
        info!("  Environment: {}", self.app_env);
        info!("  Server address: {}:{}", self.server_host, self.server_port);
        info!("  Database: {}", Self::mask_url(&self.database_url));
        info!("  Max DB connections: {}", self.max_connections);
        info!("  DB acquire timeout: {}s", self.acquire_timeout_secs);
        info!(
            "  Public base URL: {}",
            self.public_base_url.as_deref().unwrap_or("(from request Host header)")
        );
    }

    /// Maschera le credenziali nell'URL del database per il logging
    fn mask_url(url: &str) -> String {
        if let Some(at_pos) = url.rfind('@') {
            if let Some(scheme_end) = url.find("://") {
                let scheme = &url[..scheme_end + 3];
                let after_at = &url[at_pos..];
                return format!("{}***{}", scheme, after_at);
            }
            return "***".to_string();
        }
        url.to_string()
    }
}
