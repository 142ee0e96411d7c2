//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from environment variables. It provides
//! thread-safe access and mutation for testing or overrides in runtime environments.

use std::env;
use std::str::FromStr;
use std::sync::{OnceLock, RwLock};

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_path: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_duration_minutes: u64,
    /// Interval between WS-level pings sent to every live connection.
    pub ws_ping_seconds: u64,
    /// Capacity of each connection's outbound frame queue.
    pub ws_outbound_queue: usize,
    /// Keys whose values could not be parsed and were replaced by defaults.
    pub fallbacks: Vec<ConfigFallback>,
}

/// An unparsable environment value that was replaced by its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFallback {
    pub key: String,
    pub value: String,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

/// Reads `key` and parses it, falling back to `default` when unset or unparsable.
///
/// Unparsable values are recorded in `fallbacks`; configuration is usually read
/// before a subscriber exists, so they are logged later by [`report_fallbacks`].
fn parse_or<T: FromStr>(key: &str, default: T, fallbacks: &mut Vec<ConfigFallback>) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            fallbacks.push(ConfigFallback {
                key: key.to_owned(),
                value: raw,
            });
            default
        }),
        Err(_) => default,
    }
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Every key has a development default. The JWT secret is the one value
    /// that must be supplied explicitly when `APP_ENV=production`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env_name = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let jwt_secret = env::var("JWT_SECRET").unwrap_or_default();
        if jwt_secret.is_empty() && env_name.eq_ignore_ascii_case("production") {
            panic!("JWT_SECRET is required in production");
        }

        let mut fallbacks = Vec::new();
        let port = parse_or("PORT", 5000, &mut fallbacks);
        let jwt_duration_minutes = parse_or("JWT_DURATION_MINUTES", 60, &mut fallbacks);
        let ws_ping_seconds = parse_or("WS_PING_SECONDS", 30, &mut fallbacks);
        let ws_outbound_queue = parse_or("WS_OUTBOUND_QUEUE", 64, &mut fallbacks).max(1);

        Self {
            env: env_name,
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "helpdesk".into()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "api=info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "api.log".into()),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true",
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "data/helpdesk.db".into()),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port,
            jwt_secret,
            jwt_duration_minutes,
            ws_ping_seconds,
            ws_outbound_queue,
            fallbacks,
        }
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// # Panics
    /// Panics if the lock cannot be acquired.
    pub fn global() -> std::sync::RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .expect("Failed to acquire AppConfig read lock")
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock
                .write()
                .expect("Failed to acquire AppConfig write lock");
            *guard = AppConfig::from_env();
        }
    }

    /// Generic internal setter for any field in the config.
    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock
            .write()
            .expect("Failed to acquire AppConfig write lock");
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_env(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.env = value.into());
    }

    pub fn set_log_level(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_level = value.into());
    }

    pub fn set_log_to_stdout(value: bool) {
        AppConfig::set_field(|cfg| cfg.log_to_stdout = value);
    }

    pub fn set_database_path(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.database_path = value.into());
    }

    pub fn set_host(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.host = value.into());
    }

    pub fn set_port(value: u16) {
        AppConfig::set_field(|cfg| cfg.port = value);
    }

    pub fn set_jwt_secret(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.jwt_secret = value.into());
    }

    pub fn set_jwt_duration_minutes(value: u64) {
        AppConfig::set_field(|cfg| cfg.jwt_duration_minutes = value);
    }

    pub fn set_ws_ping_seconds(value: u64) {
        AppConfig::set_field(|cfg| cfg.ws_ping_seconds = value);
    }

    pub fn set_ws_outbound_queue(value: usize) {
        AppConfig::set_field(|cfg| cfg.ws_outbound_queue = value.max(1));
    }
}

// --- Free accessors ---

pub fn env() -> String {
    AppConfig::global().env.clone()
}

pub fn project_name() -> String {
    AppConfig::global().project_name.clone()
}

pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

pub fn database_path() -> String {
    AppConfig::global().database_path.clone()
}

/// Whether `value` is a connection URL rather than a plain SQLite file path.
pub fn is_database_url(value: &str) -> bool {
    ["sqlite:", "postgres://", "mysql://"]
        .iter()
        .any(|scheme| value.starts_with(scheme))
}

/// Connection URL for a `DATABASE_PATH` value.
///
/// URLs pass through unchanged; a file path is opened in read-write-create mode.
pub fn database_url_for(value: &str) -> String {
    if is_database_url(value) {
        value.to_owned()
    } else {
        format!("sqlite://{value}?mode=rwc")
    }
}

pub fn host() -> String {
    AppConfig::global().host.clone()
}

pub fn port() -> u16 {
    AppConfig::global().port
}

pub fn jwt_secret() -> String {
    AppConfig::global().jwt_secret.clone()
}

pub fn jwt_duration_minutes() -> u64 {
    AppConfig::global().jwt_duration_minutes
}

pub fn ws_ping_seconds() -> u64 {
    AppConfig::global().ws_ping_seconds
}

pub fn ws_outbound_queue() -> usize {
    AppConfig::global().ws_outbound_queue
}

/// Logs every value that fell back to its default. Call once logging is initialized.
pub fn report_fallbacks() {
    for fallback in &AppConfig::global().fallbacks {
        tracing::warn!(
            key = %fallback.key,
            value = %fallback.value,
            "invalid config value; using default"
        );
    }
}
