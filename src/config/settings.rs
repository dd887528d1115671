use std::env;
use std::path::PathBuf;

use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Application settings, loaded once at process start.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub bind_addr: String,
    pub data_file: PathBuf,
    pub jwt_secret: String,
    pub jwt_expiration_minutes: i64,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum LoggingSetupError {
    #[error("Invalid LOG_LEVEL '{level}': {message}")]
    InvalidLevel { level: String, message: String },

    #[error("Failed to create log directory: {0}")]
    LogDir(#[from] std::io::Error),

    #[error("Failed to install tracing subscriber: {0}")]
    Install(String),
}

impl AppSettings {
    /// Load settings from environment variables.
    ///
    /// `JWT_SECRET` is required; the signing key is fixed for the process
    /// lifetime and a missing value aborts startup. Everything else has a
    /// default.
    pub fn from_env() -> Self {
        let jwt_secret =
            env::var("JWT_SECRET").expect("JWT_SECRET environment variable must be set");

        let jwt_expiration_minutes = env::var("JWT_EXPIRATION_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60);

        let data_file = env::var("DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("users.json"));

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_dir = env::var("LOG_DIR").ok().map(PathBuf::from);

        Self {
            bind_addr,
            data_file,
            jwt_secret,
            jwt_expiration_minutes,
            log_level,
            log_dir,
        }
    }

    /// Install the global tracing subscriber described by these settings.
    ///
    /// One `LOG_LEVEL` filter applies to everything. Console output is
    /// always on; setting `LOG_DIR` adds a daily-rolled `roster-backend.log`
    /// in that directory.
    pub fn init_logging(&self) -> Result<(), LoggingSetupError> {
        let filter =
            EnvFilter::try_new(&self.log_level).map_err(|e| LoggingSetupError::InvalidLevel {
                level: self.log_level.clone(),
                message: e.to_string(),
            })?;

        let file_layer = match &self.log_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir)?;
                let appender = tracing_appender::rolling::daily(dir, "roster-backend.log");
                Some(fmt::layer().with_writer(appender).with_ansi(false))
            }
            None => None,
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .with(file_layer)
            .try_init()
            .map_err(|e| LoggingSetupError::Install(e.to_string()))
    }
}
