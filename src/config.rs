use std::env;
use std::net::SocketAddr;

use thiserror::Error;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_QR_SERVICE_URL: &str = "https://api.qrserver.com/v1/create-qr-code/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("can't read {0} from env")]
    Missing(&'static str),
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub db_url: String,
    pub bot_token: Option<String>,
    pub sentry_url: Option<String>,
    pub listen_addr: SocketAddr,
    pub qr_service_url: String,
}

impl Config {
    pub fn init() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let db_url = read("DB_URL").ok_or(ConfigError::Missing("DB_URL"))?;
        let bot_token = read("TELEGRAM_BOT_TOKEN");
        let sentry_url = read("SENTRY_URL");

        let listen_addr = read("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_addr
            .parse()
            .map_err(|_| ConfigError::Invalid {
                name: "LISTEN_ADDR",
                value: listen_addr.clone(),
            })?;

        let qr_service_url =
            read("QR_SERVICE_URL").unwrap_or_else(|| DEFAULT_QR_SERVICE_URL.to_string());

        Ok(Config {
            db_url,
            bot_token,
            sentry_url,
            listen_addr,
            qr_service_url,
        })
    }
}
