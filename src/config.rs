use std::{env, net::SocketAddr};

use url::Url;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub listen_addr: SocketAddr,
    /// Base URL the confirmation links in outgoing mail point at.
    pub base_api_url: String,
    /// Base URL of the web frontend confirmation redirects land on.
    pub base_web_url: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
    pub mail_from_name: String,
    pub mail_from_address: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://planner.db".to_string());
        let listen_addr: SocketAddr = env::var("APP_LISTEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3333".to_string())
            .parse()
            .map_err(|err| AppError::Config(format!("invalid APP_LISTEN_ADDR: {err}")))?;

        let base_api_url = base_url_var("BASE_API_URL", "http://localhost:3333")?;
        let base_web_url = base_url_var("BASE_WEB_URL", "http://localhost:3000")?;

        let smtp_host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let smtp_port: u16 = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .map_err(|err| AppError::Config(format!("invalid SMTP_PORT: {err}")))?;
        let smtp_username = env::var("SMTP_USERNAME").ok();
        let smtp_password = env::var("SMTP_PASSWORD").ok();

        let mail_from_name =
            env::var("MAIL_FROM_NAME").unwrap_or_else(|_| "plann.er team".to_string());
        let mail_from_address =
            env::var("MAIL_FROM_ADDRESS").unwrap_or_else(|_| "oi@plann.er".to_string());

        Ok(Self {
            database_url,
            listen_addr,
            base_api_url,
            base_web_url,
            smtp_host,
            smtp_port,
            smtp_username,
            smtp_password,
            mail_from_name,
            mail_from_address,
        })
    }
}

/// Reads a base URL from the environment, parse-validating it and trimming
/// the trailing slash so link formatting can always insert its own.
fn base_url_var(name: &str, default: &str) -> Result<String, AppError> {
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|err| AppError::Config(format!("invalid {name}: {err}")))?;
    Ok(raw.trim_end_matches('/').to_string())
}
