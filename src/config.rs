use crate::errors::AppError;
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub host: String,
    pub app_env: String,
    pub api_key: Option<String>,
    pub db_url: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();

        let server_port = match env::var("PORT") {
            Ok(port_str) => port_str.parse::<u16>().map_err(|_| {
                AppError::Config(format!("PORT '{}' is not a valid port number", port_str))
            })?,
            Err(_) => 8000, // Default
        };

        let host = env::var("HOST").unwrap_or_else(|_| "http://localhost:8000".to_string());
        let app_env = env::var("NODE_ENV").unwrap_or_else(|_| "dev".to_string());
        let api_key = env::var("APIKEY").ok();
        let db_url = env::var("DATABASE_URL").unwrap_or("sqlite:./tasks.db".to_string());
        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            server_port,
            host,
            app_env,
            api_key,
            db_url,
            rust_log,
        })
    }

    /// Base URL reported in startup logs and the OpenAPI server list.
    pub fn base_url(&self) -> String {
        if self.app_env == "local" {
            format!("http://localhost:{}", self.server_port)
        } else {
            self.host.clone()
        }
    }
}
