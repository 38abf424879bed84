// storefront_server/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  // Mock catalog source knobs
  pub catalog_fetch_latency_ms: u64,
  pub catalog_fetch_fails: bool,

  // Mock order desk knobs
  pub order_desk_latency_ms: u64,
  pub order_desk_decline_all: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let catalog_fetch_latency_ms = get_env("CATALOG_FETCH_LATENCY_MS")
      .unwrap_or_else(|_| "50".to_string())
      .parse::<u64>()
      .map_err(|e| AppError::Config(format!("Invalid CATALOG_FETCH_LATENCY_MS: {}", e)))?;
    let catalog_fetch_fails = get_env("CATALOG_FETCH_FAILS")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid CATALOG_FETCH_FAILS value: {}", e)))?;

    let order_desk_latency_ms = get_env("ORDER_DESK_LATENCY_MS")
      .unwrap_or_else(|_| "100".to_string())
      .parse::<u64>()
      .map_err(|e| AppError::Config(format!("Invalid ORDER_DESK_LATENCY_MS: {}", e)))?;
    let order_desk_decline_all = get_env("ORDER_DESK_DECLINE_ALL")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid ORDER_DESK_DECLINE_ALL value: {}", e)))?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      catalog_fetch_latency_ms,
      catalog_fetch_fails,
      order_desk_latency_ms,
      order_desk_decline_all,
    })
  }
}
