// storefront_server/src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use storefront::StorefrontError;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Session Error: {0}")]
  Session(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Order Declined: {0}")]
  Declined(String),

  #[error("Order Gateway Error: {0}")]
  Gateway(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

// Map core checkout failures onto the HTTP-facing taxonomy: declines stay
// recoverable client errors, transport problems become gateway errors.
impl From<StorefrontError> for AppError {
  fn from(err: StorefrontError) -> Self {
    match err {
      StorefrontError::Declined { message } => AppError::Declined(message),
      StorefrontError::Gateway { source } => AppError::Gateway(source.to_string()),
      StorefrontError::Internal(m) => AppError::Internal(m),
    }
  }
}

// Allow anyhow::Error to be converted into AppError::Internal for
// convenience in handlers using `?` on anyhow-returning helpers.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    AppError::Internal(err.to_string())
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({"error": m})),
      AppError::Session(m) => HttpResponse::Unauthorized().json(json!({"error": m})),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({"error": m})),
      AppError::Declined(m) => HttpResponse::PaymentRequired().json(json!({"error": m})),
      AppError::Gateway(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Order service unavailable", "detail": m}))
      }
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      AppError::Internal(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred", "detail": m}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
