// storefront/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorefrontError {
  /// The order collaborator answered with `success = false`. Recoverable:
  /// the cart is preserved so the shopper may retry.
  #[error("Order declined by the order service: {message}")]
  Declined { message: String },

  /// Transport-level checkout failure: collaborator unreachable or the
  /// response could not be understood. Also recoverable; cart preserved.
  #[error("Order gateway failure. Source: {source}")]
  Gateway {
    #[source]
    source: AnyhowError,
  },

  #[error("Internal storefront error: {0}")]
  Internal(String),
}

// The conversion gateway implementations lean on: an anyhow-wrapped
// transport error becomes a Gateway failure unless it already carries a
// StorefrontError.
impl From<AnyhowError> for StorefrontError {
  fn from(err: AnyhowError) -> Self {
    match err.downcast::<StorefrontError>() {
      Ok(storefront_err) => storefront_err,
      Err(other) => StorefrontError::Gateway { source: other },
    }
  }
}

pub type StorefrontResult<T, E = StorefrontError> = std::result::Result<T, E>;
