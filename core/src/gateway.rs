// storefront/src/gateway.rs

//! Defines the `OrderGateway` trait: the seam to the remote order-submission
//! collaborator.

use crate::error::StorefrontError;
use crate::order::{OrderRequest, OrderResult};
use async_trait::async_trait;

/// The remote order-submission collaborator, behind a trait so the checkout
/// coordinator stays independent of the transport.
///
/// Implementations return `Ok(OrderResult)` whenever the remote produced a
/// well-formed response, including declines (`success = false`); the `Err`
/// branch is reserved for transport-level failures (collaborator
/// unreachable, malformed response), typically `StorefrontError::Gateway`.
#[async_trait]
pub trait OrderGateway: Send + Sync {
  /// Submits one order request. The coordinator calls this exactly once per
  /// checkout; any retry policy belongs to the caller, not the gateway.
  async fn submit_order(&self, request: &OrderRequest) -> Result<OrderResult, StorefrontError>;
}
