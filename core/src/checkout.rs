// storefront/src/checkout.rs

//! The Checkout Coordinator: snapshots the cart, submits the order request
//! to the remote collaborator exactly once, and clears the cart only on
//! confirmed success.

use crate::catalog::Catalog;
use crate::error::StorefrontError;
use crate::gateway::OrderGateway;
use crate::order::{OrderRequest, OrderResult};
use crate::shared::SharedCart;

use std::sync::Arc;
use tracing::{event, instrument, Level};

/// Coordinates a single-shot checkout against an `OrderGateway`.
///
/// The coordinator is stateless per call: it holds no record of in-flight
/// checkouts and does not deduplicate. Preventing a second submission while
/// one is pending (e.g. disabling the trigger) is the caller's job.
pub struct CheckoutCoordinator {
  gateway: Arc<dyn OrderGateway>,
}

impl CheckoutCoordinator {
  pub fn new(gateway: Arc<dyn OrderGateway>) -> Self {
    Self { gateway }
  }

  /// Runs one checkout for the given cart and catalog.
  ///
  /// Phases:
  /// 1. Snapshot the cart lines and total under a read lock (dropped before
  ///    any await, so the shopper can keep browsing while the call is out).
  /// 2. Submit the resulting `OrderRequest` to the gateway, exactly once.
  /// 3. On `success = true`, clear the cart and return the result. On a
  ///    decline or a transport failure, leave the cart untouched and return
  ///    the error so the shopper may retry.
  ///
  /// An empty cart is well-defined here and produces a zero-line, zero-total
  /// request; rejecting it is the collaborator's policy decision.
  #[instrument(
        name = "CheckoutCoordinator::checkout",
        skip_all,
        fields(line_count = tracing::field::Empty, total_cents = tracing::field::Empty),
        err(Display)
    )]
  pub async fn checkout(&self, cart: &SharedCart, catalog: &Catalog) -> Result<OrderResult, StorefrontError> {
    // Phase 1: snapshot. The guard must not live past this block.
    let request = {
      let guard = cart.read();
      OrderRequest::from_cart_lines(guard.lines(), catalog)
    };
    let current_span = tracing::Span::current();
    current_span.record("line_count", request.items.len());
    current_span.record("total_cents", request.total_cents);

    if request.is_empty() {
      event!(Level::WARN, "Submitting checkout for an empty cart.");
    }
    event!(Level::DEBUG, "Submitting order request to gateway.");

    // Phase 2: the single gateway invocation.
    let result = self.gateway.submit_order(&request).await?;

    // Phase 3: resolve the outcome.
    if result.success {
      cart.write().clear();
      event!(
        Level::INFO,
        order_id = ?result.order_id,
        "Checkout succeeded; cart cleared."
      );
      Ok(result)
    } else {
      event!(
        Level::WARN,
        message = %result.message,
        "Order declined; cart preserved for retry."
      );
      Err(StorefrontError::Declined { message: result.message })
    }
  }
}
