// storefront_server/src/services/order_desk.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use storefront::{OrderGateway, OrderItem, OrderRequest, OrderResult, StorefrontError};
use tracing::{info, instrument, warn};

/// An order the desk accepted, kept in its in-memory ledger and served
/// back by the order-listing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct LedgerEntry {
  pub id: i64,
  pub items: Vec<OrderItem>,
  pub total_cents: i64,
  pub status: String, // "paid" once accepted
  pub created_at: DateTime<Utc>,
}

/// Mock order-submission collaborator.
///
/// Simulates the remote order endpoint: network latency, sequential order
/// ids, and an in-memory ledger of accepted orders. The storefront core only
/// sees this through the `OrderGateway` trait.
pub struct OrderDesk {
  latency_ms: u64,
  decline_all: bool,
  next_order_id: Mutex<i64>,
  ledger: Mutex<Vec<LedgerEntry>>,
}

impl OrderDesk {
  pub fn new(latency_ms: u64, decline_all: bool) -> Self {
    Self {
      latency_ms,
      decline_all,
      next_order_id: Mutex::new(1),
      ledger: Mutex::new(Vec::new()),
    }
  }

  pub fn accepted_orders(&self) -> Vec<LedgerEntry> {
    self.ledger.lock().clone()
  }
}

#[async_trait]
impl OrderGateway for OrderDesk {
  #[instrument(skip(self, request), fields(item_count = request.items.len(), total_cents = request.total_cents))]
  async fn submit_order(&self, request: &OrderRequest) -> Result<OrderResult, StorefrontError> {
    info!("Simulating order submission to the remote order desk");
    tokio::time::sleep(std::time::Duration::from_millis(self.latency_ms)).await; // Simulate processing time

    // Simulate declines: either forced via config, or an arbitrary test
    // condition on the amount.
    if self.decline_all || request.total_cents % 1000 == 123 {
      warn!("Mock order desk DECLINED the order.");
      return Ok(OrderResult {
        success: false,
        message: "Payment was declined by the processor.".to_string(),
        order_id: None,
      });
    }

    let order_id = {
      let mut next = self.next_order_id.lock();
      let id = *next;
      *next += 1;
      id
    };

    self.ledger.lock().push(LedgerEntry {
      id: order_id,
      items: request.items.clone(),
      total_cents: request.total_cents,
      status: "paid".to_string(),
      created_at: Utc::now(),
    });

    info!("Mock order desk accepted order {}.", order_id);
    Ok(OrderResult {
      success: true,
      message: "Payment processed successfully".to_string(),
      order_id: Some(order_id),
    })
  }
}
