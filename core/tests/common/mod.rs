// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use storefront::{
  Cart, Catalog, OrderGateway, OrderRequest, OrderResult, Product, ProductId, SharedCart, StorefrontError,
};

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use tracing::Level;

// --- Common Fixtures ---

pub fn product(id: ProductId, name: &str, price_cents: i64) -> Product {
  Product {
    id,
    name: name.to_string(),
    description: format!("{} (test fixture)", name),
    price_cents,
    image: format!("https://images.example.com/{}.jpg", id),
    category: "Test".to_string(),
  }
}

/// Small catalog mirroring the remote seed data: three products with known
/// prices.
pub fn sample_catalog() -> Catalog {
  Catalog::from_products(vec![
    product(1, "Wireless Headphones", 9999),
    product(2, "Smart Watch", 19999),
    product(3, "Coffee Maker", 7999),
  ])
}

pub fn shared_cart_with(lines: &[(ProductId, i32)]) -> SharedCart {
  let mut cart = Cart::new();
  for &(id, qty) in lines {
    cart.add(id);
    cart.set_quantity(id, qty);
  }
  SharedCart::new(cart)
}

// --- Scriptable Order Gateway ---

/// What the `RecordingGateway` should answer with on the next call.
#[derive(Clone, Debug)]
pub enum GatewayScript {
  Accept { order_id: i64 },
  Decline { message: &'static str },
  TransportFailure { message: &'static str },
}

/// Gateway double that records every request it receives and answers from a
/// script, so tests can assert both the submitted payload and the exact
/// number of remote calls.
pub struct RecordingGateway {
  script: GatewayScript,
  pub calls: AtomicUsize,
  pub requests: Mutex<Vec<OrderRequest>>,
}

impl RecordingGateway {
  pub fn new(script: GatewayScript) -> Arc<Self> {
    Arc::new(Self {
      script,
      calls: AtomicUsize::new(0),
      requests: Mutex::new(Vec::new()),
    })
  }

  pub fn call_count(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }

  pub fn last_request(&self) -> OrderRequest {
    self.requests.lock().last().cloned().expect("gateway was never called")
  }
}

#[async_trait]
impl OrderGateway for RecordingGateway {
  async fn submit_order(&self, request: &OrderRequest) -> Result<OrderResult, StorefrontError> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    self.requests.lock().push(request.clone());
    match &self.script {
      GatewayScript::Accept { order_id } => Ok(OrderResult {
        success: true,
        message: "Order accepted.".to_string(),
        order_id: Some(*order_id),
      }),
      GatewayScript::Decline { message } => Ok(OrderResult {
        success: false,
        message: (*message).to_string(),
        order_id: None,
      }),
      GatewayScript::TransportFailure { message } => {
        Err(StorefrontError::from(anyhow::anyhow!("{}", message)))
      }
    }
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
