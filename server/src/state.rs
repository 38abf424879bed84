// storefront_server/src/state.rs

use crate::config::AppConfig;
use crate::services::OrderDesk;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use storefront::{Catalog, CheckoutCoordinator, SharedCart};

/// One cart per shopper session, created on first touch.
///
/// Sessions never share carts; the only lock contention on a single cart is
/// a shopper's own serialized intents plus the checkout snapshot/clear.
#[derive(Default)]
pub struct SessionCarts {
  carts: RwLock<HashMap<String, SharedCart>>,
}

impl SessionCarts {
  pub fn new() -> Self {
    SessionCarts::default()
  }

  /// Returns the session's cart handle, creating an empty cart if this is
  /// the session's first intent.
  pub fn cart_for(&self, session_id: &str) -> SharedCart {
    if let Some(cart) = self.carts.read().get(session_id) {
      return cart.clone();
    }
    let mut writer = self.carts.write();
    writer
      .entry(session_id.to_string())
      .or_insert_with(SharedCart::default)
      .clone()
  }

  pub fn session_count(&self) -> usize {
    self.carts.read().len()
  }
}

#[derive(Clone)]
pub struct AppState {
  pub catalog: Arc<Catalog>,
  pub carts: Arc<SessionCarts>,
  pub coordinator: Arc<CheckoutCoordinator>,
  // The coordinator only sees the desk as a `dyn OrderGateway`; this handle
  // keeps the concrete type around for the order-listing endpoint.
  pub order_desk: Arc<OrderDesk>,
  pub config: Arc<AppConfig>, // Share loaded config
}
