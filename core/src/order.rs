// storefront/src/order.rs

//! Wire types for the order-submission collaborator.
//!
//! The shapes here follow the external contract (`{ items, total }` in,
//! `{ success, message, order_id }` out); they are transient snapshots, not
//! state owned by this crate.

use crate::cart::CartLine;
use crate::catalog::{Catalog, ProductId};
use serde::{Deserialize, Serialize};

/// One item of an order request: a product reference and how many units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
  pub product_id: ProductId,
  pub quantity: i32,
}

impl From<CartLine> for OrderItem {
  fn from(line: CartLine) -> Self {
    OrderItem {
      product_id: line.product_id,
      quantity: line.quantity,
    }
  }
}

/// Snapshot of the cart plus its computed total at the moment checkout was
/// invoked. Handed to the order gateway; never persisted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
  pub items: Vec<OrderItem>,
  pub total_cents: i64,
}

impl OrderRequest {
  /// Builds a request from the given cart lines and catalog.
  ///
  /// An empty cart yields a zero-line, zero-total request; whether that is
  /// accepted end-to-end is the collaborator's policy, not enforced here.
  pub fn from_cart_lines(lines: &[CartLine], catalog: &Catalog) -> Self {
    let total_cents = lines
      .iter()
      .map(|l| {
        catalog
          .product(l.product_id)
          .map_or(0, |p| p.price_cents * i64::from(l.quantity))
      })
      .sum();
    OrderRequest {
      items: lines.iter().copied().map(OrderItem::from).collect(),
      total_cents,
    }
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }
}

/// The order collaborator's response: success flag, a human-readable
/// message, and (on success) the identifier the remote assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResult {
  pub success: bool,
  pub message: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub order_id: Option<i64>,
}
