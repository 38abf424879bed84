// storefront/src/cart.rs

//! The Cart Model: an insertion-ordered collection of (product, quantity)
//! lines owning all mutation logic and the derived total/count computations.

use crate::catalog::{Catalog, ProductId};

/// One (product reference, quantity) entry in the shopper's cart.
///
/// `quantity >= 1` holds for every line stored in a `Cart`; a line whose
/// quantity would drop to zero or below is removed instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLine {
  pub product_id: ProductId,
  pub quantity: i32,
}

/// The shopper's cart: at most one line per product id, iterated in the
/// order each product was first added.
///
/// The cart holds product *references* only. It never validates ids against
/// the catalog; resolution happens at derivation time (`total_cents`) and a
/// line whose product has vanished from the catalog simply contributes
/// nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
  lines: Vec<CartLine>,
}

impl Cart {
  pub fn new() -> Self {
    Cart::default()
  }

  /// Adds one unit of `product_id` to the cart.
  ///
  /// If a line for the product already exists its quantity is incremented in
  /// place; otherwise a new line with quantity 1 is appended. The id is not
  /// checked against any catalog, which keeps cart mutation decoupled from
  /// catalog availability.
  pub fn add(&mut self, product_id: ProductId) {
    if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
      line.quantity += 1;
      tracing::debug!(product_id, quantity = line.quantity, "incremented cart line");
    } else {
      self.lines.push(CartLine { product_id, quantity: 1 });
      tracing::debug!(product_id, "created cart line");
    }
  }

  /// Sets the quantity of an existing line to exactly `quantity`.
  ///
  /// A quantity of zero or below removes the line, so stepping controls can
  /// decrement blindly. If no line exists for `product_id` this is a no-op:
  /// only `add` creates lines, which keeps UI quantity stepping anchored to
  /// a line the shopper already has.
  pub fn set_quantity(&mut self, product_id: ProductId, quantity: i32) {
    if quantity <= 0 {
      self.remove(product_id);
      return;
    }
    if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
      line.quantity = quantity;
      tracing::debug!(product_id, quantity, "set cart line quantity");
    }
  }

  /// Deletes the line for `product_id` if present; no-op otherwise.
  pub fn remove(&mut self, product_id: ProductId) {
    let before = self.lines.len();
    self.lines.retain(|l| l.product_id != product_id);
    if self.lines.len() != before {
      tracing::debug!(product_id, "removed cart line");
    }
  }

  /// Empties the cart. Called by the checkout coordinator on confirmed
  /// order success; views should not clear carts themselves.
  pub fn clear(&mut self) {
    self.lines.clear();
  }

  /// Total value of the cart in cents against the given catalog.
  ///
  /// Lines whose product id has no catalog entry contribute 0 rather than
  /// erroring; the cart may legitimately outlive a catalog refresh.
  pub fn total_cents(&self, catalog: &Catalog) -> i64 {
    self
      .lines
      .iter()
      .map(|l| match catalog.product(l.product_id) {
        Some(product) => product.price_cents * i64::from(l.quantity),
        None => 0,
      })
      .sum()
  }

  /// Total unit count across all lines, regardless of whether the products
  /// still resolve in the catalog.
  pub fn item_count(&self) -> i64 {
    self.lines.iter().map(|l| i64::from(l.quantity)).sum()
  }

  /// Lines in first-add order. Quantity updates mutate in place and never
  /// reorder.
  pub fn lines(&self) -> &[CartLine] {
    &self.lines
  }

  /// Owned copy of the current lines, for building an order snapshot.
  pub fn snapshot(&self) -> Vec<CartLine> {
    self.lines.clone()
  }

  /// Number of distinct lines (not units; see `item_count`).
  pub fn len(&self) -> usize {
    self.lines.len()
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }
}
