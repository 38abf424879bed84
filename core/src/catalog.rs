// storefront/src/catalog.rs

//! The read-only Catalog Store: products fetched once from a remote source.

use serde::{Deserialize, Serialize};

/// Integer key identifying a product. Assigned by the external catalog;
/// never minted by this crate.
pub type ProductId = u32;

/// A purchasable product, as delivered by the catalog fetch.
///
/// Immutable for the lifetime of the `Catalog` holding it. Prices are
/// integer cents to keep total computation exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
  pub id: ProductId,
  pub name: String,
  pub description: String,
  pub price_cents: i64,
  pub image: String,
  pub category: String,
}

/// The read-only set of purchasable products for the session.
///
/// Built once from the resolved catalog fetch and never mutated afterwards.
/// Lookups are by `ProductId`; iteration preserves the order the remote
/// source delivered.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
  products: Vec<Product>,
}

impl Catalog {
  /// Builds a catalog from an already-fetched product list.
  ///
  /// The fetch itself (and its failure handling) belongs to the caller; an
  /// empty list is a valid catalog and every cart line is then a dangling
  /// reference.
  pub fn from_products(products: Vec<Product>) -> Self {
    Catalog { products }
  }

  /// Creates an empty catalog, the state before (or after a failed) fetch.
  pub fn empty() -> Self {
    Catalog::default()
  }

  /// Looks up a product by id. `None` is not an error: cart lines may
  /// legitimately reference products a refreshed catalog no longer carries.
  pub fn product(&self, id: ProductId) -> Option<&Product> {
    self.products.iter().find(|p| p.id == id)
  }

  /// Iterates products in the order the remote source delivered them.
  pub fn iter(&self) -> impl Iterator<Item = &Product> {
    self.products.iter()
  }

  pub fn len(&self) -> usize {
    self.products.len()
  }

  pub fn is_empty(&self) -> bool {
    self.products.is_empty()
  }
}

/// Renders an amount of integer cents as a dollar string, e.g. `2997` ->
/// `"29.97"`. Display-only helper; arithmetic stays in cents.
pub fn format_cents(cents: i64) -> String {
  let sign = if cents < 0 { "-" } else { "" };
  let abs = cents.unsigned_abs();
  format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}
