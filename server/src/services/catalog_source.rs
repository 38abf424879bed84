// storefront_server/src/services/catalog_source.rs

use crate::config::AppConfig;
use crate::errors::{AppError, Result as AppResult};
use storefront::Product;
use tracing::{info, instrument};

/// Simulates the remote catalog fetch: a request with no parameters that
/// resolves to the ordered product list. Called once at startup; the
/// resulting `Catalog` is read-only for the rest of the session.
#[instrument(skip(config), fields(latency_ms = config.catalog_fetch_latency_ms))]
pub async fn fetch_catalog(config: &AppConfig) -> AppResult<Vec<Product>> {
  info!("Simulating remote catalog fetch");
  tokio::time::sleep(std::time::Duration::from_millis(config.catalog_fetch_latency_ms)).await; // Simulate network latency

  if config.catalog_fetch_fails {
    tracing::warn!("Simulated catalog fetch failure (CATALOG_FETCH_FAILS is set)");
    return Err(AppError::Internal("Simulated catalog fetch failure".to_string()));
  }

  let products = sample_products();
  info!("Catalog fetch resolved with {} products.", products.len());
  Ok(products)
}

/// The remote source's seed data: five products across four categories.
pub fn sample_products() -> Vec<Product> {
  vec![
    Product {
      id: 1,
      name: "Wireless Headphones".to_string(),
      description: "High-quality wireless headphones with noise cancellation".to_string(),
      price_cents: 9999,
      image: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=300&h=200&fit=crop".to_string(),
      category: "Electronics".to_string(),
    },
    Product {
      id: 2,
      name: "Smart Watch".to_string(),
      description: "Fitness tracking smartwatch with heart rate monitor".to_string(),
      price_cents: 19999,
      image: "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=300&h=200&fit=crop".to_string(),
      category: "Electronics".to_string(),
    },
    Product {
      id: 3,
      name: "Coffee Maker".to_string(),
      description: "Automatic drip coffee maker with programmable timer".to_string(),
      price_cents: 7999,
      image: "https://images.unsplash.com/photo-1495474472287-4d71bcdd2085?w=300&h=200&fit=crop".to_string(),
      category: "Kitchen".to_string(),
    },
    Product {
      id: 4,
      name: "Running Shoes".to_string(),
      description: "Comfortable running shoes with breathable mesh".to_string(),
      price_cents: 12999,
      image: "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=300&h=200&fit=crop".to_string(),
      category: "Sports".to_string(),
    },
    Product {
      id: 5,
      name: "Laptop Backpack".to_string(),
      description: "Durable laptop backpack with multiple compartments".to_string(),
      price_cents: 4999,
      image: "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=300&h=200&fit=crop".to_string(),
      category: "Accessories".to_string(),
    },
  ]
}
