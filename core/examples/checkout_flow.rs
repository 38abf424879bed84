// storefront/examples/checkout_flow.rs

use storefront::{
  Cart, Catalog, CheckoutCoordinator, OrderGateway, OrderRequest, OrderResult, Product, SharedCart,
  StorefrontError,
};

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// A stand-in for the remote order endpoint. Real callers would put an HTTP
/// client behind this trait; the coordinator does not care.
struct DemoGateway;

#[async_trait]
impl OrderGateway for DemoGateway {
  async fn submit_order(&self, request: &OrderRequest) -> Result<OrderResult, StorefrontError> {
    info!(
      "remote received {} item(s), total {} cents",
      request.items.len(),
      request.total_cents
    );
    tokio::time::sleep(std::time::Duration::from_millis(50)).await; // Simulate network latency
    Ok(OrderResult {
      success: true,
      message: "Order accepted.".to_string(),
      order_id: Some(1001),
    })
  }
}

#[tokio::main]
async fn main() -> Result<(), StorefrontError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Checkout Flow Example ---");

  let catalog = Catalog::from_products(vec![Product {
    id: 2,
    name: "Smart Watch".to_string(),
    description: "Fitness tracking smartwatch with heart rate monitor".to_string(),
    price_cents: 19999,
    image: "https://images.example.com/2.jpg".to_string(),
    category: "Electronics".to_string(),
  }]);

  let cart = SharedCart::new(Cart::new());
  {
    let mut guard = cart.write();
    guard.add(2);
    guard.add(2);
  }

  let coordinator = CheckoutCoordinator::new(Arc::new(DemoGateway));
  let result = coordinator.checkout(&cart, &catalog).await?;

  info!(
    "order {} confirmed: {}",
    result.order_id.unwrap_or_default(),
    result.message
  );
  info!("cart is now empty: {}", cart.read().is_empty());

  Ok(())
}
