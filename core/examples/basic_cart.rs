// storefront/examples/basic_cart.rs

use storefront::{format_cents, Cart, Catalog, Product};
use tracing::info;

fn main() {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Cart Example ---");

  // 1. Build a catalog the way your fetch layer would, once resolved.
  let catalog = Catalog::from_products(vec![
    Product {
      id: 1,
      name: "Wireless Headphones".to_string(),
      description: "High-quality wireless headphones with noise cancellation".to_string(),
      price_cents: 9999,
      image: "https://images.example.com/1.jpg".to_string(),
      category: "Electronics".to_string(),
    },
    Product {
      id: 3,
      name: "Coffee Maker".to_string(),
      description: "Automatic drip coffee maker with programmable timer".to_string(),
      price_cents: 7999,
      image: "https://images.example.com/3.jpg".to_string(),
      category: "Kitchen".to_string(),
    },
  ]);

  // 2. Dispatch user intents into the cart.
  let mut cart = Cart::new();
  cart.add(1);
  cart.add(1); // second add increments the existing line
  cart.add(3);
  cart.set_quantity(3, 2);

  // 3. Render from the derived values.
  for line in cart.lines() {
    let name = catalog
      .product(line.product_id)
      .map(|p| p.name.as_str())
      .unwrap_or("(no longer in catalog)");
    info!("{} x{}", name, line.quantity);
  }
  info!(
    "items: {}, total: ${}",
    cart.item_count(),
    format_cents(cart.total_cents(&catalog))
  );

  // 4. Decrementing to zero removes the line; no special casing needed.
  cart.set_quantity(3, 0);
  info!("after removing the coffee maker: {} line(s)", cart.len());
}
