// tests/checkout_tests.rs
mod common; // Reference the common module

use common::*;
use storefront::{CheckoutCoordinator, OrderItem, SharedCart, StorefrontError};

#[tokio::test]
async fn test_checkout_success_clears_cart_and_returns_order_id() {
  setup_tracing();
  let catalog = sample_catalog();
  let cart = shared_cart_with(&[(1, 2), (2, 1)]);
  let gateway = RecordingGateway::new(GatewayScript::Accept { order_id: 41 });
  let coordinator = CheckoutCoordinator::new(gateway.clone());

  let result = coordinator.checkout(&cart, &catalog).await.expect("checkout should succeed");

  assert!(result.success);
  assert_eq!(result.order_id, Some(41));
  assert!(cart.read().is_empty(), "success must clear the cart");
  assert_eq!(gateway.call_count(), 1, "gateway must be invoked exactly once");
}

#[tokio::test]
async fn test_checkout_snapshot_carries_lines_and_total() {
  setup_tracing();
  let catalog = sample_catalog();
  let cart = shared_cart_with(&[(1, 2), (3, 1)]);
  let gateway = RecordingGateway::new(GatewayScript::Accept { order_id: 1 });
  let coordinator = CheckoutCoordinator::new(gateway.clone());

  coordinator.checkout(&cart, &catalog).await.expect("checkout should succeed");

  let request = gateway.last_request();
  assert_eq!(
    request.items,
    vec![
      OrderItem { product_id: 1, quantity: 2 },
      OrderItem { product_id: 3, quantity: 1 },
    ]
  );
  // 2 x 9999 + 1 x 7999
  assert_eq!(request.total_cents, 27997);
}

#[tokio::test]
async fn test_declined_checkout_preserves_cart_and_surfaces_message() {
  setup_tracing();
  let catalog = sample_catalog();
  let cart = shared_cart_with(&[(1, 2)]);
  let before = cart.read().clone();
  let gateway = RecordingGateway::new(GatewayScript::Decline {
    message: "Card verification failed.",
  });
  let coordinator = CheckoutCoordinator::new(gateway.clone());

  let err = coordinator
    .checkout(&cart, &catalog)
    .await
    .expect_err("decline must surface as an error");

  match err {
    StorefrontError::Declined { message } => assert_eq!(message, "Card verification failed."),
    other => panic!("Expected StorefrontError::Declined, got {:?}", other),
  }
  assert_eq!(*cart.read(), before, "declined checkout must leave the cart untouched");
  assert_eq!(gateway.call_count(), 1);
}

#[tokio::test]
async fn test_transport_failure_preserves_cart() {
  setup_tracing();
  let catalog = sample_catalog();
  let cart = shared_cart_with(&[(2, 3)]);
  let before = cart.read().clone();
  let gateway = RecordingGateway::new(GatewayScript::TransportFailure {
    message: "connection reset by peer",
  });
  let coordinator = CheckoutCoordinator::new(gateway.clone());

  let err = coordinator
    .checkout(&cart, &catalog)
    .await
    .expect_err("transport failure must surface as an error");

  assert!(matches!(err, StorefrontError::Gateway { .. }));
  assert_eq!(*cart.read(), before);
}

#[tokio::test]
async fn test_empty_cart_checkout_submits_zero_total_request() {
  setup_tracing();
  let catalog = sample_catalog();
  let cart = SharedCart::default();
  let gateway = RecordingGateway::new(GatewayScript::Accept { order_id: 7 });
  let coordinator = CheckoutCoordinator::new(gateway.clone());

  // Well-defined client-side; acceptance is the collaborator's policy.
  let result = coordinator.checkout(&cart, &catalog).await.expect("gateway accepted");

  assert!(result.success);
  let request = gateway.last_request();
  assert!(request.items.is_empty());
  assert_eq!(request.total_cents, 0);
}

#[tokio::test]
async fn test_checkout_with_dangling_lines_prices_them_at_zero() {
  setup_tracing();
  let catalog = sample_catalog();
  let cart = shared_cart_with(&[(1, 1), (42, 4)]);
  let gateway = RecordingGateway::new(GatewayScript::Accept { order_id: 9 });
  let coordinator = CheckoutCoordinator::new(gateway.clone());

  coordinator.checkout(&cart, &catalog).await.expect("checkout should succeed");

  let request = gateway.last_request();
  // The dangling line still ships in the payload; only its value is zero.
  assert_eq!(request.items.len(), 2);
  assert_eq!(request.total_cents, 9999);
}

#[tokio::test]
async fn test_cart_remains_mutable_after_failed_checkout() {
  setup_tracing();
  let catalog = sample_catalog();
  let cart = shared_cart_with(&[(1, 1)]);
  let gateway = RecordingGateway::new(GatewayScript::Decline { message: "Declined." });
  let coordinator = CheckoutCoordinator::new(gateway.clone());

  let _ = coordinator.checkout(&cart, &catalog).await;

  // The shopper keeps shopping and retries.
  cart.write().add(2);
  let retry_gateway = RecordingGateway::new(GatewayScript::Accept { order_id: 3 });
  let retry = CheckoutCoordinator::new(retry_gateway.clone());
  retry.checkout(&cart, &catalog).await.expect("retry should succeed");

  assert_eq!(retry_gateway.last_request().items.len(), 2);
  assert!(cart.read().is_empty());
}
