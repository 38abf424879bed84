// tests/cart_tests.rs
mod common; // Reference the common module

use common::*;
use storefront::{Cart, CartLine, Catalog};

#[test]
fn test_repeated_add_increments_single_line() {
  setup_tracing();
  let mut cart = Cart::new();

  for _ in 0..5 {
    cart.add(1);
  }

  assert_eq!(cart.len(), 1, "repeated adds must not create duplicate lines");
  assert_eq!(cart.lines()[0], CartLine { product_id: 1, quantity: 5 });
  assert_eq!(cart.item_count(), 5);
}

#[test]
fn test_add_sequence_preserves_first_add_order() {
  setup_tracing();
  let mut cart = Cart::new();

  // cart empty -> add(1) -> add(1) -> add(2)
  cart.add(1);
  cart.add(1);
  cart.add(2);

  assert_eq!(
    cart.lines(),
    &[
      CartLine { product_id: 1, quantity: 2 },
      CartLine { product_id: 2, quantity: 1 },
    ]
  );
  assert_eq!(cart.item_count(), 3);

  // Updating the first line's quantity must mutate in place, not reorder.
  cart.set_quantity(1, 7);
  assert_eq!(cart.lines()[0].product_id, 1);
  assert_eq!(cart.lines()[0].quantity, 7);
  assert_eq!(cart.lines()[1].product_id, 2);
}

#[test]
fn test_set_quantity_zero_and_negative_remove_the_line() {
  setup_tracing();
  let mut cart = Cart::new();
  cart.add(1);
  cart.add(2);

  cart.set_quantity(1, 0);
  assert!(cart.lines().iter().all(|l| l.product_id != 1));

  cart.set_quantity(2, -5);
  assert!(cart.is_empty(), "negative quantity must remove, not store");
}

#[test]
fn test_set_quantity_on_absent_id_is_a_no_op() {
  setup_tracing();
  let mut cart = Cart::new();
  cart.add(1);
  let before = cart.clone();

  // No line for product 5: set_quantity must not create one.
  cart.set_quantity(5, 3);
  assert_eq!(cart, before);
}

#[test]
fn test_remove_on_absent_id_is_a_no_op() {
  setup_tracing();
  let mut cart = Cart::new();
  cart.add(1);
  let before = cart.clone();

  cart.remove(99);
  assert_eq!(cart, before);
}

#[test]
fn test_total_over_resolvable_products() {
  setup_tracing();
  let catalog = Catalog::from_products(vec![product(1, "Gadget", 999)]);
  let mut cart = Cart::new();
  cart.add(1);
  cart.set_quantity(1, 3);

  // price 9.99 x qty 3 = 29.97
  assert_eq!(cart.total_cents(&catalog), 2997);
}

#[test]
fn test_total_tolerates_dangling_references() {
  setup_tracing();
  let mut cart = Cart::new();
  cart.add(1);
  cart.add(1);

  // Product 1 was removed from the catalog after being added to the cart.
  let refreshed = Catalog::empty();
  assert_eq!(cart.total_cents(&refreshed), 0);
  assert_eq!(cart.item_count(), 2, "item count ignores catalog resolvability");
}

#[test]
fn test_total_mixes_resolvable_and_dangling_lines() {
  setup_tracing();
  let catalog = sample_catalog();
  let mut cart = Cart::new();
  cart.add(1); // 9999 in the sample catalog
  cart.add(42); // not in the catalog
  cart.add(42);

  assert_eq!(cart.total_cents(&catalog), 9999);
  assert_eq!(cart.item_count(), 3);
}

#[test]
fn test_clear_empties_all_lines() {
  setup_tracing();
  let mut cart = Cart::new();
  cart.add(1);
  cart.add(2);
  cart.add(3);

  cart.clear();
  assert!(cart.is_empty());
  assert_eq!(cart.item_count(), 0);
  assert_eq!(cart.total_cents(&sample_catalog()), 0);
}

#[test]
fn test_derived_values_do_not_mutate_state() {
  setup_tracing();
  let catalog = sample_catalog();
  let mut cart = Cart::new();
  cart.add(1);
  cart.add(2);
  let before = cart.clone();

  let _ = cart.total_cents(&catalog);
  let _ = cart.item_count();
  let _ = cart.snapshot();

  assert_eq!(cart, before);
}
