// src/lib.rs

//! Storefront: the cart/order state model for a storefront client.
//!
//! The crate covers the part of a storefront with real invariants:
//!  - A read-only `Catalog` built once from a remote fetch.
//!  - A `Cart` of (product, quantity) lines owning all mutation logic
//!    (add, set-quantity, remove) and the derived total/count computations.
//!  - A `SharedCart` handle so the cart stays mutable while a checkout call
//!    is in flight.
//!  - A `CheckoutCoordinator` that snapshots the cart, submits the order to
//!    a pluggable `OrderGateway` exactly once, and clears the cart only on
//!    confirmed success.
//!
//! Rendering, the catalog fetch transport, and the order endpoint itself are
//! external collaborators; they live with the caller.

// Declare modules according to the planned structure
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod gateway;
pub mod order;
pub mod shared;

// --- Re-exports for the Public API ---

// Core types that callers interact with frequently
pub use crate::cart::{Cart, CartLine};
pub use crate::catalog::{format_cents, Catalog, Product, ProductId};
pub use crate::shared::SharedCart;

// Checkout surface
pub use crate::checkout::CheckoutCoordinator;
pub use crate::gateway::OrderGateway;
pub use crate::order::{OrderItem, OrderRequest, OrderResult};

pub use crate::error::{StorefrontError, StorefrontResult};

/*
    Core Workflow:
    1. Resolve the catalog fetch however your view layer does it, then build
       a `Catalog::from_products(products)`.
    2. Hold the shopper's cart in a `SharedCart` and dispatch user intents
       into it: `add`, `set_quantity`, `remove`.
    3. Render from `cart.lines()`, `cart.item_count()` and
       `cart.total_cents(&catalog)`.
    4. For checkout, implement `OrderGateway` over your order endpoint and
       call `CheckoutCoordinator::checkout(&cart, &catalog)`; on `Ok` the
       cart is already cleared, on `Err` it is untouched and retryable.
*/
