// storefront/src/shared.rs

use crate::cart::Cart;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// Shared-ownership handle to a shopper's `Cart`, using parking_lot::RwLock
/// for interior mutability.
///
/// This is the explicitly owned, passed-by-reference cart instance the rest
/// of the system works against; there is no ambient singleton. Mutations
/// within one session are serialized by the caller's intent dispatch, but
/// the cart must stay mutable while a checkout call is in flight, so the
/// coordinator only holds the lock for its snapshot and its final clear.
///
/// IMPORTANT: Lock guards obtained from this struct are blocking and MUST
/// NOT be held across `.await` suspension points in asynchronous code.
#[derive(Debug)]
pub struct SharedCart(Arc<RwLock<Cart>>);

impl SharedCart {
  pub fn new(cart: Cart) -> Self {
    SharedCart(Arc::new(RwLock::new(cart)))
  }

  /// Acquires a read lock.
  /// The returned guard MUST be dropped before any `.await` point.
  pub fn read(&self) -> RwLockReadGuard<'_, Cart> {
    self.0.read()
  }

  /// Acquires a write lock.
  /// The returned guard MUST be dropped before any `.await` point.
  pub fn write(&self) -> RwLockWriteGuard<'_, Cart> {
    self.0.write()
  }

  /// Attempts to acquire a read lock without blocking.
  pub fn try_read(&self) -> Option<RwLockReadGuard<'_, Cart>> {
    self.0.try_read()
  }

  /// Attempts to acquire a write lock without blocking.
  pub fn try_write(&self) -> Option<RwLockWriteGuard<'_, Cart>> {
    self.0.try_write()
  }
}

impl Clone for SharedCart {
  fn clone(&self) -> Self {
    SharedCart(Arc::clone(&self.0))
  }
}

impl Default for SharedCart {
  fn default() -> Self {
    SharedCart::new(Cart::new())
  }
}
