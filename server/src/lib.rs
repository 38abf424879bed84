// storefront_server/src/lib.rs

//! Storefront session service: the view-facing surface over the `storefront`
//! core plus the mock remote collaborators. Split out as a library so the
//! integration tests can assemble the same app the binary runs.

pub mod config;
pub mod errors;
pub mod services;
pub mod state;
pub mod web;

use crate::config::AppConfig;
use crate::services::catalog_source;
use crate::services::OrderDesk;
use crate::state::{AppState, SessionCarts};

use std::sync::Arc;
use storefront::{Catalog, CheckoutCoordinator};

/// Assembles the application state: resolves the one-shot catalog fetch and
/// wires the session cart map and the checkout coordinator to the order
/// desk.
///
/// A failed catalog fetch is not fatal: the server starts with an empty
/// catalog (every cart line then prices at zero) and the failure is the view
/// layer's to surface.
pub async fn build_app_state(config: Arc<AppConfig>) -> AppState {
  let catalog = match catalog_source::fetch_catalog(&config).await {
    Ok(products) => Catalog::from_products(products),
    Err(e) => {
      tracing::error!(error = %e, "Catalog fetch failed; starting with an empty catalog.");
      Catalog::empty()
    }
  };

  let order_desk = Arc::new(OrderDesk::new(config.order_desk_latency_ms, config.order_desk_decline_all));

  AppState {
    catalog: Arc::new(catalog),
    carts: Arc::new(SessionCarts::new()),
    coordinator: Arc::new(CheckoutCoordinator::new(order_desk.clone())),
    order_desk,
    config,
  }
}
