// storefront_server/src/web/handlers/checkout_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;

// Re-using the SessionShopper extractor from cart_handlers.
use super::cart_handlers::SessionShopper;

// --- Handler Implementation ---

#[instrument(
    name = "handler::checkout",
    skip(app_state, shopper),
    fields(session_id = %shopper.session_id)
)]
pub async fn checkout_handler(
  app_state: web::Data<AppState>,
  shopper: SessionShopper,
) -> Result<HttpResponse, AppError> {
  info!("Checkout attempt by session: {}", shopper.session_id);

  let cart = app_state.carts.cart_for(&shopper.session_id);

  // The coordinator snapshots the cart, submits exactly once, and clears
  // only on confirmed success. Declines and transport failures come back as
  // StorefrontError and map to 402/500 via AppError; the cart is untouched
  // in both cases so the shopper can retry.
  match app_state.coordinator.checkout(&cart, &app_state.catalog).await {
    Ok(result) => {
      info!(
        "Checkout succeeded for session {}. Order ID: {:?}",
        shopper.session_id, result.order_id
      );
      Ok(HttpResponse::Ok().json(json!({
          "message": result.message,
          "success": true,
          "order_id": result.order_id,
      })))
    }
    Err(err) => {
      warn!("Checkout failed for session {}: {}", shopper.session_id, err);
      Err(AppError::from(err))
    }
  }
}
