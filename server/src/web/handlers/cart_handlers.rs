// storefront_server/src/web/handlers/cart_handlers.rs

use actix_web::{web, FromRequest, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;
use storefront::{format_cents, CartLine, ProductId};

// --- Session Extractor ---
// The shopper session is an opaque id supplied by the client; one cart
// exists per session. There is no user account behind it.
#[derive(Debug)]
pub struct SessionShopper {
  pub session_id: String,
}

impl FromRequest for SessionShopper {
  type Error = AppError; // Use your app's error type
  type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    if let Some(session_header) = req.headers().get("X-Session-ID") {
      if let Ok(session_id) = session_header.to_str() {
        if !session_id.is_empty() {
          return futures_util::future::ready(Ok(SessionShopper {
            session_id: session_id.to_string(),
          }));
        }
      }
    }
    warn!("SessionShopper extractor: Missing or invalid X-Session-ID header.");
    futures_util::future::ready(Err(AppError::Session(
      "Shopper session required. Missing or invalid X-Session-ID header.".to_string(),
    )))
  }
}

// --- Request / Response DTOs ---

#[derive(Deserialize, Debug)]
pub struct AddToCartPayload {
  pub product_id: ProductId,
}

#[derive(Deserialize, Debug)]
pub struct SetQuantityPayload {
  pub product_id: ProductId,
  pub quantity: i32,
}

#[derive(Deserialize, Debug)]
pub struct RemoveFromCartPayload {
  pub product_id: ProductId,
}

#[derive(Serialize, Debug)]
pub struct CartView {
  pub lines: Vec<CartLineView>,
  pub item_count: i64,
  pub total_cents: i64,
  pub total_display: String,
}

#[derive(Serialize, Debug)]
pub struct CartLineView {
  pub product_id: ProductId,
  pub quantity: i32,
  // Name resolves against the current catalog; a dangling line renders
  // without one rather than erroring.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
}

// Renders the session cart against the catalog; shared by every cart
// mutation handler so each intent answers with the fresh view state.
pub fn render_cart(app_state: &AppState, lines: &[CartLine], item_count: i64, total_cents: i64) -> CartView {
  CartView {
    lines: lines
      .iter()
      .map(|l| CartLineView {
        product_id: l.product_id,
        quantity: l.quantity,
        name: app_state.catalog.product(l.product_id).map(|p| p.name.clone()),
      })
      .collect(),
    item_count,
    total_cents,
    total_display: format_cents(total_cents),
  }
}

fn cart_view_for(app_state: &AppState, session_id: &str) -> CartView {
  let cart = app_state.carts.cart_for(session_id);
  let guard = cart.read();
  render_cart(
    app_state,
    guard.lines(),
    guard.item_count(),
    guard.total_cents(&app_state.catalog),
  )
}

// --- Handler Implementations ---

#[instrument(
    name = "handler::view_cart",
    skip(app_state, shopper),
    fields(session_id = %shopper.session_id)
)]
pub async fn view_cart_handler(
  app_state: web::Data<AppState>,
  shopper: SessionShopper,
) -> Result<HttpResponse, AppError> {
  Ok(HttpResponse::Ok().json(cart_view_for(app_state.get_ref(), &shopper.session_id)))
}

#[instrument(
    name = "handler::add_to_cart",
    skip(app_state, req_payload, shopper),
    fields(session_id = %shopper.session_id, product_id = %req_payload.product_id)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<AddToCartPayload>,
  shopper: SessionShopper,
) -> Result<HttpResponse, AppError> {
  info!(
    "Add to cart for session {}, product {}",
    shopper.session_id, req_payload.product_id
  );

  // Deliberately no catalog validation here: cart mutation is decoupled
  // from catalog availability (the line prices at zero until it resolves).
  let cart = app_state.carts.cart_for(&shopper.session_id);
  cart.write().add(req_payload.product_id);

  Ok(HttpResponse::Ok().json(json!({
      "message": "Item added to cart successfully.",
      "cart": cart_view_for(app_state.get_ref(), &shopper.session_id)
  })))
}

#[instrument(
    name = "handler::set_quantity",
    skip(app_state, req_payload, shopper),
    fields(session_id = %shopper.session_id, product_id = %req_payload.product_id, quantity = %req_payload.quantity)
)]
pub async fn set_quantity_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<SetQuantityPayload>,
  shopper: SessionShopper,
) -> Result<HttpResponse, AppError> {
  info!(
    "Set quantity for session {}, product {}, quantity {}",
    shopper.session_id, req_payload.product_id, req_payload.quantity
  );

  // quantity <= 0 removes the line; an absent line is a no-op. Both are
  // normal outcomes, never errors, so stepping controls stay trivially safe.
  let cart = app_state.carts.cart_for(&shopper.session_id);
  cart.write().set_quantity(req_payload.product_id, req_payload.quantity);

  Ok(HttpResponse::Ok().json(json!({
      "message": "Cart updated.",
      "cart": cart_view_for(app_state.get_ref(), &shopper.session_id)
  })))
}

#[instrument(
    name = "handler::remove_from_cart",
    skip(app_state, req_payload, shopper),
    fields(session_id = %shopper.session_id, product_id = %req_payload.product_id)
)]
pub async fn remove_from_cart_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<RemoveFromCartPayload>,
  shopper: SessionShopper,
) -> Result<HttpResponse, AppError> {
  info!(
    "Remove from cart for session {}, product {}",
    shopper.session_id, req_payload.product_id
  );

  let cart = app_state.carts.cart_for(&shopper.session_id);
  cart.write().remove(req_payload.product_id);

  Ok(HttpResponse::Ok().json(json!({
      "message": "Item removed from cart.",
      "cart": cart_view_for(app_state.get_ref(), &shopper.session_id)
  })))
}
