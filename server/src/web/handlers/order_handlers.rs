// storefront_server/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

/// Lists every order the desk has accepted, oldest first.
///
/// The ledger is global rather than session-scoped, matching the mock
/// order desk's bookkeeping; declined submissions never reach it.
#[instrument(name = "handler::list_orders", skip(app_state))]
pub async fn list_orders_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let orders = app_state.order_desk.accepted_orders();
  info!("Serving {} accepted orders.", orders.len());

  Ok(HttpResponse::Ok().json(json!({
      "message": "Orders fetched successfully.",
      "orders": orders
  })))
}
