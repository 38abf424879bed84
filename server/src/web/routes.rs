// storefront_server/src/web/routes.rs

use actix_web::web;

use crate::errors::AppError;
use crate::state::AppState;

// Simple health check; the storefront has no downstream dependency that
// needs probing once the catalog fetch has resolved. Reports how many
// shopper sessions have materialized a cart.
async fn health_check_handler(app_state: web::Data<AppState>) -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({
      "status": "ok",
      "sessions": app_state.carts.session_count(),
  }))
}

// This function is called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  // Surface malformed JSON payloads through the application's own error
  // taxonomy instead of actix's default deserialize response.
  cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
    AppError::Validation(format!("Invalid request payload: {}", err)).into()
  }));

  cfg.service(
    web::scope("/api/v1")
      // Health Check Route
      .route("/health", web::get().to(health_check_handler))
      // Catalog Routes (read-only)
      .service(
        web::scope("/products")
          .route(
            "",
            web::get().to(crate::web::handlers::product_handlers::list_products_handler),
          )
          .route(
            "/{product_id}",
            web::get().to(crate::web::handlers::product_handlers::get_product_handler),
          ),
      )
      // Cart Routes
      // The shopper session comes from the SessionShopper extractor.
      .service(
        web::scope("/cart")
          .route("", web::get().to(crate::web::handlers::cart_handlers::view_cart_handler))
          .route(
            "/add",
            web::post().to(crate::web::handlers::cart_handlers::add_to_cart_handler),
          )
          .route(
            "/quantity",
            web::post().to(crate::web::handlers::cart_handlers::set_quantity_handler),
          )
          .route(
            "/remove",
            web::post().to(crate::web::handlers::cart_handlers::remove_from_cart_handler),
          ),
      )
      // Checkout Route
      .service(
        web::scope("/checkout").route(
          "",
          web::post().to(crate::web::handlers::checkout_handlers::checkout_handler),
        ),
      )
      // Order Listing Route (accepted orders, oldest first)
      .route(
        "/orders",
        web::get().to(crate::web::handlers::order_handlers::list_orders_handler),
      ),
  );
}
