// storefront_server/src/web/mod.rs

// Declare child modules
pub mod handlers;
pub mod routes;

// Re-export so main.rs and the integration tests can configure routing.
pub use routes::configure_app_routes;
