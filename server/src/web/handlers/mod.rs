// storefront_server/src/web/handlers/mod.rs

// Declare handler modules
pub mod cart_handlers;
pub mod checkout_handlers;
pub mod order_handlers;
pub mod product_handlers;
