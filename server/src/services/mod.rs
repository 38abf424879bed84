// storefront_server/src/services/mod.rs

//! The remote collaborators the storefront consumes, materialized as mocks:
//! the one-shot catalog source and the order-submission desk.

pub mod catalog_source;
pub mod order_desk;

pub use order_desk::OrderDesk;
