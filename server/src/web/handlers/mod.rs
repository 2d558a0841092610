// server/src/web/handlers/mod.rs

pub mod admin_handlers;
pub mod product_handlers;
pub mod stats_handlers;
