// core/src/lib.rs

//! Catalog: the product-catalog domain used by the catalog server.
//!
//! The crate covers:
//!  - The `Product` record and the explicit `NewProduct` constructor.
//!  - Filtered, sorted, paginated listing (`ProductQuery`, `SortKey`).
//!  - Whole-table statistics computed in a single pass (`CatalogStats`).
//!  - A SQLite-backed store with a per-connection repository (`Products`).
//!  - The fixed sample data used by the debug seed endpoint.

pub mod error;
pub mod models;
pub mod query;
pub mod seed;
pub mod stats;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::error::{CatalogError, CatalogResult};
pub use crate::models::{NewProduct, Product};
pub use crate::query::{PriceBounds, ProductQuery, SortKey};
pub use crate::stats::{CatalogStats, CategoryStats, PriceRanges, StatsAccumulator};
pub use crate::store::{Products, StoreConfig};
