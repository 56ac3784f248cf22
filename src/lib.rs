//! Persistence layer for the storefront: catalog hierarchy, customers,
//! orders with line items, feedback and promotional campaigns, backed by
//! PostgreSQL through Diesel.
//!
//! The schema is declarative; the only derived-field rules are the uppercase
//! normalization of catalog short names and the line item subtotal, both
//! applied by the repositories on every save.

pub mod db;

pub use db::connection::{
    get_conn, get_pool, init_pool, run_migrations, PgPool, PgPooledConnection,
};
pub use db::models::*;
pub use db::repository::*;
