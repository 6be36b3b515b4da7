pub mod connection;
pub mod models;
pub mod repository;
pub mod schema;

pub use connection::{init_pool, SqlitePool};
pub use repository::SqlStore;
