//! Authoritative product and user collections.
//!
//! Two backends implement the same traits: [`MemoryStore`] keeps records in
//! process memory, [`crate::db::SqlStore`] persists them through diesel.
//! Both return records ordered by id and never hand out an id twice.

mod filter;
mod memory;

pub use filter::{matches_category, matches_search};
pub use memory::MemoryStore;

use thiserror::Error;

use crate::models::{NewProduct, NewUser, Product, ProductChanges, User, UserChanges};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Product with ID {0} not found")]
    ProductNotFound(i32),

    #[error("User with ID {0} not found")]
    UserNotFound(i32),

    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("failed to apply schema: {0}")]
    Migration(String),

    #[error("stored list could not be decoded: {0}")]
    Encoding(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

pub trait ProductStore: Send + Sync {
    fn create(&self, input: NewProduct) -> StoreResult<Product>;

    fn find_all(&self) -> StoreResult<Vec<Product>>;

    fn find_one(&self, id: i32) -> StoreResult<Product>;

    fn update(&self, id: i32, changes: ProductChanges) -> StoreResult<Product>;

    fn remove(&self, id: i32) -> StoreResult<()>;

    /// Case-insensitive substring match on `category`.
    fn find_by_category(&self, category: &str) -> StoreResult<Vec<Product>> {
        let mut products = self.find_all()?;
        products.retain(|p| matches_category(p, category));
        Ok(products)
    }

    /// Case-insensitive substring match on name, description or category.
    fn search(&self, query: &str) -> StoreResult<Vec<Product>> {
        let mut products = self.find_all()?;
        products.retain(|p| matches_search(p, query));
        Ok(products)
    }
}

pub trait UserStore: Send + Sync {
    fn create(&self, input: NewUser) -> StoreResult<User>;

    fn find_all(&self) -> StoreResult<Vec<User>>;

    fn find_one(&self, id: i32) -> StoreResult<User>;

    fn update(&self, id: i32, changes: UserChanges) -> StoreResult<User>;

    fn remove(&self, id: i32) -> StoreResult<()>;
}

/// Inserts the sample catalog and returns the created records.
pub fn seed_catalog(store: &dyn ProductStore) -> StoreResult<Vec<Product>> {
    crate::mock_data::sample_catalog()
        .into_iter()
        .map(|product| store.create(product))
        .collect()
}
