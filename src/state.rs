use std::sync::Arc;

use crate::config::Settings;
use crate::db::SqlStore;
use crate::errors::{AppError, Result};
use crate::reviews::ReviewClient;
use crate::store::{seed_catalog, MemoryStore, ProductStore, UserStore};

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductStore>,
    pub users: Arc<dyn UserStore>,
    pub reviews: Arc<ReviewClient>,
}

impl AppState {
    pub fn in_memory(reviews: ReviewClient) -> Self {
        let store = Arc::new(MemoryStore::new());
        AppState {
            products: store.clone(),
            users: store,
            reviews: Arc::new(reviews),
        }
    }

    /// Picks the store backend from `database.url` and seeds an empty
    /// catalog when configured to.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let reviews = ReviewClient::new(&settings.reviews)
            .map_err(|e| AppError::Config(format!("review client: {}", e)))?;

        let state = match settings.database.url.as_deref() {
            Some(url) => {
                let store = Arc::new(SqlStore::connect(
                    url,
                    settings.database.pool_size,
                    settings.database.timeout_seconds,
                )?);
                tracing::info!("Using SQLite product store");
                AppState {
                    products: store.clone(),
                    users: store,
                    reviews: Arc::new(reviews),
                }
            }
            None => {
                tracing::info!("Using in-memory product store");
                AppState::in_memory(reviews)
            }
        };

        if settings.database.seed_catalog && state.products.find_all()?.is_empty() {
            let seeded = seed_catalog(state.products.as_ref())?;
            tracing::info!(count = seeded.len(), "Seeded sample catalog");
        }

        Ok(state)
    }
}
