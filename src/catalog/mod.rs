//! Storefront-side counterpart of the product API: fetches the records the
//! catalog pages render and holds their display state.

mod client;
mod reviews_panel;
mod selection;

pub use client::{CatalogClient, CatalogError, ProductFilter};
pub use reviews_panel::{rating_label, rating_percentage, ReviewsPanel, StarBucket};
pub use selection::ProductSelection;
