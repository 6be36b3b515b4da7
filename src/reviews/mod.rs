//! Proxy for the external review service: rating summary and paginated
//! reviews, authenticated with a cached bearer token.

pub mod cache;
mod client;
pub mod fallback;
pub mod models;

pub use cache::{ResponseCache, TokenCache};
pub use client::ReviewClient;
pub use models::{CompanyRating, Review, ReviewsPage, ReviewsQuery};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream responded with status {0}")]
    Status(u16),

    #[error("token exchange rejected: {0}")]
    TokenRejected(String),

    #[error("invalid review service url: {0}")]
    InvalidUrl(String),
}
