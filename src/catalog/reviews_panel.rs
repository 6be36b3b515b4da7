use futures::future::join;
use serde_json::Value;
use tracing::warn;

use crate::reviews::fallback::{mock_rating, mock_reviews_page};
use crate::reviews::{CompanyRating, Review, ReviewClient, ReviewError, ReviewsPage, ReviewsQuery};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarBucket {
    pub stars: u8,
    pub count: u32,
    pub percentage: u32,
}

/// Rating summary and one page of reviews, ready to render. A failed or
/// undecodable remote call degrades to placeholder data instead of an error.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewsPanel {
    pub rating: CompanyRating,
    pub reviews: Vec<Review>,
    pub page: u32,
    pub total_pages: u32,
    pub rating_is_placeholder: bool,
    pub reviews_are_placeholder: bool,
}

fn decode<T: serde::de::DeserializeOwned>(fetched: Result<Value, ReviewError>) -> Result<T, String> {
    let body = fetched.map_err(|e| e.to_string())?;
    serde_json::from_value(body).map_err(|e| format!("unexpected body: {}", e))
}

impl ReviewsPanel {
    /// Loads the panel for the company the client is configured with.
    pub async fn load_own(client: &ReviewClient, page: u32, size: u32) -> Self {
        Self::load(client, client.company_id(), page, size).await
    }

    pub async fn load(client: &ReviewClient, company_id: &str, page: u32, size: u32) -> Self {
        let query = ReviewsQuery {
            page,
            size,
            rating: None,
        };
        let (rating, reviews) = join(client.rating(company_id), client.reviews(company_id, &query)).await;

        let (rating, rating_is_placeholder) = match decode::<CompanyRating>(rating) {
            Ok(rating) => (rating, false),
            Err(reason) => {
                warn!(%reason, "Using mock rating data");
                (mock_rating(), true)
            }
        };

        let (reviews, reviews_are_placeholder) = match decode::<ReviewsPage>(reviews) {
            Ok(page) => (page, false),
            Err(reason) => {
                warn!(%reason, "Using mock reviews data");
                (mock_reviews_page(page, size), true)
            }
        };

        ReviewsPanel {
            rating,
            page: reviews.number,
            total_pages: reviews.total_pages,
            reviews: reviews.content,
            rating_is_placeholder,
            reviews_are_placeholder,
        }
    }

    /// Star buckets from five down to one.
    pub fn distribution(&self) -> Vec<StarBucket> {
        (1..=5u8)
            .rev()
            .map(|stars| {
                let count = self.rating.star_count(stars);
                StarBucket {
                    stars,
                    count,
                    percentage: rating_percentage(count, self.rating.total_reviews),
                }
            })
            .collect()
    }
}

pub fn rating_percentage(count: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(count) * 100.0 / f64::from(total)).round() as u32
}

pub fn rating_label(stars: u8) -> &'static str {
    match stars {
        5 => "Excellent",
        4 => "Great",
        3 => "Average",
        2 => "Poor",
        1 => "Bad",
        _ => "Unknown",
    }
}
