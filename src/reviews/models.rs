use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRating {
    pub id: i64,
    pub average_rating: f64,
    pub total_reviews: u32,
    pub five_star_count: u32,
    pub four_star_count: u32,
    pub three_star_count: u32,
    pub two_star_count: u32,
    pub one_star_count: u32,
}

impl CompanyRating {
    /// Count for a 1..=5 star bucket.
    pub fn star_count(&self, stars: u8) -> u32 {
        match stars {
            5 => self.five_star_count,
            4 => self.four_star_count,
            3 => self.three_star_count,
            2 => self.two_star_count,
            1 => self.one_star_count,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub rating: u8,
    pub title: String,
    pub comment: String,
    pub user_name: String,
    pub created_at: String,
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsPage {
    pub content: Vec<Review>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub number: u32,
    pub size: u32,
}

fn default_page_size() -> u32 {
    5
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewsQuery {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub size: u32,
    /// 0 means no filter, like an absent value.
    #[serde(default, skip_serializing_if = "is_unfiltered")]
    pub rating: Option<u8>,
}

fn is_unfiltered(rating: &Option<u8>) -> bool {
    !matches!(rating, Some(stars) if *stars > 0)
}

impl ReviewsQuery {
    /// The star filter forwarded upstream, if any.
    pub fn rating_filter(&self) -> Option<u8> {
        self.rating.filter(|stars| *stars > 0)
    }
}

impl Default for ReviewsQuery {
    fn default() -> Self {
        ReviewsQuery {
            page: 0,
            size: default_page_size(),
            rating: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ExchangeRequest<'a> {
    pub state: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExchangeResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
