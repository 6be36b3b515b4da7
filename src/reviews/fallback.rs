//! Static placeholder data shown when the review service cannot be reached.

use chrono::{Duration, Utc};

use super::models::{CompanyRating, Review, ReviewsPage};

pub fn mock_rating() -> CompanyRating {
    CompanyRating {
        id: 1,
        average_rating: 4.5,
        total_reviews: 127,
        five_star_count: 85,
        four_star_count: 30,
        three_star_count: 8,
        two_star_count: 3,
        one_star_count: 1,
    }
}

fn review(id: i64, rating: u8, title: &str, comment: &str, user: &str, days_ago: i64, verified: bool) -> Review {
    Review {
        id,
        rating,
        title: title.to_string(),
        comment: comment.to_string(),
        user_name: user.to_string(),
        created_at: (Utc::now() - Duration::days(days_ago)).to_rfc3339(),
        verified,
    }
}

pub fn mock_reviews() -> Vec<Review> {
    vec![
        review(1, 5, "Excellent Service!", "I had a wonderful experience with this company. The customer service was outstanding and the product quality exceeded my expectations.", "John Smith", 2, true),
        review(2, 4, "Great Product", "Very satisfied with my purchase. Fast delivery and good quality. Would recommend to others.", "Sarah Johnson", 5, true),
        review(3, 5, "Highly Recommended", "Best decision I made! The team was professional and responsive throughout the entire process.", "Michael Chen", 7, true),
        review(4, 4, "Good Experience", "Overall a positive experience. Minor issues were resolved quickly by their support team.", "Emily Davis", 10, false),
        review(5, 5, "Outstanding!", "Exceeded all my expectations. Will definitely be a returning customer!", "David Wilson", 14, true),
    ]
}

/// One page of [`mock_reviews`], shaped like the remote paginated response.
pub fn mock_reviews_page(page: u32, size: u32) -> ReviewsPage {
    let all = mock_reviews();
    let total = all.len() as u64;
    let size = size.max(1);
    let content = all
        .into_iter()
        .skip(page as usize * size as usize)
        .take(size as usize)
        .collect();

    ReviewsPage {
        content,
        total_elements: total,
        total_pages: total.div_ceil(size as u64) as u32,
        number: page,
        size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_slice_the_fixed_reviews() {
        let first = mock_reviews_page(0, 2);
        assert_eq!(first.content.len(), 2);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.content[0].user_name, "John Smith");

        let last = mock_reviews_page(2, 2);
        assert_eq!(last.content.len(), 1);

        assert!(mock_reviews_page(9, 5).content.is_empty());
    }
}
