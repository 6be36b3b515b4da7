use actix_web::{web, HttpResponse};
use tracing::instrument;

use crate::errors::AppError;
use crate::reviews::ReviewsQuery;
use crate::state::AppState;

/// Company ids are plain slugs; anything else cannot name a company.
fn checked_company_id(company_id: &str) -> Result<&str, AppError> {
    let valid = !company_id.is_empty()
        && company_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(company_id)
    } else {
        Err(AppError::NotFound(format!("Company {} not found", company_id)))
    }
}

/// Relays the remote rating body unchanged.
#[instrument(name = "handler::company_rating", skip(state))]
pub async fn company_rating(
    state: web::Data<AppState>,
    company_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let body = state.reviews.rating(checked_company_id(&company_id)?).await?;
    Ok(HttpResponse::Ok().json(body))
}

#[instrument(name = "handler::company_reviews", skip(state))]
pub async fn company_reviews(
    state: web::Data<AppState>,
    company_id: web::Path<String>,
    query: web::Query<ReviewsQuery>,
) -> Result<HttpResponse, AppError> {
    let body = state
        .reviews
        .reviews(checked_company_id(&company_id)?, &query)
        .await?;
    Ok(HttpResponse::Ok().json(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_ids_are_slugs() {
        assert_eq!(checked_company_id("42").unwrap(), "42");
        assert_eq!(checked_company_id("sneaker-hub_2").unwrap(), "sneaker-hub_2");
        for bad in ["", "999?admin=1#", "1/../admin", "a b", "1%2F"] {
            assert!(matches!(checked_company_id(bad), Err(AppError::NotFound(_))), "{}", bad);
        }
    }
}
