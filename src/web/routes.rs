use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::web::handlers::{product_handlers, review_handlers, user_handlers};

async fn health_check_handler() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Extractor failures become the same JSON errors the handlers return:
/// malformed or over-specified bodies are 400, non-numeric ids are 404.
fn extractor_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::NotFound(err.to_string()).into()),
    );
}

pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
    extractor_config(cfg);

    cfg.route("/health", web::get().to(health_check_handler))
        .service(
            web::scope("/products")
                .route("", web::get().to(product_handlers::list_products))
                .route("", web::post().to(product_handlers::create_product))
                .route("/seed", web::post().to(product_handlers::seed_products))
                .route("/{id}", web::get().to(product_handlers::get_product))
                .route("/{id}", web::patch().to(product_handlers::update_product))
                .route("/{id}", web::delete().to(product_handlers::delete_product)),
        )
        .service(
            web::scope("/users")
                .route("", web::get().to(user_handlers::list_users))
                .route("", web::post().to(user_handlers::create_user))
                .route("/{id}", web::get().to(user_handlers::get_user))
                .route("/{id}", web::patch().to(user_handlers::update_user))
                .route("/{id}", web::delete().to(user_handlers::delete_user)),
        )
        .service(
            web::scope("/api/integration/companies/{company_id}")
                .route("/rating", web::get().to(review_handlers::company_rating))
                .route("/reviews", web::get().to(review_handlers::company_reviews)),
        );
}
