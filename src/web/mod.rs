pub mod handlers;
pub mod routes;

use actix_cors::Cors;
use actix_web::http::header;

use crate::config::CorsSettings;

pub use routes::configure_app_routes;

/// Only configured origins may call the API; requests without an Origin
/// header are not CORS requests and pass untouched.
pub fn cors(settings: &CorsSettings) -> Cors {
    let origins = settings.origins();
    Cors::default()
        .allowed_origin_fn(move |origin, _req| {
            let allowed = origin
                .to_str()
                .map_or(false, |o| origins.iter().any(|allowed| allowed == o));
            if !allowed {
                tracing::warn!(origin = ?origin, "Blocked CORS request");
            }
            allowed
        })
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
        .supports_credentials()
        .max_age(3600)
}
