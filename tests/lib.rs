use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::{json, Value};

use storefront::config::ReviewSettings;
use storefront::reviews::ReviewClient;
use storefront::state::AppState;
use storefront::web::configure_app_routes;

fn app_state() -> web::Data<AppState> {
    let reviews = ReviewClient::new(&ReviewSettings {
        base_url: "http://127.0.0.1:9".to_string(),
        state_token: None,
        company_id: "1".to_string(),
        timeout_millis: 500,
        token_ttl_seconds: 3600,
        cache_ttl_seconds: 0,
    })
    .unwrap();
    web::Data::new(AppState::in_memory(reviews))
}

fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect()
}

#[actix_web::test]
async fn test_create_product_assigns_id_and_defaults() {
    let app = test::init_service(
        App::new()
            .app_data(app_state())
            .configure(configure_app_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/products")
        .set_json(json!({"name": "Test Shoe", "price": "100", "image": "x"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Test Shoe");
    assert_eq!(body["price"], "100");
    assert_eq!(body["stock"], 0);
    assert!(body.get("sizes").is_none());
    assert!(body.get("colors").is_none());
    assert_eq!(body["createdAt"], body["updatedAt"]);

    let req = test::TestRequest::post()
        .uri("/products")
        .set_json(json!({"name": "Second", "price": "200", "image": "y", "stock": "7"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["id"], 2);
    assert_eq!(body["stock"], 7);
}

#[actix_web::test]
async fn test_get_missing_product_is_not_found() {
    let app = test::init_service(
        App::new()
            .app_data(app_state())
            .configure(configure_app_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/products/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Product with ID 999 not found");

    let req = test::TestRequest::get().uri("/products/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_create_product_validation() {
    let app = test::init_service(
        App::new()
            .app_data(app_state())
            .configure(configure_app_routes),
    )
    .await;

    let invalid_bodies = [
        json!({"name": "Shoe", "price": "100", "image": "x", "discount": 10}),
        json!({"name": "Shoe", "image": "x"}),
        json!({"name": "", "price": "100", "image": "x"}),
        json!({"name": "Shoe", "price": "100", "image": "x", "stock": -3}),
        json!({"name": "Shoe", "price": "100", "image": "x", "sizes": "42"}),
    ];

    for body in invalid_bodies {
        let req = test::TestRequest::post()
            .uri("/products")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {}", body);
    }

    let req = test::TestRequest::get().uri("/products").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn test_update_product_changes_only_given_fields() {
    let app = test::init_service(
        App::new()
            .app_data(app_state())
            .configure(configure_app_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/products")
        .set_json(json!({
            "name": "Nike Dunk Low",
            "price": "3.200.000₫",
            "image": "dunk.png",
            "category": "Lifestyle",
            "sizes": ["40", "41"],
            "stock": 40
        }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::patch()
        .uri("/products/1")
        .set_json(json!({"stock": 5}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;

    assert_eq!(updated["stock"], 5);
    for field in ["id", "name", "price", "image", "category", "sizes", "createdAt"] {
        assert_eq!(updated[field], created[field], "field {} changed", field);
    }

    let req = test::TestRequest::patch()
        .uri("/products/1")
        .set_json(json!({"id": 9, "name": "Renamed"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/products/1").to_request();
    let current: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(current["name"], "Nike Dunk Low");

    let req = test::TestRequest::patch()
        .uri("/products/42")
        .set_json(json!({"stock": 1}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_product() {
    let app = test::init_service(
        App::new()
            .app_data(app_state())
            .configure(configure_app_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/products")
        .set_json(json!({"name": "Test Product", "price": "50", "image": "test.jpg"}))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::delete().uri("/products/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(test::read_body(resp).await.is_empty());

    let req = test::TestRequest::get().uri("/products/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete().uri("/products/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/products")
        .set_json(json!({"name": "Replacement", "price": "60", "image": "r.jpg"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["id"], 2);
}

#[actix_web::test]
async fn test_filter_products() {
    let app = test::init_service(
        App::new()
            .app_data(app_state())
            .configure(configure_app_routes),
    )
    .await;

    let req = test::TestRequest::post().uri("/products/seed").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let seeded: Value = test::read_body_json(resp).await;
    assert_eq!(ids(&seeded), vec![1, 2, 3, 4, 5, 6]);

    let cases = [
        ("/products", vec![1, 2, 3, 4, 5, 6]),
        ("/products?category=running", vec![4, 6]),
        ("/products?category=LIFESTYLE", vec![1, 2, 3, 5]),
        ("/products?search=air", vec![1, 2, 6]),
        ("/products?category=running&search=air", vec![4, 6]),
        ("/products?category=&search=dunk", vec![3]),
        ("/products?search=nothing-matches", vec![]),
    ];

    for (uri, expected) in cases {
        let req = test::TestRequest::get().uri(uri).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(ids(&body), expected, "{}", uri);
    }

    let req = test::TestRequest::get().uri("/products?search=NIKE").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    for product in body.as_array().unwrap() {
        let haystack = format!(
            "{} {} {}",
            product["name"].as_str().unwrap_or_default(),
            product["description"].as_str().unwrap_or_default(),
            product["category"].as_str().unwrap_or_default()
        )
        .to_lowercase();
        assert!(haystack.contains("nike"));
    }
}

#[actix_web::test]
async fn test_user_crud() {
    let app = test::init_service(
        App::new()
            .app_data(app_state())
            .configure(configure_app_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({"name": "Lan", "email": "lan@example.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let user: Value = test::read_body_json(resp).await;
    assert_eq!(user["id"], 1);

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({"name": "Bad", "email": "not-an-email"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::patch()
        .uri("/users/1")
        .set_json(json!({"name": "Lan Anh"}))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["name"], "Lan Anh");
    assert_eq!(updated["email"], "lan@example.com");

    let req = test::TestRequest::get().uri("/users").to_request();
    let users: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(ids(&users), vec![1]);

    let req = test::TestRequest::delete().uri("/users/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get().uri("/users/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_health() {
    let app = test::init_service(
        App::new()
            .app_data(app_state())
            .configure(configure_app_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"status": "ok"}));
}
