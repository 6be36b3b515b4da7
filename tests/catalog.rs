use std::time::Duration;

use actix_web::{web, App};

use storefront::catalog::{CatalogClient, ProductFilter, ProductSelection};
use storefront::config::ReviewSettings;
use storefront::reviews::ReviewClient;
use storefront::state::AppState;
use storefront::store::seed_catalog;
use storefront::web::configure_app_routes;

fn seeded_state() -> web::Data<AppState> {
    let reviews = ReviewClient::new(&ReviewSettings {
        base_url: "http://127.0.0.1:9".to_string(),
        state_token: None,
        company_id: "1".to_string(),
        timeout_millis: 300,
        token_ttl_seconds: 3600,
        cache_ttl_seconds: 0,
    })
    .unwrap();
    let state = AppState::in_memory(reviews);
    seed_catalog(state.products.as_ref()).unwrap();
    web::Data::new(state)
}

fn storefront_server(state: web::Data<AppState>) -> actix_test::TestServer {
    actix_test::start(move || {
        App::new()
            .app_data(state.clone())
            .configure(configure_app_routes)
    })
}

#[actix_web::test]
async fn test_catalog_lists_and_filters_products() {
    let srv = storefront_server(seeded_state());
    let catalog = CatalogClient::new(&format!("http://{}", srv.addr()), Duration::from_secs(5)).unwrap();

    let all = catalog.products(&ProductFilter::default()).await.unwrap();
    assert_eq!(all.len(), 6);

    let running = catalog
        .products(&ProductFilter {
            category: Some("Running".to_string()),
            search: None,
        })
        .await
        .unwrap();
    let names: Vec<_> = running.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Nike React Infinity", "Nike Pegasus 40"]);
}

#[actix_web::test]
async fn test_detail_page_state() {
    let srv = storefront_server(seeded_state());
    let catalog = CatalogClient::new(&format!("http://{}", srv.addr()), Duration::from_secs(5)).unwrap();

    assert!(catalog.product(999).await.unwrap().is_none());

    let product = catalog.product(3).await.unwrap().expect("seeded product");
    assert_eq!(product.name, "Nike Dunk Low");

    let mut selection = ProductSelection::for_product(&product);
    assert_eq!(selection.size(), Some("38"));
    assert_eq!(selection.color(), Some("Panda"));
    assert!(selection.select_color("Red/White"));
    selection.increment();
    assert_eq!(selection.quantity(), 2);
}
