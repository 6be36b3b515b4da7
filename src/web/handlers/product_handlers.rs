use actix_web::{web, HttpResponse};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::{CreateProductRequest, ProductQuery, UpdateProductRequest};
use crate::state::AppState;
use crate::store::{seed_catalog, ProductStore, StoreResult};
use crate::validation;

/// Runs a store call on the blocking pool.
async fn with_store<T, F>(state: &AppState, op: F) -> Result<T, AppError>
where
    F: FnOnce(&dyn ProductStore) -> StoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    let store = state.products.clone();
    Ok(web::block(move || op(store.as_ref())).await??)
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

#[instrument(name = "handler::list_products", skip(state))]
pub async fn list_products(
    state: web::Data<AppState>,
    query: web::Query<ProductQuery>,
) -> Result<HttpResponse, AppError> {
    let products = match (non_empty(&query.category), non_empty(&query.search)) {
        (Some(category), _) => with_store(&state, move |s| s.find_by_category(&category)).await?,
        (None, Some(search)) => with_store(&state, move |s| s.search(&search)).await?,
        (None, None) => with_store(&state, |s| s.find_all()).await?,
    };
    info!(count = products.len(), "Listed products");
    Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(state))]
pub async fn get_product(
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    let product = with_store(&state, move |s| s.find_one(id)).await?;
    Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::create_product", skip(state, body))]
pub async fn create_product(
    state: web::Data<AppState>,
    body: web::Json<CreateProductRequest>,
) -> Result<HttpResponse, AppError> {
    let input = validation::new_product(body.into_inner())?;
    let product = with_store(&state, move |s| s.create(input)).await?;
    info!(product_id = product.id, "Created product");
    Ok(HttpResponse::Created().json(product))
}

#[instrument(name = "handler::update_product", skip(state, body))]
pub async fn update_product(
    state: web::Data<AppState>,
    id: web::Path<i32>,
    body: web::Json<UpdateProductRequest>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    let changes = validation::product_changes(body.into_inner())?;
    let product = with_store(&state, move |s| s.update(id, changes)).await?;
    info!(product_id = id, "Updated product");
    Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::delete_product", skip(state))]
pub async fn delete_product(
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    with_store(&state, move |s| s.remove(id)).await?;
    info!(product_id = id, "Deleted product");
    Ok(HttpResponse::NoContent().finish())
}

#[instrument(name = "handler::seed_products", skip(state))]
pub async fn seed_products(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let products = with_store(&state, |s| seed_catalog(s)).await?;
    info!(count = products.len(), "Seeded sample catalog");
    Ok(HttpResponse::Created().json(products))
}
