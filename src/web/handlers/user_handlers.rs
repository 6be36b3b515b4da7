use actix_web::{web, HttpResponse};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::{CreateUserRequest, UpdateUserRequest};
use crate::state::AppState;
use crate::store::{StoreResult, UserStore};
use crate::validation;

async fn with_store<T, F>(state: &AppState, op: F) -> Result<T, AppError>
where
    F: FnOnce(&dyn UserStore) -> StoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    let store = state.users.clone();
    Ok(web::block(move || op(store.as_ref())).await??)
}

#[instrument(name = "handler::list_users", skip(state))]
pub async fn list_users(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let users = with_store(&state, |s| s.find_all()).await?;
    Ok(HttpResponse::Ok().json(users))
}

#[instrument(name = "handler::get_user", skip(state))]
pub async fn get_user(
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    let user = with_store(&state, move |s| s.find_one(id)).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[instrument(name = "handler::create_user", skip(state, body))]
pub async fn create_user(
    state: web::Data<AppState>,
    body: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let input = validation::new_user(body.into_inner())?;
    let user = with_store(&state, move |s| s.create(input)).await?;
    info!(user_id = user.id, "Created user");
    Ok(HttpResponse::Created().json(user))
}

#[instrument(name = "handler::update_user", skip(state, body))]
pub async fn update_user(
    state: web::Data<AppState>,
    id: web::Path<i32>,
    body: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    let changes = validation::user_changes(body.into_inner())?;
    let user = with_store(&state, move |s| s.update(id, changes)).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[instrument(name = "handler::delete_user", skip(state))]
pub async fn delete_user(
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    with_store(&state, move |s| s.remove(id)).await?;
    info!(user_id = id, "Deleted user");
    Ok(HttpResponse::NoContent().finish())
}
