//! Request shape checks that run before any store call.
//!
//! Unknown and missing fields are rejected by serde (`deny_unknown_fields`
//! on the request types); the functions here cover what serde cannot see:
//! empty text, negative counts, and malformed emails.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::{
    CreateProductRequest, CreateUserRequest, NewProduct, NewUser, ProductChanges,
    UpdateProductRequest, UpdateUserRequest, UserChanges,
};

/// Accepts an integer count given either as a JSON number or as a
/// numeric-looking string. Fractions and other types are rejected.
pub fn lenient_count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("stock must be an integer, got {}", n))),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("stock must be a number, got \"{}\"", s))),
        Some(other) => Err(D::Error::custom(format!(
            "stock must be a number, got {}",
            other
        ))),
    }
}

fn required_text(field: &str, value: String) -> Result<String, AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} should not be empty", field)));
    }
    Ok(value)
}

fn optional_text(field: &str, value: Option<String>) -> Result<Option<String>, AppError> {
    value.map(|v| required_text(field, v)).transpose()
}

fn stock(value: Option<i64>) -> Result<Option<i32>, AppError> {
    match value {
        None => Ok(None),
        Some(n) if n < 0 => Err(AppError::Validation(
            "stock must not be less than 0".to_string(),
        )),
        Some(n) => i32::try_from(n)
            .map(Some)
            .map_err(|_| AppError::Validation(format!("stock {} is out of range", n))),
    }
}

fn email(value: String) -> Result<String, AppError> {
    let value = required_text("email", value)?;
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
                && domain
                    .split_once('.')
                    .map_or(false, |(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    };
    if !valid {
        return Err(AppError::Validation(format!("{} is not a valid email", value)));
    }
    Ok(value)
}

pub fn new_product(request: CreateProductRequest) -> Result<NewProduct, AppError> {
    Ok(NewProduct {
        name: required_text("name", request.name)?,
        price: required_text("price", request.price)?,
        image: required_text("image", request.image)?,
        description: request.description,
        category: request.category,
        sizes: request.sizes,
        colors: request.colors,
        stock: stock(request.stock)?.unwrap_or(0),
    })
}

pub fn product_changes(request: UpdateProductRequest) -> Result<ProductChanges, AppError> {
    Ok(ProductChanges {
        name: optional_text("name", request.name)?,
        price: optional_text("price", request.price)?,
        image: optional_text("image", request.image)?,
        description: request.description,
        category: request.category,
        sizes: request.sizes,
        colors: request.colors,
        stock: stock(request.stock)?,
    })
}

pub fn new_user(request: CreateUserRequest) -> Result<NewUser, AppError> {
    Ok(NewUser {
        name: required_text("name", request.name)?,
        email: email(request.email)?,
    })
}

pub fn user_changes(request: UpdateUserRequest) -> Result<UserChanges, AppError> {
    Ok(UserChanges {
        name: optional_text("name", request.name)?,
        email: request.email.map(email).transpose()?,
    })
}
