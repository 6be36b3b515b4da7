use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use thiserror::Error;

use crate::models::Product;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("catalog responded with status {0}")]
    Status(u16),
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct ProductFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CatalogError> {
        Ok(CatalogClient {
            http: Client::builder().timeout(timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn products(&self, filter: &ProductFilter) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .http
            .get(format!("{}/products", self.base_url))
            .query(filter)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status().as_u16()));
        }
        Ok(response.json().await?)
    }

    /// `Ok(None)` when the product does not exist.
    pub async fn product(&self, id: i32) -> Result<Option<Product>, CatalogError> {
        let response = self
            .http
            .get(format!("{}/products/{}", self.base_url, id))
            .send()
            .await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json().await?)),
            status => Err(CatalogError::Status(status.as_u16())),
        }
    }
}
