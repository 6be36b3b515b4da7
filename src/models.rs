use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn from_new(id: i32, input: NewProduct, now: DateTime<Utc>) -> Self {
        Product {
            id,
            name: input.name,
            price: input.price,
            image: input.image,
            description: input.description,
            category: input.category,
            sizes: input.sizes,
            colors: input.colors,
            stock: input.stock,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites the fields present in `changes`. `id` and `created_at` never move.
    pub fn apply(&mut self, changes: ProductChanges, now: DateTime<Utc>) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(image) = changes.image {
            self.image = image;
        }
        if let Some(description) = changes.description {
            self.description = Some(description);
        }
        if let Some(category) = changes.category {
            self.category = Some(category);
        }
        if let Some(sizes) = changes.sizes {
            self.sizes = Some(sizes);
        }
        if let Some(colors) = changes.colors {
            self.colors = Some(colors);
        }
        if let Some(stock) = changes.stock {
            self.stock = stock;
        }
        self.updated_at = now.max(self.created_at);
    }
}

/// Validated input for `ProductStore::create`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: String,
    pub image: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub sizes: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
    pub stock: i32,
}

/// Validated partial update; `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub sizes: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
    pub stock: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: String,
    pub image: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub sizes: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
    #[serde(default, deserialize_with = "crate::validation::lenient_count")]
    pub stock: Option<i64>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub sizes: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
    #[serde(default, deserialize_with = "crate::validation::lenient_count")]
    pub stock: Option<i64>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn from_new(id: i32, input: NewUser, now: DateTime<Utc>) -> Self {
        User {
            id,
            name: input.name,
            email: input.email,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, changes: UserChanges, now: DateTime<Utc>) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        self.updated_at = now.max(self.created_at);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}
