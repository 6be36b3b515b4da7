use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::db::schema::{products, users};
use crate::models::{NewProduct, NewUser, Product, ProductChanges, User, UserChanges};
use crate::store::StoreResult;

// sizes and colors are kept as JSON arrays in text columns.
fn encode_list(list: &Option<Vec<String>>) -> StoreResult<Option<String>> {
    Ok(list.as_ref().map(serde_json::to_string).transpose()?)
}

fn decode_list(raw: Option<String>) -> StoreResult<Option<Vec<String>>> {
    Ok(raw.as_deref().map(serde_json::from_str).transpose()?)
}

#[derive(Queryable, Debug, Clone)]
#[diesel(table_name = products)]
pub struct ProductRow {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub image: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub sizes: Option<String>,
    pub colors: Option<String>,
    pub stock: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl ProductRow {
    pub fn into_product(self) -> StoreResult<Product> {
        Ok(Product {
            id: self.id,
            name: self.name,
            price: self.price,
            image: self.image,
            description: self.description,
            category: self.category,
            sizes: decode_list(self.sizes)?,
            colors: decode_list(self.colors)?,
            stock: self.stock,
            created_at: self.created_at.and_utc(),
            updated_at: self.updated_at.and_utc(),
        })
    }
}

#[derive(Insertable)]
#[diesel(table_name = products)]
pub struct NewProductRow {
    pub name: String,
    pub price: String,
    pub image: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub sizes: Option<String>,
    pub colors: Option<String>,
    pub stock: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewProductRow {
    pub fn new(input: NewProduct, now: NaiveDateTime) -> StoreResult<Self> {
        Ok(NewProductRow {
            sizes: encode_list(&input.sizes)?,
            colors: encode_list(&input.colors)?,
            name: input.name,
            price: input.price,
            image: input.image,
            description: input.description,
            category: input.category,
            stock: input.stock,
            created_at: now,
            updated_at: now,
        })
    }
}

#[derive(AsChangeset, Default)]
#[diesel(table_name = products)]
pub struct ProductChangeset {
    pub name: Option<String>,
    pub price: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub sizes: Option<String>,
    pub colors: Option<String>,
    pub stock: Option<i32>,
}

impl ProductChangeset {
    pub fn new(changes: ProductChanges) -> StoreResult<Self> {
        Ok(ProductChangeset {
            sizes: encode_list(&changes.sizes)?,
            colors: encode_list(&changes.colors)?,
            name: changes.name,
            price: changes.price,
            image: changes.image,
            description: changes.description,
            category: changes.category,
            stock: changes.stock,
        })
    }
}

#[derive(Queryable, Debug, Clone)]
#[diesel(table_name = users)]
pub struct UserRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            name: row.name,
            email: row.email,
            created_at: row.created_at.and_utc(),
            updated_at: row.updated_at.and_utc(),
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    pub name: String,
    pub email: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewUserRow {
    pub fn new(input: NewUser, now: NaiveDateTime) -> Self {
        NewUserRow {
            name: input.name,
            email: input.email,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(AsChangeset, Default)]
#[diesel(table_name = users)]
pub struct UserChangeset {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<UserChanges> for UserChangeset {
    fn from(changes: UserChanges) -> Self {
        UserChangeset {
            name: changes.name,
            email: changes.email,
        }
    }
}
