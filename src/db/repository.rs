use chrono::Utc;
use diesel::prelude::*;

use crate::db::connection::{get_conn, init_pool, SqlitePool};
use crate::db::models::*;
use crate::db::schema::{products, users};
use crate::models::{NewProduct, NewUser, Product, ProductChanges, User, UserChanges};
use crate::store::{ProductStore, StoreError, StoreResult, UserStore};

/// Diesel-backed store. `AUTOINCREMENT` keys keep deleted ids retired.
#[derive(Clone)]
pub struct SqlStore {
    pool: SqlitePool,
}

impl SqlStore {
    pub fn connect(database_url: &str, pool_size: u32, timeout_seconds: u64) -> StoreResult<Self> {
        Ok(SqlStore {
            pool: init_pool(database_url, pool_size, timeout_seconds)?,
        })
    }
}

fn find_product(conn: &mut SqliteConnection, id: i32) -> StoreResult<ProductRow> {
    products::table
        .find(id)
        .first::<ProductRow>(conn)
        .optional()?
        .ok_or(StoreError::ProductNotFound(id))
}

fn find_user(conn: &mut SqliteConnection, id: i32) -> StoreResult<UserRow> {
    users::table
        .find(id)
        .first::<UserRow>(conn)
        .optional()?
        .ok_or(StoreError::UserNotFound(id))
}

impl ProductStore for SqlStore {
    fn create(&self, input: NewProduct) -> StoreResult<Product> {
        let conn = &mut get_conn(&self.pool)?;
        let row = NewProductRow::new(input, Utc::now().naive_utc())?;
        diesel::insert_into(products::table)
            .values(&row)
            .get_result::<ProductRow>(conn)?
            .into_product()
    }

    fn find_all(&self) -> StoreResult<Vec<Product>> {
        let conn = &mut get_conn(&self.pool)?;
        products::table
            .order(products::id.asc())
            .load::<ProductRow>(conn)?
            .into_iter()
            .map(ProductRow::into_product)
            .collect()
    }

    fn find_one(&self, id: i32) -> StoreResult<Product> {
        let conn = &mut get_conn(&self.pool)?;
        find_product(conn, id)?.into_product()
    }

    fn update(&self, id: i32, changes: ProductChanges) -> StoreResult<Product> {
        let conn = &mut get_conn(&self.pool)?;
        let changeset = ProductChangeset::new(changes)?;
        conn.immediate_transaction::<_, StoreError, _>(|conn| {
            let existing = find_product(conn, id)?;
            let now = Utc::now().naive_utc().max(existing.created_at);
            let row = diesel::update(products::table.find(id))
                .set((changeset, products::updated_at.eq(now)))
                .get_result::<ProductRow>(conn)?;
            row.into_product()
        })
    }

    fn remove(&self, id: i32) -> StoreResult<()> {
        let conn = &mut get_conn(&self.pool)?;
        conn.immediate_transaction::<_, StoreError, _>(|conn| {
            find_product(conn, id)?;
            diesel::delete(products::table.find(id)).execute(conn)?;
            Ok(())
        })
    }
}

impl UserStore for SqlStore {
    fn create(&self, input: NewUser) -> StoreResult<User> {
        let conn = &mut get_conn(&self.pool)?;
        let row = NewUserRow::new(input, Utc::now().naive_utc());
        Ok(diesel::insert_into(users::table)
            .values(&row)
            .get_result::<UserRow>(conn)?
            .into())
    }

    fn find_all(&self) -> StoreResult<Vec<User>> {
        let conn = &mut get_conn(&self.pool)?;
        Ok(users::table
            .order(users::id.asc())
            .load::<UserRow>(conn)?
            .into_iter()
            .map(User::from)
            .collect())
    }

    fn find_one(&self, id: i32) -> StoreResult<User> {
        let conn = &mut get_conn(&self.pool)?;
        Ok(find_user(conn, id)?.into())
    }

    fn update(&self, id: i32, changes: UserChanges) -> StoreResult<User> {
        let conn = &mut get_conn(&self.pool)?;
        let changeset = UserChangeset::from(changes);
        conn.immediate_transaction::<_, StoreError, _>(|conn| {
            let existing = find_user(conn, id)?;
            let now = Utc::now().naive_utc().max(existing.created_at);
            let row = diesel::update(users::table.find(id))
                .set((changeset, users::updated_at.eq(now)))
                .get_result::<UserRow>(conn)?;
            Ok(row.into())
        })
    }

    fn remove(&self, id: i32) -> StoreResult<()> {
        let conn = &mut get_conn(&self.pool)?;
        conn.immediate_transaction::<_, StoreError, _>(|conn| {
            find_user(conn, id)?;
            diesel::delete(users::table.find(id)).execute(conn)?;
            Ok(())
        })
    }
}
