use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use r2d2::{Pool, PooledConnection};

use crate::store::{StoreError, StoreResult};

pub type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;
pub type SqlitePooledConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Per-connection pragmas. Writers wait on a busy database instead of
/// failing, and WAL lets readers proceed while a write is in flight.
#[derive(Debug, Clone, Copy)]
struct ConnectionOptions {
    busy_timeout_millis: u64,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {}; PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;",
            self.busy_timeout_millis
        ))
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Builds the pool and brings the schema up to date.
///
/// An in-memory database lives only as long as its connection, so
/// `:memory:` pools are capped at one connection that is never recycled.
pub fn init_pool(database_url: &str, pool_size: u32, timeout_seconds: u64) -> StoreResult<SqlitePool> {
    let in_memory = database_url.contains(":memory:");
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let mut builder = Pool::builder()
        .max_size(if in_memory { 1 } else { pool_size.max(1) })
        .connection_timeout(Duration::from_secs(timeout_seconds.max(1)))
        .connection_customizer(Box::new(ConnectionOptions {
            busy_timeout_millis: timeout_seconds.max(1) * 1000,
        }));
    if in_memory {
        builder = builder.idle_timeout(None).max_lifetime(None);
    }
    let pool = builder.build(manager)?;

    let conn = &mut pool.get()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| StoreError::Migration(e.to_string()))?;
    tracing::info!(applied = applied.len(), "Database schema is up to date");

    Ok(pool)
}

pub fn get_conn(pool: &SqlitePool) -> StoreResult<SqlitePooledConnection> {
    Ok(pool.get()?)
}
