//! SQLite pool for the advocate store.
//!
//! Every pooled connection gets the same pragmas and SQL functions on
//! checkout, and the schema migrations under `migrations/` are embedded into
//! the binary.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::define_sql_function;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sql_types::Text;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use log::error;
use thiserror::Error;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

define_sql_function! {
    /// Unicode lower-casing. SQLite's own `lower()` and `LIKE` only fold ASCII.
    fn unicode_lower(value: Text) -> Text;
}

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("no connection to migrate: {0}")]
    Connection(#[from] PoolError),

    #[error("failed to apply migrations: {0}")]
    Apply(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Pragmas issued whenever a connection leaves the pool.
#[derive(Debug, Clone)]
pub struct StorePragmas {
    pub wal: bool,
    /// Needed for `advocate_specialties` rows to cascade with their advocate.
    pub foreign_keys: bool,
    pub busy_timeout: Duration,
}

impl Default for StorePragmas {
    fn default() -> Self {
        Self {
            wal: true,
            foreign_keys: true,
            busy_timeout: Duration::from_secs(30),
        }
    }
}

impl StorePragmas {
    fn to_sql(&self) -> String {
        let mut sql = String::new();
        if self.wal {
            sql.push_str("PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;");
        }
        if self.foreign_keys {
            sql.push_str("PRAGMA foreign_keys = ON;");
        }
        sql.push_str(&format!(
            "PRAGMA busy_timeout = {};",
            self.busy_timeout.as_millis()
        ));
        sql
    }
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for StorePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&self.to_sql())
            .and_then(|()| unicode_lower_utils::register_impl(conn, |value: String| value.to_lowercase()))
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Build a pool for `database_url` with the default pragmas.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    Pool::builder()
        .connection_customizer(Box::new(StorePragmas::default()))
        .build(ConnectionManager::<SqliteConnection>::new(database_url))
}

pub fn get_connection(pool: &DbPool) -> Result<DbConnection, PoolError> {
    pool.get().inspect_err(|e| {
        error!("Failed to get connection from pool: {e}");
    })
}

/// Apply every pending schema migration, returning how many ran.
pub fn run_migrations(pool: &DbPool) -> Result<usize, MigrationError> {
    let mut pooled = get_connection(pool)?;
    let conn: &mut SqliteConnection = &mut pooled;
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    Ok(applied.len())
}
