use anyhow::Context;
use diesel::{r2d2::ConnectionManager, RunQueryDsl, SqliteConnection};
use r2d2::PooledConnection;

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

const CREATE_STORAGE_ITEMS: &str = "CREATE TABLE IF NOT EXISTS storage_items (
    origin TEXT NOT NULL,
    item_key TEXT NOT NULL,
    item_value TEXT NOT NULL,
    PRIMARY KEY (origin, item_key)
)";

/// Opens the pool onto the SQLite file at `database_url` and makes sure the
/// storage table exists.
///
/// The pool holds a single connection: every storage call is serialized the
/// same way a single page's event loop would serialize them.
pub fn build_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = r2d2::Pool::builder()
        .max_size(1)
        .build(manager)
        .with_context(|| format!("Failed to open database at {}", database_url))?;

    let mut conn = pool.get().context("DB connection")?;
    diesel::sql_query(CREATE_STORAGE_ITEMS)
        .execute(&mut *conn)
        .context("Failed to create storage table")?;

    Ok(pool)
}

pub fn get_db_conn(
    pool: &DbPool,
) -> anyhow::Result<PooledConnection<ConnectionManager<SqliteConnection>>> {
    pool.get().context("DB connection")
}
