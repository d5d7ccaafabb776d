//! SQLite cycle store implementation.
//!
//! Implements the `CycleStore` trait from `cycletrack_core::storage` using
//! SQLite via `tokio_rusqlite`.

use async_trait::async_trait;
use tokio_rusqlite::Connection;
use uuid::Uuid;

use cycletrack_core::cycle::Cycle;
use cycletrack_core::storage::{CycleStore, RepositoryError, Result};

use super::conversions::{format_date, format_datetime, range_to_json, row_to_cycle};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based cycle store.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Creates a new store with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new store with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    #[cfg(test)]
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl CycleStore for SqliteStore {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Cycle>> {
        let user_id_str = user_id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_CYCLES_BY_USER)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map([&user_id_str], row_to_cycle)
                    .map_err(wrap_err)?;

                let mut cycles = Vec::new();
                for row_result in rows {
                    cycles.push(row_result.map_err(wrap_err)?);
                }
                Ok(cycles)
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn find_one(&self, id: Uuid) -> Result<Option<Cycle>> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_CYCLE_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([&id_str], row_to_cycle) {
                    Ok(cycle) => Ok(Some(cycle)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id.to_string()))
    }

    async fn insert(&self, cycle: &Cycle) -> Result<()> {
        let id = cycle.id.to_string();
        let user_id = cycle.user_id.to_string();
        let month = cycle.month.clone();
        let period_length = cycle.period_length as i64;
        let cycle_length = cycle.cycle_length as i64;
        let start_date = format_date(&cycle.start_date);
        let next_cycle_date = format_date(&cycle.next_cycle_date);
        let period_range = cycle.period_range.clone();
        let ovulation_range = cycle.ovulation_range.clone();
        let unsafe_range = cycle.unsafe_range.clone();
        let created_at = format_datetime(&cycle.created_at);
        let updated_at = format_datetime(&cycle.updated_at);
        let cycle_id = cycle.id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_CYCLE,
                    rusqlite::params![
                        id,
                        user_id,
                        month,
                        period_length,
                        cycle_length,
                        start_date,
                        next_cycle_date,
                        range_to_json(&period_range).map_err(wrap_err)?,
                        range_to_json(&ovulation_range).map_err(wrap_err)?,
                        range_to_json(&unsafe_range).map_err(wrap_err)?,
                        created_at,
                        updated_at
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, cycle_id))
    }

    async fn replace(&self, cycle: &Cycle) -> Result<()> {
        let id = cycle.id.to_string();
        let month = cycle.month.clone();
        let period_length = cycle.period_length as i64;
        let cycle_length = cycle.cycle_length as i64;
        let start_date = format_date(&cycle.start_date);
        let next_cycle_date = format_date(&cycle.next_cycle_date);
        let period_range = cycle.period_range.clone();
        let ovulation_range = cycle.ovulation_range.clone();
        let unsafe_range = cycle.unsafe_range.clone();
        let updated_at = format_datetime(&cycle.updated_at);
        let cycle_id = cycle.id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_CYCLE,
                        rusqlite::params![
                            id,
                            month,
                            period_length,
                            cycle_length,
                            start_date,
                            next_cycle_date,
                            range_to_json(&period_range).map_err(wrap_err)?,
                            range_to_json(&ovulation_range).map_err(wrap_err)?,
                            range_to_json(&unsafe_range).map_err(wrap_err)?,
                            updated_at
                        ],
                    )
                    .map_err(wrap_err)?;

                if rows == 0 {
                    return Err(wrap_err(rusqlite::Error::QueryReturnedNoRows));
                }
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, cycle_id))
    }

    async fn remove(&self, id: Uuid) -> Result<()> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_CYCLE, [&id_str])
                    .map_err(wrap_err)?;

                if rows == 0 {
                    return Err(wrap_err(rusqlite::Error::QueryReturnedNoRows));
                }
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id.to_string()))
    }

    async fn is_alive(&self) -> bool {
        self.conn
            .call(|conn| {
                conn.query_row("SELECT 1", [], |_| Ok(())).map_err(wrap_err)
            })
            .await
            .is_ok()
    }
}
