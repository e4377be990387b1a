//! `members` table DDL and shape checks.
//!
//! # Invariants
//! - `reset_schema` is destructive: every existing row is dropped.
//! - `ensure_schema` never touches an existing table's rows.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

pub const MEMBERS_TABLE: &str = "members";

const RESET_SQL: &str = include_str!("members.sql");

const REQUIRED_COLUMNS: &[&str] = &["id", "name", "plan", "status", "registration_date"];

/// Drops and recreates the `members` table in one transaction.
pub fn reset_schema(conn: &mut Connection) -> DbResult<()> {
    let tx = conn.transaction()?;
    tx.execute_batch(RESET_SQL)?;
    tx.commit()?;
    Ok(())
}

/// Creates the `members` table when absent, then verifies its columns.
pub fn ensure_schema(conn: &mut Connection) -> DbResult<()> {
    if !table_exists(conn, MEMBERS_TABLE)? {
        return reset_schema(conn);
    }
    verify_schema(conn)
}

/// Checks that `members` exists and carries every column the repository reads.
pub fn verify_schema(conn: &Connection) -> DbResult<()> {
    if !table_exists(conn, MEMBERS_TABLE)? {
        return Err(DbError::MissingRequiredTable(MEMBERS_TABLE));
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let present = stmt
        .query_map([MEMBERS_TABLE], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;

    for &column in REQUIRED_COLUMNS {
        if !present.iter().any(|name| name == column) {
            return Err(DbError::MissingRequiredColumn {
                table: MEMBERS_TABLE,
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table_name: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table_name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
