//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Configure connection pragmas and prepare the `members` table.
//!
//! # Invariants
//! - `OpenMode::Reset` leaves an empty `members` table behind.
//! - `OpenMode::Keep` preserves rows but rejects a malformed table.

use super::schema::{ensure_schema, reset_schema};
use super::DbResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// How an opened store treats data left by a previous session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OpenMode {
    /// Drop and recreate `members` (every session starts empty).
    #[default]
    Reset,
    /// Keep existing rows; create the table only if it is missing.
    Keep,
}

impl OpenMode {
    fn as_str(self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::Keep => "keep",
        }
    }
}

/// Opens a SQLite database file and prepares the `members` table.
///
/// # Side effects
/// - With `OpenMode::Reset`, irreversibly deletes all stored members.
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>, mode: OpenMode) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!(
        "event=db_open module=db status=start mode=file schema={}",
        mode.as_str()
    );

    let mut conn = match Connection::open(path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=file duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    finish_open(&mut conn, mode, "file", started_at)?;
    Ok(conn)
}

/// Opens an empty in-memory SQLite database with a fresh `members` table.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=memory schema=reset");

    let mut conn = match Connection::open_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=memory duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    finish_open(&mut conn, OpenMode::Reset, "memory", started_at)?;
    Ok(conn)
}

fn finish_open(
    conn: &mut Connection,
    mode: OpenMode,
    storage: &str,
    started_at: Instant,
) -> DbResult<()> {
    match bootstrap_connection(conn, mode) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode={} schema={} duration_ms={}",
                storage,
                mode.as_str(),
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={} duration_ms={} error_code=db_bootstrap_failed error={}",
                storage,
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &mut Connection, mode: OpenMode) -> DbResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    match mode {
        OpenMode::Reset => {
            reset_schema(conn)?;
            info!("event=schema_reset module=db status=ok");
        }
        OpenMode::Keep => ensure_schema(conn)?,
    }
    Ok(())
}
