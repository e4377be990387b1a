//! Session-scoped member registry handle.
//!
//! # Responsibility
//! - Own the single store connection used by one interactive session.
//! - Expose the initialize/add/list operations on top of `MemberService`.
//!
//! # Invariants
//! - One registry owns exactly one connection.
//! - `close` consumes the registry, so the connection is released once;
//!   a registry dropped without `close` is still released by `Drop`.

use crate::config::{StoreConfig, StoreLocation};
use crate::db::{open_db, open_db_in_memory, DbError, DbResult};
use crate::model::member::Member;
use crate::repo::member_repo::{RepoResult, SqliteMemberRepository};
use crate::service::member_service::{MemberService, MemberServiceError};
use log::{error, info};
use rusqlite::Connection;

/// Owned handle to an opened member store.
pub struct MemberRegistry {
    conn: Connection,
    location: StoreLocation,
}

impl MemberRegistry {
    /// Opens the configured store and prepares the `members` table.
    ///
    /// # Side effects
    /// - With the default `reset_on_open`, all previously stored members are
    ///   deleted without confirmation.
    pub fn initialize(config: &StoreConfig) -> DbResult<Self> {
        let conn = match &config.location {
            StoreLocation::File(path) => open_db(path, config.open_mode())?,
            StoreLocation::Memory => open_db_in_memory()?,
        };

        Ok(Self {
            conn,
            location: config.location.clone(),
        })
    }

    /// Where this registry stores its members.
    pub fn location(&self) -> &StoreLocation {
        &self.location
    }

    /// Validates and stores one member. See `MemberService::add_member`.
    pub fn add(
        &self,
        name: &str,
        plan: &str,
        registration_date: &str,
    ) -> Result<Member, MemberServiceError> {
        self.service().add_member(name, plan, registration_date)
    }

    /// All members ordered by ascending id. Empty when nothing was added.
    pub fn list(&self) -> RepoResult<Vec<Member>> {
        self.service().list_members()
    }

    /// Closes the underlying connection.
    pub fn close(self) -> DbResult<()> {
        let location = self.location;
        match self.conn.close() {
            Ok(()) => {
                info!("event=db_close module=db status=ok location={location}");
                Ok(())
            }
            Err((_conn, err)) => {
                error!(
                    "event=db_close module=db status=error location={location} error={err}"
                );
                Err(DbError::Sqlite(err))
            }
        }
    }

    fn service(&self) -> MemberService<SqliteMemberRepository<'_>> {
        MemberService::new(SqliteMemberRepository::new(&self.conn))
    }
}
