//! Member repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide insert/get/list APIs over the `members` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Inserts are single autocommitted statements; data is durable when the
//!   call returns.
//! - Reads reject rows whose enum columns hold unknown text.
//! - Listing order is ascending `id`, i.e. insertion order.

use crate::db::DbError;
use crate::model::member::{Member, MemberId, MemberStatus, NewMember, Plan, RegistrationDate};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const MEMBER_SELECT_SQL: &str = "SELECT
    id,
    name,
    plan,
    status,
    registration_date
FROM members";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for member persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted member data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for member records.
pub trait MemberRepository {
    fn insert_member(&self, member: &NewMember) -> RepoResult<MemberId>;
    fn get_member(&self, id: MemberId) -> RepoResult<Option<Member>>;
    fn list_members(&self) -> RepoResult<Vec<Member>>;
}

/// SQLite-backed member repository.
pub struct SqliteMemberRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMemberRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl MemberRepository for SqliteMemberRepository<'_> {
    fn insert_member(&self, member: &NewMember) -> RepoResult<MemberId> {
        self.conn.execute(
            "INSERT INTO members (
                name,
                plan,
                status,
                registration_date
            ) VALUES (?1, ?2, ?3, ?4);",
            params![
                member.name.as_str(),
                member.plan.as_str(),
                MemberStatus::Active.as_str(),
                member.registration_date.formatted(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_member(&self, id: MemberId) -> RepoResult<Option<Member>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MEMBER_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_member_row(row)?));
        }

        Ok(None)
    }

    fn list_members(&self) -> RepoResult<Vec<Member>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MEMBER_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut members = Vec::new();

        while let Some(row) = rows.next()? {
            members.push(parse_member_row(row)?);
        }

        Ok(members)
    }
}

fn parse_member_row(row: &Row<'_>) -> RepoResult<Member> {
    let plan_text: Option<String> = row.get("plan")?;
    let plan = plan_text
        .as_deref()
        .and_then(|value| Plan::parse(value).ok())
        .ok_or_else(|| {
            RepoError::InvalidData(format!("invalid plan `{plan_text:?}` in members.plan"))
        })?;

    let status_text: Option<String> = row.get("status")?;
    let status = status_text
        .as_deref()
        .and_then(MemberStatus::parse)
        .ok_or_else(|| {
            RepoError::InvalidData(format!(
                "invalid status `{status_text:?}` in members.status"
            ))
        })?;

    let date_text: String = row.get("registration_date")?;
    let registration_date = RegistrationDate::parse(&date_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid date `{date_text}` in members.registration_date"
        ))
    })?;

    Ok(Member {
        id: row.get("id")?,
        name: row.get("name")?,
        plan,
        status,
        registration_date,
    })
}
