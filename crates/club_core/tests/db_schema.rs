use club_core::db::schema::verify_schema;
use club_core::db::{open_db, open_db_in_memory, DbError, OpenMode};
use club_core::{MemberRepository, RepoError, SqliteMemberRepository};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_creates_members_table() {
    let conn = open_db_in_memory().unwrap();
    verify_schema(&conn).unwrap();
    assert_eq!(member_count(&conn), 0);
}

#[test]
fn storage_rejects_plan_outside_enum() {
    let conn = open_db_in_memory().unwrap();

    let result = conn.execute(
        "INSERT INTO members (name, plan, registration_date) VALUES ('Bob', 'Month', '01/01/2025');",
        [],
    );
    assert!(result.is_err());
    assert_eq!(member_count(&conn), 0);
}

#[test]
fn storage_rejects_status_outside_enum() {
    let conn = open_db_in_memory().unwrap();

    let result = conn.execute(
        "INSERT INTO members (name, plan, status, registration_date)
         VALUES ('Bob', 'Year', 'Suspended', '01/01/2025');",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn status_defaults_to_active() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO members (name, plan, registration_date) VALUES ('Ann', 'Year', '01/01/2025');",
        [],
    )
    .unwrap();

    let status: String = conn
        .query_row("SELECT status FROM members WHERE id = 1;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(status, "Active");
}

#[test]
fn keep_mode_creates_missing_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fresh.db");

    let conn = open_db(&path, OpenMode::Keep).unwrap();
    verify_schema(&conn).unwrap();
}

#[test]
fn keep_mode_rejects_table_missing_required_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE members (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            plan TEXT
        );",
    )
    .unwrap();
    drop(conn);

    let err = open_db(&path, OpenMode::Keep).unwrap_err();
    assert!(matches!(
        err,
        DbError::MissingRequiredColumn {
            table: "members",
            column: "status"
        }
    ));
}

#[test]
fn reset_mode_replaces_malformed_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("CREATE TABLE members (id INTEGER PRIMARY KEY);")
        .unwrap();
    drop(conn);

    let conn = open_db(&path, OpenMode::Reset).unwrap();
    verify_schema(&conn).unwrap();
}

#[test]
fn verify_schema_reports_missing_table() {
    let conn = Connection::open_in_memory().unwrap();

    let err = verify_schema(&conn).unwrap_err();
    assert!(matches!(err, DbError::MissingRequiredTable("members")));
}

#[test]
fn repository_rejects_rows_with_malformed_date() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO members (name, plan, registration_date) VALUES ('Ann', 'Year', '2025-01-01');",
        [],
    )
    .unwrap();

    let repo = SqliteMemberRepository::new(&conn);
    let err = repo.list_members().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn repository_get_member_returns_none_for_unknown_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMemberRepository::new(&conn);

    assert!(repo.get_member(42).unwrap().is_none());
}

fn member_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM members;", [], |row| row.get(0))
        .unwrap()
}
