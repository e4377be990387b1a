//! Core domain logic for the club member registry.
//! This crate owns the member schema, its validation rules and storage.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{StoreConfig, StoreLocation, DEFAULT_DB_FILE_NAME};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::member::{
    Member, MemberId, MemberStatus, MemberValidationError, NewMember, Plan, RegistrationDate,
};
pub use repo::member_repo::{MemberRepository, RepoError, RepoResult, SqliteMemberRepository};
pub use service::member_service::{MemberService, MemberServiceError};
pub use service::registry::MemberRegistry;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
