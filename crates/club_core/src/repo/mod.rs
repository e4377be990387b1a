//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from the registry service.
//!
//! # Invariants
//! - Repository writes accept only validated `NewMember` drafts.
//! - Repository reads return semantic `InvalidData` errors for rows that
//!   do not map back onto the domain model.

pub mod member_repo;
