//! Member registry domain model.
//!
//! # Responsibility
//! - Define the single persisted record kept by the registry.
//! - Own the validation rules for plan and registration date input.
//!
//! # Invariants
//! - Every persisted member has a store-assigned `MemberId`.
//! - `plan` and `status` are closed enums, never free text.

pub mod member;
