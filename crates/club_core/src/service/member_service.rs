//! Member use-case service.
//!
//! # Responsibility
//! - Turn raw add input into a validated member and persist it.
//! - Provide the ordered member listing.
//!
//! # Invariants
//! - A rejected add never writes a row.
//! - Plan is validated before date; the first failure is reported.
//! - Service layer remains storage-agnostic.

use crate::model::member::{Member, MemberValidationError, NewMember};
use crate::repo::member_repo::{MemberRepository, RepoError, RepoResult};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for member use-cases.
#[derive(Debug)]
pub enum MemberServiceError {
    /// Input rejected before any write (`InvalidPlan` / `InvalidDate`).
    Validation(MemberValidationError),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl MemberServiceError {
    /// Whether the caller can simply retry with corrected input.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl Display for MemberServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent member state: {details}"),
        }
    }
}

impl Error for MemberServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::InconsistentState(_) => None,
        }
    }
}

impl From<MemberValidationError> for MemberServiceError {
    fn from(value: MemberValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for MemberServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Member service facade over repository implementations.
pub struct MemberService<R: MemberRepository> {
    repo: R,
}

impl<R: MemberRepository> MemberService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and persists one member, returning the stored row.
    ///
    /// # Contract
    /// - `name` is trimmed; an empty result is still accepted.
    /// - `plan` must equal `Semester` or `Year` exactly.
    /// - `registration_date` must be a real `MM/DD/YYYY` date.
    /// - New members always start `Active`.
    pub fn add_member(
        &self,
        name: &str,
        plan: &str,
        registration_date: &str,
    ) -> Result<Member, MemberServiceError> {
        let draft = match NewMember::parse(name, plan, registration_date) {
            Ok(draft) => draft,
            Err(err) => {
                warn!(
                    "event=member_add module=service status=rejected reason={}",
                    rejection_code(&err)
                );
                return Err(err.into());
            }
        };

        let member_id = self.repo.insert_member(&draft)?;
        info!(
            "event=member_add module=service status=ok member_id={} plan={}",
            member_id, draft.plan
        );

        self.repo
            .get_member(member_id)?
            .ok_or(MemberServiceError::InconsistentState(
                "created member not found in read-back",
            ))
    }

    /// Lists every member in ascending id order.
    pub fn list_members(&self) -> RepoResult<Vec<Member>> {
        self.repo.list_members()
    }
}

fn rejection_code(err: &MemberValidationError) -> &'static str {
    match err {
        MemberValidationError::InvalidPlan(_) => "invalid_plan",
        MemberValidationError::InvalidDate(_) => "invalid_date",
    }
}
