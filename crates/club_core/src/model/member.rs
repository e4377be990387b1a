//! Member domain model.
//!
//! # Responsibility
//! - Define the canonical member record and its enumerated fields.
//! - Validate raw plan/date input into typed values before persistence.
//!
//! # Invariants
//! - `id` is assigned by storage only; drafts (`NewMember`) never carry one.
//! - `plan` is one of `Semester | Year`, matched case-sensitively.
//! - `status` is `Active` for every member created through the registry.
//! - `registration_date` always renders as zero-padded `MM/DD/YYYY`.

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned member identifier (monotonic, starts at 1).
pub type MemberId = i64;

/// Accepted input shape: month and day may omit the leading zero, year is
/// exactly four digits.
static REGISTRATION_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})$").expect("valid registration date regex")
});

/// Membership duration category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Plan {
    Semester,
    Year,
}

impl Plan {
    /// Parses canonical plan text. Matching is case-sensitive; callers own
    /// any capitalization cleanup.
    pub fn parse(value: &str) -> Result<Self, MemberValidationError> {
        match value {
            "Semester" => Ok(Self::Semester),
            "Year" => Ok(Self::Year),
            other => Err(MemberValidationError::InvalidPlan(other.to_string())),
        }
    }

    /// Storage and display spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Semester => "Semester",
            Self::Year => "Year",
        }
    }
}

impl Display for Plan {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Membership state. Only `Active` is produced today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberStatus {
    #[default]
    Active,
    Expired,
}

impl MemberStatus {
    /// Strict parse of storage text.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Active" => Some(Self::Active),
            "Expired" => Some(Self::Expired),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Expired => "Expired",
        }
    }
}

impl Display for MemberStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calendar date a member registered on.
///
/// Parsed from `MM/DD/YYYY` input and always re-rendered in the same
/// zero-padded pattern, so `1/2/2025` is stored as `01/02/2025`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegistrationDate(NaiveDate);

impl RegistrationDate {
    /// Display/storage pattern understood by `chrono` formatting.
    pub const FORMAT: &'static str = "%m/%d/%Y";

    /// Parses `MM/DD/YYYY` text into a real calendar date.
    ///
    /// # Errors
    /// - `InvalidDate` when the shape is wrong (`2025-11-26`, empty input,
    ///   surrounding whitespace) or the date does not exist (`02/30/2025`).
    pub fn parse(value: &str) -> Result<Self, MemberValidationError> {
        let invalid = || MemberValidationError::InvalidDate(value.to_string());

        let captures = REGISTRATION_DATE_RE.captures(value).ok_or_else(invalid)?;
        let month = captures[1].parse::<u32>().map_err(|_| invalid())?;
        let day = captures[2].parse::<u32>().map_err(|_| invalid())?;
        let year = captures[3].parse::<i32>().map_err(|_| invalid())?;

        if year < 1 {
            return Err(invalid());
        }

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }

    /// Today's date on the local calendar.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Zero-padded `MM/DD/YYYY` rendering.
    pub fn formatted(self) -> String {
        self.0.format(Self::FORMAT).to_string()
    }
}

impl Display for RegistrationDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl Serialize for RegistrationDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.formatted())
    }
}

impl<'de> Deserialize<'de> for RegistrationDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Validation failures for member input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberValidationError {
    /// Plan text outside `Semester | Year`.
    InvalidPlan(String),
    /// Date text that is not a valid `MM/DD/YYYY` calendar date.
    InvalidDate(String),
}

impl Display for MemberValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPlan(value) => {
                write!(f, "invalid plan `{value}`; expected Semester or Year")
            }
            Self::InvalidDate(value) => {
                write!(f, "invalid registration date `{value}`; expected MM/DD/YYYY")
            }
        }
    }
}

impl Error for MemberValidationError {}

/// Validated member draft waiting for a store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    /// Trimmed name. Empty names are accepted as-is.
    pub name: String,
    pub plan: Plan,
    pub registration_date: RegistrationDate,
}

impl NewMember {
    /// Builds a draft from typed values, trimming the name.
    pub fn new(name: &str, plan: Plan, registration_date: RegistrationDate) -> Self {
        Self {
            name: name.trim().to_string(),
            plan,
            registration_date,
        }
    }

    /// Validates raw input in registry order: plan first, then date.
    pub fn parse(
        name: &str,
        plan: &str,
        registration_date: &str,
    ) -> Result<Self, MemberValidationError> {
        let plan = Plan::parse(plan)?;
        let registration_date = RegistrationDate::parse(registration_date)?;
        Ok(Self::new(name, plan, registration_date))
    }
}

/// Persisted member row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub plan: Plan,
    pub status: MemberStatus,
    pub registration_date: RegistrationDate,
}

impl Display for Member {
    /// Listing line: `#1 | Alice — Semester — Active — Registered 11/26/2025`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} | {} — {} — {} — Registered {}",
            self.id, self.name, self.plan, self.status, self.registration_date
        )
    }
}
