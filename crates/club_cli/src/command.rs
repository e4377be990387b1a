//! Top-level prompt commands.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    List,
    Quit,
}

/// Input that is none of `add | list | quit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedCommand(pub String);

impl Display for UnrecognizedCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unrecognized command `{}`", self.0)
    }
}

impl Error for UnrecognizedCommand {}

impl FromStr for Command {
    type Err = UnrecognizedCommand;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "list" => Ok(Self::List),
            "quit" => Ok(Self::Quit),
            other => Err(UnrecognizedCommand(other.to_string())),
        }
    }
}

/// Uppercases the first character and lowercases the rest, so `sEMESTER`
/// becomes `Semester`.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
