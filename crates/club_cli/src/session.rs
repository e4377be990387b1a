//! Interactive registration loop.
//!
//! # Responsibility
//! - Read commands and add-flow answers line by line.
//! - Print human-readable feedback for every outcome.
//!
//! # Invariants
//! - Validation rejections and unknown commands never end the loop.
//! - Storage faults end the loop with an error; the caller still closes
//!   the registry.
//! - End of input is treated as `quit`.

use crate::command::{capitalize, Command};
use anyhow::{Context, Result};
use club_core::{MemberRegistry, MemberServiceError, MemberValidationError, RegistrationDate};
use log::{info, warn};
use std::io::{BufRead, Write};

const BANNER: &str = "--- Club Membership Registration ---";
const COMMAND_PROMPT: &str = "Enter 'add', 'list', or 'quit': ";

/// One interactive session bound to an opened registry.
pub struct Session<'a, R, W> {
    registry: &'a MemberRegistry,
    input: R,
    output: W,
    today: fn() -> RegistrationDate,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(registry: &'a MemberRegistry, input: R, output: W) -> Self {
        Self {
            registry,
            input,
            output,
            today: RegistrationDate::today,
        }
    }

    /// Overrides the clock used for the default registration date.
    #[cfg(test)]
    pub fn with_today(mut self, today: fn() -> RegistrationDate) -> Self {
        self.today = today;
        self
    }

    /// Runs until `quit`, end of input, or a storage fault.
    pub fn run(&mut self) -> Result<()> {
        info!("event=session_start module=cli status=ok");
        loop {
            writeln!(self.output, "\n{BANNER}")?;
            let Some(line) = self.prompt(COMMAND_PROMPT)? else {
                self.say_goodbye()?;
                break;
            };

            match line.parse::<Command>() {
                Ok(Command::Add) => self.add_member()?,
                Ok(Command::List) => self.list_members()?,
                Ok(Command::Quit) => {
                    self.say_goodbye()?;
                    break;
                }
                Err(_unrecognized) => {
                    warn!("event=command module=cli status=rejected reason=unrecognized");
                    writeln!(self.output, "❌ Invalid option.")?;
                }
            }
        }
        info!("event=session_end module=cli status=ok");
        Ok(())
    }

    fn add_member(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Enter member's name: ")? else {
            return Ok(());
        };
        let Some(plan) = self.prompt("Enter plan (Semester/Year): ")? else {
            return Ok(());
        };
        let plan = capitalize(plan.trim());

        let default_today = (self.today)().to_string();
        let Some(date) = self.prompt(&format!(
            "Enter registration date (MM/DD/YYYY) or press Enter for {default_today}: "
        ))?
        else {
            return Ok(());
        };
        let date = if date.is_empty() {
            default_today
        } else {
            date
        };

        match self.registry.add(&name, &plan, &date) {
            Ok(member) => writeln!(
                self.output,
                "✅ Added {} ({}) on {}.",
                member.name, member.plan, member.registration_date
            )?,
            Err(err) if err.is_rejection() => {
                writeln!(self.output, "{}", rejection_message(&err))?
            }
            Err(err) => return Err(err).context("failed to add member"),
        }
        Ok(())
    }

    fn list_members(&mut self) -> Result<()> {
        let members = self.registry.list().context("failed to list members")?;
        if members.is_empty() {
            writeln!(self.output, "\n📋 No members yet.")?;
            return Ok(());
        }

        writeln!(self.output, "\n📋 Club Members:")?;
        for member in &members {
            writeln!(self.output, "{member}")?;
        }
        Ok(())
    }

    fn say_goodbye(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "👋 Exiting. Data saved in {}",
            self.registry.location()
        )?;
        Ok(())
    }

    /// Prints `text`, then reads one trimmed line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Feedback for a rejected add; storage faults never reach here.
fn rejection_message(err: &MemberServiceError) -> &'static str {
    match err {
        MemberServiceError::Validation(MemberValidationError::InvalidPlan(_)) => {
            "❌ Invalid plan. Choose 'Semester' or 'Year'."
        }
        _ => "❌ Invalid date. Use MM/DD/YYYY (e.g., 11/26/2025).",
    }
}

#[cfg(test)]
mod tests {
    use super::Session;
    use club_core::{MemberRegistry, RegistrationDate, StoreConfig};
    use rusqlite::Connection;
    use std::io::Cursor;

    fn fixed_today() -> RegistrationDate {
        RegistrationDate::parse("11/26/2025").unwrap()
    }

    fn run_script(registry: &MemberRegistry, script: &str) -> String {
        let mut output = Vec::new();
        Session::new(registry, Cursor::new(script.as_bytes()), &mut output)
            .with_today(fixed_today)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn registry() -> MemberRegistry {
        MemberRegistry::initialize(&StoreConfig::in_memory()).unwrap()
    }

    #[test]
    fn add_then_list_prints_listing_line() {
        let registry = registry();
        let output = run_script(&registry, "add\nAlice\nsemester\n11/26/2025\nlist\nquit\n");

        assert!(output.contains("✅ Added Alice (Semester) on 11/26/2025."));
        assert!(output.contains("📋 Club Members:"));
        assert!(output.contains("#1 | Alice — Semester — Active — Registered 11/26/2025"));
        assert!(output.ends_with("👋 Exiting. Data saved in :memory:\n"));
    }

    #[test]
    fn blank_date_defaults_to_today() {
        let registry = registry();
        let output = run_script(&registry, "add\nBob\nYEAR\n\nquit\n");

        assert!(output.contains("press Enter for 11/26/2025: "));
        assert!(output.contains("✅ Added Bob (Year) on 11/26/2025."));
        assert_eq!(registry.list().unwrap().len(), 1);
    }

    #[test]
    fn rejections_are_reported_and_loop_continues() {
        let registry = registry();
        let output = run_script(
            &registry,
            "add\nBob\nMonth\n01/01/2025\nadd\nCarol\nYear\n02/30/2025\nlist\nquit\n",
        );

        assert!(output.contains("❌ Invalid plan. Choose 'Semester' or 'Year'."));
        assert!(output.contains("❌ Invalid date. Use MM/DD/YYYY (e.g., 11/26/2025)."));
        assert!(output.contains("📋 No members yet."));
        assert!(registry.list().unwrap().is_empty());
    }

    #[test]
    fn unknown_command_reprompts() {
        let registry = registry();
        let output = run_script(&registry, "delete\n  LIST \nquit\n");

        assert!(output.contains("❌ Invalid option."));
        assert!(output.contains("📋 No members yet."));
        assert_eq!(output.matches("--- Club Membership Registration ---").count(), 3);
    }

    #[test]
    fn end_of_input_mid_add_writes_nothing() {
        let registry = registry();
        let output = run_script(&registry, "add\nAlice\n");

        assert!(output.ends_with("👋 Exiting. Data saved in :memory:\n"));
        assert!(registry.list().unwrap().is_empty());
    }

    fn registry_with_dropped_table() -> (tempfile::TempDir, MemberRegistry) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("club_members.db");
        let registry = MemberRegistry::initialize(&StoreConfig::file(&path)).unwrap();

        let other = Connection::open(&path).unwrap();
        other.execute_batch("DROP TABLE members;").unwrap();
        drop(other);

        (dir, registry)
    }

    fn run_script_expecting_fault(registry: &MemberRegistry, script: &str) -> String {
        let mut output = Vec::new();
        let result = Session::new(registry, Cursor::new(script.as_bytes()), &mut output)
            .with_today(fixed_today)
            .run();
        assert!(result.is_err(), "storage fault should end the session");
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn storage_fault_on_add_ends_session_and_store_still_closes() {
        let (_dir, registry) = registry_with_dropped_table();

        let output =
            run_script_expecting_fault(&registry, "add\nBob\nYear\n01/01/2025\nquit\n");
        assert!(!output.contains("❌"));
        assert!(!output.contains("✅"));
        assert!(!output.contains("👋 Exiting."));

        registry.close().unwrap();
    }

    #[test]
    fn storage_fault_on_list_ends_session_and_store_still_closes() {
        let (_dir, registry) = registry_with_dropped_table();

        let output = run_script_expecting_fault(&registry, "list\nquit\n");
        assert!(!output.contains("📋"));
        assert!(!output.contains("👋 Exiting."));

        registry.close().unwrap();
    }
}
