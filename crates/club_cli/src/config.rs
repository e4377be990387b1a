//! Command-line and environment configuration.
//!
//! # Responsibility
//! - Parse flags (with `CLUB_*` environment fallbacks) into session settings.
//! - Resolve relative paths against the working directory.

use clap::Parser;
use club_core::{default_log_level, StoreConfig, DEFAULT_DB_FILE_NAME};
use std::path::{Path, PathBuf};

const DEFAULT_LOG_DIR_NAME: &str = "logs";

/// Interactive club membership registration.
#[derive(Debug, Parser)]
#[command(name = "club", version)]
pub struct CliArgs {
    /// SQLite file holding the member table.
    #[arg(long, env = "CLUB_DB_PATH", default_value = DEFAULT_DB_FILE_NAME)]
    pub db_path: PathBuf,

    /// Keep members from earlier sessions instead of starting empty.
    #[arg(long, env = "CLUB_KEEP_EXISTING")]
    pub keep_existing: bool,

    /// trace|debug|info|warn|error (defaults by build mode).
    #[arg(long, env = "CLUB_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Directory for rolling log files (defaults to `./logs`).
    #[arg(long, env = "CLUB_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

/// Fully resolved session settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub store: StoreConfig,
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl CliArgs {
    /// Resolves defaults; relative paths are anchored at `cwd`.
    pub fn resolve(self, cwd: &Path) -> Settings {
        let mut store = StoreConfig::file(cwd.join(&self.db_path));
        if self.keep_existing {
            store = store.keep_existing();
        }

        let log_dir = self
            .log_dir
            .map_or_else(|| cwd.join(DEFAULT_LOG_DIR_NAME), |dir| cwd.join(dir));

        Settings {
            store,
            log_level: self
                .log_level
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CliArgs;
    use clap::Parser;
    use club_core::{StoreLocation, DEFAULT_DB_FILE_NAME};
    use std::path::Path;

    #[test]
    fn defaults_reset_store_in_working_directory() {
        let args = CliArgs::try_parse_from(["club"]).unwrap();
        let settings = args.resolve(Path::new("/srv/club"));

        assert_eq!(
            settings.store.location,
            StoreLocation::File(Path::new("/srv/club").join(DEFAULT_DB_FILE_NAME))
        );
        assert!(settings.store.reset_on_open);
        assert_eq!(settings.log_dir, Path::new("/srv/club/logs"));
    }

    #[test]
    fn flags_override_defaults() {
        let args = CliArgs::try_parse_from([
            "club",
            "--db-path",
            "/data/members.db",
            "--keep-existing",
            "--log-level",
            "warn",
            "--log-dir",
            "diag",
        ])
        .unwrap();
        let settings = args.resolve(Path::new("/srv/club"));

        assert_eq!(
            settings.store.location,
            StoreLocation::File(Path::new("/data/members.db").to_path_buf())
        );
        assert!(!settings.store.reset_on_open);
        assert_eq!(settings.log_level, "warn");
        assert_eq!(settings.log_dir, Path::new("/srv/club/diag"));
    }
}
