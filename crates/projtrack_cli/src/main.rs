//! projtrack console entry point.
//!
//! # Responsibility
//! - Resolve environment configuration and initialize logging.
//! - Open and seed the database once, then hand off to the menu loop.
//!
//! # Invariants
//! - Logging failures degrade to a warning; storage failures are fatal.
//! - The connection is opened once and lives for the whole process.

mod menu;
mod render;

use log::info;
use projtrack_core::{
    apply_seed, default_log_level, init_logging, open_db, DbError, RepoError, ReportService,
    SeedError, SqliteReportRepository,
};
use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

const DB_PATH_ENV: &str = "PROJTRACK_DB";
const LOG_LEVEL_ENV: &str = "PROJTRACK_LOG";
const LOG_DIR_ENV: &str = "PROJTRACK_LOG_DIR";
const DEFAULT_DB_PATH: &str = "projtrack.db";

#[derive(Debug)]
pub enum CliError {
    Db(DbError),
    Seed(SeedError),
    Repo(RepoError),
    Io(io::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Seed(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Seed(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<DbError> for CliError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<SeedError> for CliError {
    fn from(value: SeedError) -> Self {
        Self::Seed(value)
    }
}

impl From<RepoError> for CliError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<io::Error> for CliError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("fatal: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    init_logging_best_effort();

    let db_path = env::var(DB_PATH_ENV).unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
    let conn = open_db(&db_path)?;
    let summary = apply_seed(&conn)?;
    info!(
        "event=app_start module=cli status=ok db_path={db_path} seeded_rows={}",
        summary.total()
    );

    let repo = SqliteReportRepository::try_new(&conn)?;
    let service = ReportService::new(repo);
    menu::run_loop(&service)
}

/// Initializes file logging from the environment.
///
/// A failure here disables logging for the session but never aborts the run.
fn init_logging_best_effort() {
    let level = env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
    let log_dir = match env::var(LOG_DIR_ENV).map(PathBuf::from) {
        Ok(dir) => dir,
        Err(_) => match env::current_dir() {
            Ok(cwd) => cwd.join("logs"),
            Err(err) => {
                eprintln!("warning: logging disabled: cannot resolve working directory: {err}");
                return;
            }
        },
    };

    let Some(log_dir) = log_dir.to_str() else {
        eprintln!("warning: logging disabled: log directory is not valid UTF-8");
        return;
    };
    if let Err(err) = init_logging(&level, log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }
}
