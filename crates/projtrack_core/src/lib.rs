//! Core domain logic for projtrack.
//! This crate is the single source of truth for schema, seed data and
//! reporting invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;

pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging};
pub use model::project::Project;
pub use model::responsible::Responsible;
pub use model::task::Task;
pub use model::ValidationError;
pub use repo::report_repo::{
    DueTask, OverdueTask, ProjectTaskCount, RepoError, RepoResult, ReportRepository,
    SqliteReportRepository,
};
pub use seed::{apply_seed, SeedError, SeedResult, SeedSummary};
pub use service::report_service::ReportService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
