//! Fixed demonstration dataset and idempotent seeding.
//!
//! # Responsibility
//! - Define the ten demonstration projects, responsibles and tasks.
//! - Insert them with `INSERT OR IGNORE` so reruns skip existing ids.
//!
//! # Invariants
//! - Every record is validated before any SQL mutation.
//! - Parents (projects, responsibles) are inserted before tasks; the
//!   connection's `foreign_keys=ON` rejects dangling task references.
//! - Re-running the seed never overwrites or duplicates a row.

use crate::db::DbError;
use crate::model::project::Project;
use crate::model::responsible::Responsible;
use crate::model::task::Task;
use crate::model::ValidationError;
use chrono::NaiveDate;
use log::{error, info};
use rusqlite::{params, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type SeedResult<T> = Result<T, SeedError>;

#[derive(Debug)]
pub enum SeedError {
    Validation(ValidationError),
    InvalidDate { task_id: i64, value: &'static str },
    Db(DbError),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::InvalidDate { task_id, value } => {
                write!(f, "seed task {task_id} has invalid start date `{value}`")
            }
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::InvalidDate { .. } => None,
            Self::Db(err) => Some(err),
        }
    }
}

impl From<ValidationError> for SeedError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for SeedError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SeedError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Rows actually written by one [`apply_seed`] run.
///
/// A second run over the same database reports all-zero counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub projects_inserted: usize,
    pub responsibles_inserted: usize,
    pub tasks_inserted: usize,
}

impl SeedSummary {
    pub fn total(&self) -> usize {
        self.projects_inserted + self.responsibles_inserted + self.tasks_inserted
    }
}

const PROJECT_NAMES: &[&str] = &[
    "Project Alpha",
    "Project Beta",
    "Project Gamma",
    "Project Delta",
    "Project Epsilon",
    "Project Zeta",
    "Project Eta",
    "Project Theta",
    "Project Iota",
    "Project Kappa",
];

const RESPONSIBLE_NAMES: &[(&str, &str)] = &[
    ("Alice", "alice@example.com"),
    ("Bob", "bob@example.com"),
    ("Ivan", "ivan@example.com"),
    ("Maria", "maria@example.com"),
    ("Dmitry", "dmitry@example.com"),
    ("Sergey", "sergey@example.com"),
    ("Ekaterina", "ekaterina@example.com"),
    ("Anna", "anna@example.com"),
    ("Petr", "petr@example.com"),
    ("Olga", "olga@example.com"),
];

struct TaskRow {
    id: i64,
    project_id: i64,
    responsible_id: i64,
    name: &'static str,
    start_date: &'static str,
    duration_days: u32,
    completed: bool,
}

const TASK_ROWS: &[TaskRow] = &[
    TaskRow {
        id: 1,
        project_id: 1,
        responsible_id: 1,
        name: "Task 1",
        start_date: "2025-01-01",
        duration_days: 10,
        completed: false,
    },
    TaskRow {
        id: 2,
        project_id: 2,
        responsible_id: 2,
        name: "Task 2",
        start_date: "2025-01-05",
        duration_days: 5,
        completed: false,
    },
    TaskRow {
        id: 3,
        project_id: 3,
        responsible_id: 3,
        name: "Task 3",
        start_date: "2025-01-10",
        duration_days: 7,
        completed: true,
    },
    TaskRow {
        id: 4,
        project_id: 4,
        responsible_id: 4,
        name: "Task 4",
        start_date: "2025-01-12",
        duration_days: 15,
        completed: false,
    },
    TaskRow {
        id: 5,
        project_id: 5,
        responsible_id: 5,
        name: "Task 5",
        start_date: "2025-01-15",
        duration_days: 20,
        completed: false,
    },
    TaskRow {
        id: 6,
        project_id: 6,
        responsible_id: 6,
        name: "Task 6",
        start_date: "2025-01-20",
        duration_days: 8,
        completed: false,
    },
    TaskRow {
        id: 7,
        project_id: 7,
        responsible_id: 7,
        name: "Task 7",
        start_date: "2025-01-22",
        duration_days: 10,
        completed: false,
    },
    TaskRow {
        id: 8,
        project_id: 8,
        responsible_id: 8,
        name: "Task 8",
        start_date: "2025-01-25",
        duration_days: 5,
        completed: true,
    },
    TaskRow {
        id: 9,
        project_id: 9,
        responsible_id: 9,
        name: "Task 9",
        start_date: "2025-01-28",
        duration_days: 12,
        completed: false,
    },
    TaskRow {
        id: 10,
        project_id: 10,
        responsible_id: 10,
        name: "Task 10",
        start_date: "2025-01-30",
        duration_days: 9,
        completed: false,
    },
];

/// Returns the fixed demonstration projects.
pub fn seed_projects() -> Vec<Project> {
    PROJECT_NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| Project::new(index as i64 + 1, *name))
        .collect()
}

/// Returns the fixed demonstration responsibles.
pub fn seed_responsibles() -> Vec<Responsible> {
    RESPONSIBLE_NAMES
        .iter()
        .enumerate()
        .map(|(index, (name, contact))| Responsible::new(index as i64 + 1, *name, *contact))
        .collect()
}

/// Returns the fixed demonstration tasks.
///
/// # Errors
/// - [`SeedError::InvalidDate`] if a dataset start date fails to parse as
///   ISO `YYYY-MM-DD`.
pub fn seed_tasks() -> SeedResult<Vec<Task>> {
    TASK_ROWS
        .iter()
        .map(|row| {
            let start_date =
                NaiveDate::parse_from_str(row.start_date, "%Y-%m-%d").map_err(|_| {
                    SeedError::InvalidDate {
                        task_id: row.id,
                        value: row.start_date,
                    }
                })?;
            Ok(Task {
                id: row.id,
                project_id: row.project_id,
                responsible_id: row.responsible_id,
                name: row.name.to_string(),
                start_date,
                duration_days: row.duration_days,
                completed: row.completed,
            })
        })
        .collect()
}

/// Inserts the demonstration dataset, skipping rows whose id already exists.
///
/// # Side effects
/// - Emits `seed_apply` logging events with per-table insert counts.
pub fn apply_seed(conn: &Connection) -> SeedResult<SeedSummary> {
    let started_at = Instant::now();
    info!("event=seed_apply module=seed status=start");

    match insert_dataset(conn) {
        Ok(summary) => {
            info!(
                "event=seed_apply module=seed status=ok duration_ms={} projects={} responsibles={} tasks={}",
                started_at.elapsed().as_millis(),
                summary.projects_inserted,
                summary.responsibles_inserted,
                summary.tasks_inserted
            );
            Ok(summary)
        }
        Err(err) => {
            error!(
                "event=seed_apply module=seed status=error duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            );
            Err(err)
        }
    }
}

fn insert_dataset(conn: &Connection) -> SeedResult<SeedSummary> {
    let mut summary = SeedSummary::default();

    for project in seed_projects() {
        project.validate()?;
        summary.projects_inserted += conn.execute(
            "INSERT OR IGNORE INTO projects (id, name) VALUES (?1, ?2);",
            params![project.id, project.name],
        )?;
    }

    for responsible in seed_responsibles() {
        responsible.validate()?;
        summary.responsibles_inserted += conn.execute(
            "INSERT OR IGNORE INTO responsibles (id, name, contact) VALUES (?1, ?2, ?3);",
            params![responsible.id, responsible.name, responsible.contact],
        )?;
    }

    for task in seed_tasks()? {
        task.validate()?;
        summary.tasks_inserted += conn.execute(
            "INSERT OR IGNORE INTO tasks (
                id,
                project_id,
                responsible_id,
                name,
                start_date,
                duration_days,
                completed
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                task.id,
                task.project_id,
                task.responsible_id,
                task.name,
                task.start_date.format("%Y-%m-%d").to_string(),
                task.duration_days,
                task.completed,
            ],
        )?;
    }

    Ok(summary)
}
