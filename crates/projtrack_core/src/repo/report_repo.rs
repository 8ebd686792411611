//! Report query contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide the five fixed reporting reads over projects/responsibles/tasks.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Every query is read-only; an empty result set is a normal empty `Vec`.
//! - Due-date comparisons use SQLite calendar arithmetic
//!   (`DATE(start_date, '+N days')`), matching `Task::due_date`.
//! - Result ordering is deterministic.

use crate::db::DbError;
use crate::db::migrations::latest_version;
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};

const REQUIRED_TABLES: &[&str] = &["projects", "responsibles", "tasks"];

const REQUIRED_COLUMNS: &[(&str, &str)] = &[
    ("tasks", "start_date"),
    ("tasks", "duration_days"),
    ("tasks", "completed"),
];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for report query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} is behind expected {expected_version}; run migrations first"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Unfinished-task count for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTaskCount {
    pub project_name: String,
    pub unfinished: i64,
}

/// Read model for the due-today report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueTask {
    pub task_name: String,
    pub responsible_name: String,
}

/// Read model for the overdue report, including the responsible's contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverdueTask {
    pub task_name: String,
    pub responsible_name: String,
    pub contact: String,
}

/// Repository interface for the fixed reporting reads.
pub trait ReportRepository {
    /// Distinct projects having at least one unfinished task.
    fn projects_in_progress(&self) -> RepoResult<Vec<String>>;
    /// Unfinished-task counts grouped by project.
    fn unfinished_task_counts(&self) -> RepoResult<Vec<ProjectTaskCount>>;
    /// Unfinished tasks of the exactly-named responsible.
    ///
    /// An unknown name yields an empty list, not an error.
    fn unfinished_tasks_for(&self, responsible: &str) -> RepoResult<Vec<String>>;
    /// Unfinished tasks already started as of `today`.
    fn tasks_due_by(&self, today: NaiveDate) -> RepoResult<Vec<DueTask>>;
    /// Unfinished tasks whose due date lies strictly before `today`.
    fn overdue_tasks(&self, today: NaiveDate) -> RepoResult<Vec<OverdueTask>>;
}

/// SQLite-backed report repository.
pub struct SqliteReportRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteReportRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    ///
    /// # Errors
    /// - [`RepoError::UninitializedConnection`] when migrations were not run.
    /// - [`RepoError::MissingRequiredTable`]/[`RepoError::MissingRequiredColumn`]
    ///   when the schema does not match this binary.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ReportRepository for SqliteReportRepository<'_> {
    fn projects_in_progress(&self) -> RepoResult<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT p.name
             FROM projects p
             JOIN tasks t ON t.project_id = p.id
             WHERE t.completed = 0
             ORDER BY p.name;",
        )?;

        let mut rows = stmt.query([])?;
        let mut names = Vec::new();
        while let Some(row) = rows.next()? {
            names.push(row.get("name")?);
        }
        Ok(names)
    }

    fn unfinished_task_counts(&self) -> RepoResult<Vec<ProjectTaskCount>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.name, COUNT(t.id) AS unfinished
             FROM projects p
             JOIN tasks t ON t.project_id = p.id
             WHERE t.completed = 0
             GROUP BY p.id, p.name
             ORDER BY p.name;",
        )?;

        let mut rows = stmt.query([])?;
        let mut counts = Vec::new();
        while let Some(row) = rows.next()? {
            counts.push(ProjectTaskCount {
                project_name: row.get("name")?,
                unfinished: row.get("unfinished")?,
            });
        }
        Ok(counts)
    }

    fn unfinished_tasks_for(&self, responsible: &str) -> RepoResult<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT t.name
             FROM tasks t
             JOIN responsibles r ON r.id = t.responsible_id
             WHERE r.name = ?1 AND t.completed = 0
             ORDER BY t.name, t.id;",
        )?;

        let mut rows = stmt.query(params![responsible])?;
        let mut names = Vec::new();
        while let Some(row) = rows.next()? {
            names.push(row.get("name")?);
        }
        Ok(names)
    }

    fn tasks_due_by(&self, today: NaiveDate) -> RepoResult<Vec<DueTask>> {
        let mut stmt = self.conn.prepare(
            "SELECT t.name AS task_name, r.name AS responsible_name
             FROM tasks t
             JOIN responsibles r ON r.id = t.responsible_id
             WHERE t.start_date <= ?1 AND t.completed = 0
             ORDER BY t.start_date, t.id;",
        )?;

        let mut rows = stmt.query(params![iso_date(today)])?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(DueTask {
                task_name: row.get("task_name")?,
                responsible_name: row.get("responsible_name")?,
            });
        }
        Ok(tasks)
    }

    fn overdue_tasks(&self, today: NaiveDate) -> RepoResult<Vec<OverdueTask>> {
        let mut stmt = self.conn.prepare(
            "SELECT t.name AS task_name, r.name AS responsible_name, r.contact
             FROM tasks t
             JOIN responsibles r ON r.id = t.responsible_id
             WHERE t.completed = 0
               AND DATE(t.start_date, '+' || t.duration_days || ' days') < ?1
             ORDER BY DATE(t.start_date, '+' || t.duration_days || ' days'), t.id;",
        )?;

        let mut rows = stmt.query(params![iso_date(today)])?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(OverdueTask {
                task_name: row.get("task_name")?,
                responsible_name: row.get("responsible_name")?,
                contact: row.get("contact")?,
            });
        }
        Ok(tasks)
    }
}

fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let expected_version = latest_version();
    if actual_version < expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    for table in REQUIRED_TABLES {
        let exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
            );",
            [table],
            |row| row.get(0),
        )?;
        if exists == 0 {
            return Err(RepoError::MissingRequiredTable(table));
        }
    }

    for (table, column) in REQUIRED_COLUMNS {
        let exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM pragma_table_info(?1) WHERE name = ?2
            );",
            params![table, column],
            |row| row.get(0),
        )?;
        if exists == 0 {
            return Err(RepoError::MissingRequiredColumn { table, column });
        }
    }

    Ok(())
}
