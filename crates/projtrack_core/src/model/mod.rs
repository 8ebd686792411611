//! Domain records for the project-tracking schema.
//!
//! # Responsibility
//! - Define the canonical project/responsible/task records.
//! - Provide the derived-deadline arithmetic used by reporting.
//!
//! # Invariants
//! - Every record is identified by an explicit integer `id`.
//! - Task deadlines are always derived (`start_date + duration_days`), never
//!   stored.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod project;
pub mod responsible;
pub mod task;

/// Record-level validation failure, reported with the offending row id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyProjectName { id: i64 },
    EmptyResponsibleName { id: i64 },
    EmptyContact { id: i64 },
    EmptyTaskName { id: i64 },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyProjectName { id } => write!(f, "project {id} has an empty name"),
            Self::EmptyResponsibleName { id } => write!(f, "responsible {id} has an empty name"),
            Self::EmptyContact { id } => write!(f, "responsible {id} has an empty contact"),
            Self::EmptyTaskName { id } => write!(f, "task {id} has an empty name"),
        }
    }
}

impl Error for ValidationError {}
