//! Task record and deadline arithmetic.
//!
//! # Responsibility
//! - Define the task record shared by seeding and reporting.
//! - Derive the due date from start date and duration.
//!
//! # Invariants
//! - `project_id` and `responsible_id` must reference existing rows; the
//!   storage layer enforces this with `foreign_keys=ON`.
//! - The due date is `start_date + duration_days`, exact calendar arithmetic
//!   with no timezone component.

use super::ValidationError;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// A unit of work assigned to one project and one responsible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub project_id: i64,
    pub responsible_id: i64,
    pub name: String,
    /// Calendar date the work begins; persisted as ISO `YYYY-MM-DD` text.
    pub start_date: NaiveDate,
    /// Planned working duration in whole days.
    pub duration_days: u32,
    pub completed: bool,
}

impl Task {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyTaskName { id: self.id });
        }
        Ok(())
    }

    /// Computed deadline: start date plus duration in days.
    ///
    /// Saturates at the calendar maximum if the addition would overflow.
    pub fn due_date(&self) -> NaiveDate {
        self.start_date
            .checked_add_days(Days::new(u64::from(self.duration_days)))
            .unwrap_or(NaiveDate::MAX)
    }

    /// An unfinished task whose due date is strictly before `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date() < today
    }

    /// An unfinished task that has already started as of `today`.
    pub fn is_due_by(&self, today: NaiveDate) -> bool {
        !self.completed && self.start_date <= today
    }
}
