//! Reporting use-case service.
//!
//! # Responsibility
//! - Provide stable report entry points for CLI callers.
//! - Delegate query execution to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository readiness contracts.
//! - The service layer remains storage-agnostic.

use crate::repo::report_repo::{
    DueTask, OverdueTask, ProjectTaskCount, RepoResult, ReportRepository,
};
use chrono::NaiveDate;

/// Use-case service wrapper for the fixed reporting reads.
pub struct ReportService<R: ReportRepository> {
    repo: R,
}

impl<R: ReportRepository> ReportService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Names of projects with at least one unfinished task.
    pub fn projects_in_progress(&self) -> RepoResult<Vec<String>> {
        self.repo.projects_in_progress()
    }

    /// Unfinished-task counts per project.
    pub fn unfinished_task_counts(&self) -> RepoResult<Vec<ProjectTaskCount>> {
        self.repo.unfinished_task_counts()
    }

    /// Unfinished tasks of the exactly-named responsible.
    pub fn unfinished_tasks_for(&self, responsible: &str) -> RepoResult<Vec<String>> {
        self.repo.unfinished_tasks_for(responsible)
    }

    /// Unfinished tasks already started as of `today`.
    pub fn tasks_due_by(&self, today: NaiveDate) -> RepoResult<Vec<DueTask>> {
        self.repo.tasks_due_by(today)
    }

    /// Unfinished tasks whose due date has passed as of `today`.
    pub fn overdue_tasks(&self, today: NaiveDate) -> RepoResult<Vec<OverdueTask>> {
        self.repo.overdue_tasks(today)
    }
}
