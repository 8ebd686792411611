//! Plain-text rendering for report output.
//!
//! Every report prints a header line; an empty result keeps the header with
//! no body rows.

use projtrack_core::{DueTask, OverdueTask, ProjectTaskCount};
use std::fmt::Write;

pub fn projects_in_progress(projects: &[String]) -> String {
    let mut out = String::from("Projects in progress:");
    for name in projects {
        let _ = write!(out, "\n- {name}");
    }
    out
}

pub fn unfinished_task_counts(counts: &[ProjectTaskCount]) -> String {
    let mut out = String::from("Unfinished tasks per project:");
    for count in counts {
        let _ = write!(out, "\n{}: {} task(s)", count.project_name, count.unfinished);
    }
    out
}

pub fn unfinished_tasks_for(responsible: &str, tasks: &[String]) -> String {
    let mut out = format!("Unfinished tasks for {responsible}:");
    for name in tasks {
        let _ = write!(out, "\n- {name}");
    }
    out
}

pub fn tasks_due_today(tasks: &[DueTask]) -> String {
    let mut out = String::from("Tasks due today:");
    for task in tasks {
        let _ = write!(
            out,
            "\n{} (responsible: {})",
            task.task_name, task.responsible_name
        );
    }
    out
}

pub fn overdue_tasks(tasks: &[OverdueTask]) -> String {
    let mut out = String::from("Overdue tasks:");
    for task in tasks {
        let _ = write!(
            out,
            "\n{} (responsible: {}, contact: {})",
            task.task_name, task.responsible_name, task.contact
        );
    }
    out
}
