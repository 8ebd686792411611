//! Interactive menu loop and choice parsing.
//!
//! # Responsibility
//! - Read numeric choices from stdin and dispatch the matching report.
//! - Re-prompt after every report or invalid input until exit.
//!
//! # Invariants
//! - The loop is iterative; no recursive re-entry on invalid input.
//! - Non-numeric and out-of-range input both count as an invalid choice.
//! - EOF on stdin terminates the loop cleanly.

use crate::render;
use crate::CliError;
use chrono::Local;
use log::info;
use projtrack_core::{ReportRepository, ReportService};
use std::io::{self, BufRead, Write};

const MENU_TEXT: &str = "\n=== Project tracker ===\n\
1. Projects in progress\n\
2. Unfinished task count per project\n\
3. Unfinished tasks by responsible\n\
4. Tasks due today\n\
5. Overdue tasks and contacts\n\
6. Exit";

const INVALID_CHOICE_TEXT: &str = "Invalid choice, enter a number between 1 and 6.";

/// One transition of the menu state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ProjectsInProgress,
    UnfinishedCounts,
    TasksByResponsible,
    TasksDueToday,
    OverdueTasks,
    Exit,
}

/// Parses one input line into a menu choice.
///
/// Returns `None` for out-of-range numbers and for non-numeric input; both
/// are handled as an invalid choice with a re-prompt.
pub fn parse_choice(input: &str) -> Option<MenuChoice> {
    match input.trim().parse::<u8>() {
        Ok(1) => Some(MenuChoice::ProjectsInProgress),
        Ok(2) => Some(MenuChoice::UnfinishedCounts),
        Ok(3) => Some(MenuChoice::TasksByResponsible),
        Ok(4) => Some(MenuChoice::TasksDueToday),
        Ok(5) => Some(MenuChoice::OverdueTasks),
        Ok(6) => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// Runs the menu loop until exit is chosen or stdin closes.
///
/// # Errors
/// - Query and stdin/stdout failures propagate; they are fatal for the run.
pub fn run_loop<R: ReportRepository>(service: &ReportService<R>) -> Result<(), CliError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!("{MENU_TEXT}");
        print!("Choose an option: ");
        io::stdout().flush()?;

        let Some(line) = read_line(&mut input)? else {
            break;
        };

        let Some(choice) = parse_choice(&line) else {
            println!("{INVALID_CHOICE_TEXT}");
            continue;
        };

        info!("event=menu_choice module=cli choice={choice:?}");
        let today = Local::now().date_naive();

        match choice {
            MenuChoice::Exit => break,
            MenuChoice::ProjectsInProgress => {
                let projects = service.projects_in_progress()?;
                println!("{}", render::projects_in_progress(&projects));
            }
            MenuChoice::UnfinishedCounts => {
                let counts = service.unfinished_task_counts()?;
                println!("{}", render::unfinished_task_counts(&counts));
            }
            MenuChoice::TasksByResponsible => {
                let Some(name) = prompt_responsible(&mut input)? else {
                    break;
                };
                let tasks = service.unfinished_tasks_for(&name)?;
                println!("{}", render::unfinished_tasks_for(&name, &tasks));
            }
            MenuChoice::TasksDueToday => {
                let tasks = service.tasks_due_by(today)?;
                println!("{}", render::tasks_due_today(&tasks));
            }
            MenuChoice::OverdueTasks => {
                let tasks = service.overdue_tasks(today)?;
                println!("{}", render::overdue_tasks(&tasks));
            }
        }
    }

    info!("event=menu_exit module=cli status=ok");
    Ok(())
}

/// Prompts for a responsible name; the match is exact and case-sensitive, so
/// only line endings are stripped.
fn prompt_responsible(input: &mut impl BufRead) -> Result<Option<String>, CliError> {
    print!("Responsible name: ");
    io::stdout().flush()?;
    read_line(input)
}

/// Reads one line; `None` means stdin reached EOF.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>, CliError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::{parse_choice, read_line, MenuChoice};

    #[test]
    fn parse_choice_maps_all_transitions() {
        assert_eq!(parse_choice("1"), Some(MenuChoice::ProjectsInProgress));
        assert_eq!(parse_choice("2"), Some(MenuChoice::UnfinishedCounts));
        assert_eq!(parse_choice("3"), Some(MenuChoice::TasksByResponsible));
        assert_eq!(parse_choice("4"), Some(MenuChoice::TasksDueToday));
        assert_eq!(parse_choice("5"), Some(MenuChoice::OverdueTasks));
        assert_eq!(parse_choice("6"), Some(MenuChoice::Exit));
    }

    #[test]
    fn parse_choice_tolerates_surrounding_whitespace() {
        assert_eq!(parse_choice(" 4 \n"), Some(MenuChoice::TasksDueToday));
    }

    #[test]
    fn parse_choice_rejects_out_of_range_numbers() {
        assert_eq!(parse_choice("0"), None);
        assert_eq!(parse_choice("7"), None);
        assert_eq!(parse_choice("42"), None);
    }

    #[test]
    fn parse_choice_treats_non_numeric_input_as_invalid() {
        assert_eq!(parse_choice("exit"), None);
        assert_eq!(parse_choice(""), None);
        assert_eq!(parse_choice("-1"), None);
        assert_eq!(parse_choice("1.5"), None);
    }

    #[test]
    fn read_line_strips_line_endings_only() {
        let mut input = "  Alice Smith \r\n".as_bytes();
        let line = read_line(&mut input).unwrap().unwrap();
        assert_eq!(line, "  Alice Smith ");
    }

    #[test]
    fn read_line_signals_eof_with_none() {
        let mut input = "".as_bytes();
        assert!(read_line(&mut input).unwrap().is_none());
    }
}
