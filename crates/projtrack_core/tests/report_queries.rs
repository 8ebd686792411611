use chrono::NaiveDate;
use projtrack_core::db::migrations::latest_version;
use projtrack_core::db::open_db_in_memory;
use projtrack_core::{
    apply_seed, RepoError, ReportRepository, ReportService, SqliteReportRepository,
};
use rusqlite::Connection;

fn seeded_connection() -> Connection {
    let conn = open_db_in_memory().unwrap();
    apply_seed(&conn).unwrap();
    conn
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn projects_in_progress_excludes_fully_completed_projects() {
    let conn = seeded_connection();
    let repo = SqliteReportRepository::try_new(&conn).unwrap();

    let projects = repo.projects_in_progress().unwrap();

    // Tasks 3 and 8 are completed, so Gamma and Theta have no open work.
    assert_eq!(
        projects,
        vec![
            "Project Alpha",
            "Project Beta",
            "Project Delta",
            "Project Epsilon",
            "Project Eta",
            "Project Iota",
            "Project Kappa",
            "Project Zeta",
        ]
    );
}

#[test]
fn completing_the_last_open_task_removes_the_project_from_in_progress() {
    let conn = seeded_connection();
    let repo = SqliteReportRepository::try_new(&conn).unwrap();

    conn.execute("UPDATE tasks SET completed = 1 WHERE id = 1;", [])
        .unwrap();

    let projects = repo.projects_in_progress().unwrap();
    assert!(!projects.contains(&"Project Alpha".to_string()));
    assert_eq!(projects.len(), 7);
}

#[test]
fn unfinished_task_counts_group_by_project() {
    let conn = seeded_connection();
    let repo = SqliteReportRepository::try_new(&conn).unwrap();

    let counts = repo.unfinished_task_counts().unwrap();

    assert_eq!(counts.len(), 8);
    assert!(counts
        .iter()
        .all(|entry| entry.unfinished == 1), "each seeded project owns one task");
    assert!(!counts
        .iter()
        .any(|entry| entry.project_name == "Project Gamma"));

    conn.execute(
        "INSERT INTO tasks (
            id, project_id, responsible_id, name, start_date, duration_days, completed
        ) VALUES (11, 1, 2, 'Task 11', '2025-02-01', 3, 0);",
        [],
    )
    .unwrap();

    let counts = repo.unfinished_task_counts().unwrap();
    let alpha = counts
        .iter()
        .find(|entry| entry.project_name == "Project Alpha")
        .unwrap();
    assert_eq!(alpha.unfinished, 2);
}

#[test]
fn unfinished_tasks_by_responsible_matches_exact_name() {
    let conn = seeded_connection();
    let repo = SqliteReportRepository::try_new(&conn).unwrap();

    assert_eq!(
        repo.unfinished_tasks_for("Alice").unwrap(),
        vec!["Task 1".to_string()]
    );

    // Ivan owns only Task 3, which is already completed.
    assert!(repo.unfinished_tasks_for("Ivan").unwrap().is_empty());
}

#[test]
fn unknown_responsible_yields_an_empty_list_not_an_error() {
    let conn = seeded_connection();
    let repo = SqliteReportRepository::try_new(&conn).unwrap();

    assert!(repo.unfinished_tasks_for("Nobody").unwrap().is_empty());
    assert!(repo.unfinished_tasks_for("alice").unwrap().is_empty());
    assert!(repo.unfinished_tasks_for("").unwrap().is_empty());
}

#[test]
fn tasks_due_by_selects_started_unfinished_tasks() {
    let conn = seeded_connection();
    let repo = SqliteReportRepository::try_new(&conn).unwrap();

    let early = repo.tasks_due_by(date(2025, 1, 6)).unwrap();
    let names: Vec<&str> = early.iter().map(|task| task.task_name.as_str()).collect();
    assert_eq!(names, vec!["Task 1", "Task 2"]);
    assert_eq!(early[0].responsible_name, "Alice");

    // By February every unfinished task has started; the two completed ones
    // stay out.
    let all_started = repo.tasks_due_by(date(2025, 2, 1)).unwrap();
    assert_eq!(all_started.len(), 8);

    let none = repo.tasks_due_by(date(2024, 12, 31)).unwrap();
    assert!(none.is_empty());
}

#[test]
fn overdue_tasks_at_fixed_date_match_the_calendar() {
    let conn = seeded_connection();
    let repo = SqliteReportRepository::try_new(&conn).unwrap();

    let overdue = repo.overdue_tasks(date(2025, 2, 1)).unwrap();
    let names: Vec<&str> = overdue.iter().map(|task| task.task_name.as_str()).collect();

    // Ordered by due date: Task 2 (Jan 10), Task 1 (Jan 11), Task 4 (Jan 27),
    // Task 6 (Jan 28). Task 5 is due Feb 4 and not yet overdue; Task 7 is due
    // exactly Feb 1, and "due today" is not overdue.
    assert_eq!(names, vec!["Task 2", "Task 1", "Task 4", "Task 6"]);

    let task_one = overdue.iter().find(|task| task.task_name == "Task 1").unwrap();
    assert_eq!(task_one.responsible_name, "Alice");
    assert_eq!(task_one.contact, "alice@example.com");
}

#[test]
fn completing_an_overdue_task_removes_it_from_the_report() {
    let conn = seeded_connection();
    let repo = SqliteReportRepository::try_new(&conn).unwrap();

    assert!(repo
        .overdue_tasks(date(2025, 2, 1))
        .unwrap()
        .iter()
        .any(|task| task.task_name == "Task 1"));

    conn.execute("UPDATE tasks SET completed = 1 WHERE id = 1;", [])
        .unwrap();

    assert!(!repo
        .overdue_tasks(date(2025, 2, 1))
        .unwrap()
        .iter()
        .any(|task| task.task_name == "Task 1"));
}

#[test]
fn reports_on_an_unseeded_database_return_empty_bodies() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteReportRepository::try_new(&conn).unwrap();

    assert!(repo.projects_in_progress().unwrap().is_empty());
    assert!(repo.unfinished_task_counts().unwrap().is_empty());
    assert!(repo.tasks_due_by(date(2025, 2, 1)).unwrap().is_empty());
    assert!(repo.overdue_tasks(date(2025, 2, 1)).unwrap().is_empty());
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteReportRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_required_tables() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteReportRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("projects"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_task_columns() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE projects (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
         CREATE TABLE responsibles (
             id INTEGER PRIMARY KEY,
             name TEXT NOT NULL,
             contact TEXT NOT NULL
         );
         CREATE TABLE tasks (
             id INTEGER PRIMARY KEY,
             project_id INTEGER NOT NULL,
             responsible_id INTEGER NOT NULL,
             name TEXT NOT NULL
         );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteReportRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "tasks",
            column: "start_date"
        })
    ));
}

#[test]
fn service_wraps_repository_calls() {
    let conn = seeded_connection();
    let repo = SqliteReportRepository::try_new(&conn).unwrap();
    let service = ReportService::new(repo);

    assert_eq!(service.projects_in_progress().unwrap().len(), 8);
    assert_eq!(service.unfinished_task_counts().unwrap().len(), 8);
    assert_eq!(
        service.unfinished_tasks_for("Bob").unwrap(),
        vec!["Task 2".to_string()]
    );
    assert_eq!(service.overdue_tasks(date(2025, 2, 1)).unwrap().len(), 4);
    assert_eq!(service.tasks_due_by(date(2025, 2, 1)).unwrap().len(), 8);
}
