#[cfg(test)]
mod tests {
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use taskmaster::libs::sort::{compare, sort};
    use taskmaster::libs::task::{Task, TaskDraft, TaskStatus};
    use std::cmp::Ordering;

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    fn created(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 9, minute, 0).unwrap()
    }

    fn task(id: &str, status: TaskStatus, due: Option<&str>, created_at: DateTime<Utc>) -> Task {
        let mut draft = TaskDraft::new(id);
        draft.status = status;
        draft.due_date = due.map(date);
        draft.into_task(id.to_string(), created_at, None)
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_status_beats_due_date() {
        let tasks = vec![
            task("todo-late", TaskStatus::Todo, Some("2024-06-10"), created(0)),
            task("done", TaskStatus::Completed, Some("2024-06-05"), created(0)),
            task("todo-early", TaskStatus::Todo, Some("2024-06-01"), created(0)),
        ];

        assert_eq!(ids(&sort(&tasks)), vec!["todo-early", "todo-late", "done"]);
    }

    #[test]
    fn test_due_date_present_before_absent() {
        let tasks = vec![
            task("no-due", TaskStatus::InProgress, None, created(5)),
            task("due", TaskStatus::InProgress, Some("2030-01-01"), created(0)),
        ];

        assert_eq!(ids(&sort(&tasks)), vec!["due", "no-due"]);
    }

    #[test]
    fn test_completed_tasks_ordered_by_completion_date() {
        let mut early = task("early", TaskStatus::Completed, None, created(0));
        early.actual_completion_date = Some(date("2024-06-02"));
        let mut late = task("late", TaskStatus::Completed, None, created(9));
        late.actual_completion_date = Some(date("2024-06-04"));
        let missing = task("missing", TaskStatus::Completed, None, created(30));

        let sorted = sort(&[missing, late, early]);
        assert_eq!(ids(&sorted), vec!["early", "late", "missing"]);
    }

    #[test]
    fn test_equal_due_dates_fall_through_to_creation_time() {
        let mut older = task("older", TaskStatus::Completed, Some("2024-06-05"), created(0));
        older.actual_completion_date = Some(date("2024-06-01"));
        let mut newer = task(
            "newer",
            TaskStatus::Completed,
            Some("2024-06-05"),
            Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap(),
        );
        newer.actual_completion_date = Some(date("2024-06-04"));

        // Completion dates only order completed tasks that have no due date.
        assert_eq!(ids(&sort(&[older, newer])), vec!["newer", "older"]);
    }

    #[test]
    fn test_completion_date_ignored_outside_completed_pairs() {
        let mut older = task("older", TaskStatus::Todo, Some("2024-06-05"), created(0));
        older.actual_completion_date = Some(date("2024-06-01"));
        let newer = task("newer", TaskStatus::Todo, Some("2024-06-05"), created(10));

        // Falls through to creation time, newest first.
        assert_eq!(ids(&sort(&[older, newer])), vec!["newer", "older"]);
    }

    #[test]
    fn test_id_breaks_remaining_ties() {
        let a = task("a", TaskStatus::Todo, None, created(0));
        let b = task("b", TaskStatus::Todo, None, created(0));

        assert_eq!(compare(&a, &b), Ordering::Less);
        assert_eq!(compare(&b, &a), Ordering::Greater);
        assert_eq!(compare(&a, &a), Ordering::Equal);
    }

    #[test]
    fn test_sort_is_idempotent_and_status_non_decreasing() {
        let statuses = [TaskStatus::Completed, TaskStatus::Todo, TaskStatus::InProgress];
        let dues = [None, Some("2024-06-03"), Some("2024-05-30"), Some("2024-06-03")];
        let tasks: Vec<Task> = (0..12)
            .map(|i| {
                task(
                    &format!("t{:02}", i),
                    statuses[i % statuses.len()],
                    dues[i % dues.len()],
                    created((i as u32 * 7) % 60),
                )
            })
            .collect();

        let once = sort(&tasks);
        let twice = sort(&once);
        assert_eq!(once, twice);
        assert_eq!(once.len(), tasks.len());
        assert!(once.windows(2).all(|pair| pair[0].status <= pair[1].status));
    }

    #[test]
    fn test_sort_leaves_input_untouched() {
        let tasks = vec![
            task("b", TaskStatus::Completed, None, created(0)),
            task("a", TaskStatus::Todo, None, created(0)),
        ];
        let before = tasks.clone();

        let _ = sort(&tasks);
        assert_eq!(tasks, before);
    }
}
