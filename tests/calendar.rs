#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
    use taskmaster::libs::calendar::{
        bucket, is_today, Calendar, DayRole, Window, DEFAULT_WINDOW_LENGTH, MAX_WINDOW_LENGTH,
    };
    use taskmaster::libs::task::{Task, TaskDraft, TaskStatus};

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    fn task(id: &str, title: &str, status: TaskStatus, start: Option<&str>, due: Option<&str>) -> Task {
        let mut draft = TaskDraft::new(title);
        draft.status = status;
        draft.start_date = start.map(date);
        draft.due_date = due.map(date);
        draft.into_task(id.to_string(), Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(), None)
    }

    fn june_window() -> Window {
        Window::starting(date("2024-06-03"))
    }

    #[test]
    fn test_window_keys() {
        let window = june_window();

        assert_eq!(window.length(), DEFAULT_WINDOW_LENGTH);
        assert_eq!(
            window.keys(),
            vec!["2024-06-03", "2024-06-04", "2024-06-05", "2024-06-06", "2024-06-07", "2024-06-08", "2024-06-09"]
        );
        assert_eq!(window.end(), date("2024-06-09"));
    }

    #[test]
    fn test_due_task_lands_on_its_day_only() {
        let tasks = vec![task("1", "Ship", TaskStatus::Todo, None, Some("2024-06-09"))];
        let buckets = bucket(&tasks, &june_window());

        assert_eq!(buckets.len(), 7);
        for (key, day) in &buckets {
            if key == "2024-06-09" {
                assert_eq!(day.len(), 1);
                assert_eq!(day[0].id, "1");
            } else {
                assert!(day.is_empty(), "unexpected task on {}", key);
            }
        }
    }

    #[test]
    fn test_same_day_start_and_due_listed_once() {
        let tasks = vec![task("1", "Standup", TaskStatus::Todo, Some("2024-06-04"), Some("2024-06-04"))];
        let buckets = bucket(&tasks, &june_window());

        assert_eq!(buckets["2024-06-04"].len(), 1);
    }

    #[test]
    fn test_span_task_appears_on_start_and_due_days() {
        let tasks = vec![task("1", "Migrate", TaskStatus::InProgress, Some("2024-06-03"), Some("2024-06-06"))];
        let buckets = bucket(&tasks, &june_window());

        assert_eq!(buckets["2024-06-03"].len(), 1);
        assert_eq!(buckets["2024-06-06"].len(), 1);
        assert!(buckets["2024-06-04"].is_empty());
        assert!(buckets["2024-06-05"].is_empty());
    }

    #[test]
    fn test_undated_and_outside_tasks_never_appear() {
        let tasks = vec![
            task("1", "Someday", TaskStatus::Todo, None, None),
            task("2", "Later", TaskStatus::Todo, Some("2024-06-10"), Some("2024-06-12")),
        ];
        let buckets = bucket(&tasks, &june_window());

        assert!(buckets.values().all(Vec::is_empty));
    }

    #[test]
    fn test_bucket_ordered_by_status_then_title() {
        let tasks = vec![
            task("1", "zeta", TaskStatus::Completed, None, Some("2024-06-05")),
            task("2", "beta", TaskStatus::Todo, None, Some("2024-06-05")),
            task("3", "Alpha", TaskStatus::Todo, None, Some("2024-06-05")),
            task("4", "gamma", TaskStatus::InProgress, None, Some("2024-06-05")),
        ];
        let buckets = bucket(&tasks, &june_window());

        let titles: Vec<&str> = buckets["2024-06-05"].iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "beta", "gamma", "zeta"]);
    }

    #[test]
    fn test_every_bucketed_task_has_a_matching_date() {
        let tasks = vec![
            task("1", "a", TaskStatus::Todo, Some("2024-06-01"), Some("2024-06-04")),
            task("2", "b", TaskStatus::Todo, Some("2024-06-08"), None),
            task("3", "c", TaskStatus::Completed, None, Some("2024-06-09")),
        ];

        for (key, day) in bucket(&tasks, &june_window()) {
            let key = date(&key);
            assert!(day.iter().all(|t| t.start_date == Some(key) || t.due_date == Some(key)));
        }
    }

    #[test]
    fn test_navigation_moves_whole_windows() {
        let window = june_window();

        assert_eq!(window.next().start(), date("2024-06-10"));
        assert_eq!(window.previous().start(), date("2024-05-27"));
        assert_eq!(window.page(3).start(), date("2024-06-24"));
        assert_eq!(window.page(-2).start(), date("2024-05-20"));
        assert_eq!(window.next().previous(), window);
        assert_eq!(window.page(0), window);
    }

    #[test]
    fn test_jump_to_keeps_length() {
        let window = Window::new(date("2024-06-03"), 3).jump_to(date("2024-12-31"));

        assert_eq!(window.length(), 3);
        assert_eq!(window.keys(), vec!["2024-12-31", "2025-01-01", "2025-01-02"]);
    }

    #[test]
    fn test_zero_length_window_is_one_day() {
        let window = Window::new(date("2024-06-03"), 0);

        assert_eq!(window.length(), 1);
        assert_eq!(window.days(), vec![date("2024-06-03")]);
    }

    #[test]
    fn test_oversized_window_is_clamped() {
        let window = Window::new(date("2024-06-03"), 4_000_000_000);

        assert_eq!(window.length(), MAX_WINDOW_LENGTH);
        assert_eq!(window.days().len(), MAX_WINDOW_LENGTH as usize);
        assert_eq!(bucket(&[], &window).len(), MAX_WINDOW_LENGTH as usize);
        assert_eq!(window.end(), date("2025-06-03"));
    }

    #[test]
    fn test_containing_uses_local_calendar_day() {
        // 00:30 at UTC+3 is still the previous evening in UTC.
        let offset = FixedOffset::east_opt(3 * 3600).unwrap();
        let past_midnight = offset.with_ymd_and_hms(2024, 6, 4, 0, 30, 0).unwrap();
        assert_eq!(Window::containing(&past_midnight, 7).start(), date("2024-06-04"));

        // 22:00 at UTC-5 is already the next day in UTC.
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let late_evening = offset.with_ymd_and_hms(2024, 6, 3, 22, 0, 0).unwrap();
        assert_eq!(Window::containing(&late_evening, 7).start(), date("2024-06-03"));
    }

    #[test]
    fn test_today_marker() {
        assert!(is_today("2024-06-05", date("2024-06-05")));
        assert!(!is_today("2024-06-06", date("2024-06-05")));

        let calendar = Calendar::build(&[], &june_window(), date("2024-06-05"));
        let marked: Vec<&str> = calendar.days.iter().filter(|d| d.is_today).map(|d| d.key.as_str()).collect();
        assert_eq!(marked, vec!["2024-06-05"]);
    }

    #[test]
    fn test_calendar_roles_and_empty_states() {
        let tasks = vec![
            task("1", "Kickoff", TaskStatus::Todo, Some("2024-06-03"), Some("2024-06-05")),
            task("2", "Retro", TaskStatus::Todo, Some("2024-06-05"), Some("2024-06-05")),
        ];
        let calendar = Calendar::build(&tasks, &june_window(), date("2024-06-01"));

        assert!(!calendar.is_empty());
        assert_eq!(calendar.days.len(), 7);
        assert_eq!(calendar.days[0].entries[0].role, DayRole::Starts);
        assert!(calendar.days[1].is_empty());

        let roles: Vec<(&str, DayRole)> = calendar.days[2]
            .entries
            .iter()
            .map(|e| (e.task.title.as_str(), e.role))
            .collect();
        assert_eq!(roles, vec![("Kickoff", DayRole::Due), ("Retro", DayRole::StartsAndDue)]);
        assert_eq!(DayRole::StartsAndDue.label(), "Starts & Due");

        let empty = Calendar::build(&tasks, &june_window().next(), date("2024-06-01"));
        assert!(empty.is_empty());
    }
}
