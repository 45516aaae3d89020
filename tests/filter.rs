#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use taskmaster::libs::filter::{filter, DateRange, FilterCriteria, StatusFilter};
    use taskmaster::libs::task::{Task, TaskDraft, TaskStatus};

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    fn task(id: &str, draft: TaskDraft) -> Task {
        draft.into_task(id.to_string(), Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(), None)
    }

    fn sample() -> Vec<Task> {
        let mut review = TaskDraft::new("Review pull request");
        review.description = Some("Check the parser changes".to_string());
        review.status = TaskStatus::InProgress;
        review.start_date = Some(date("2024-06-03"));
        review.due_date = Some(date("2024-06-07"));

        let mut release = TaskDraft::new("Cut release");
        release.status = TaskStatus::Completed;
        release.stakeholders = vec!["Bob Jones".to_string()];
        release.start_date = Some(date("2024-05-20"));
        release.actual_completion_date = Some(date("2024-06-01"));

        let mut plan = TaskDraft::new("Plan sprint");
        plan.comments = Some("Ask ALICE about capacity".to_string());

        vec![task("1", review), task("2", release), task("3", plan)]
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let tasks = sample();
        let criteria = FilterCriteria::default();

        assert!(criteria.is_empty());
        assert_eq!(filter(&tasks, &criteria), tasks);
    }

    #[test]
    fn test_blank_search_term_matches_everything() {
        let tasks = sample();
        let criteria = FilterCriteria {
            search_term: Some(String::new()),
            ..FilterCriteria::default()
        };

        assert_eq!(filter(&tasks, &criteria).len(), tasks.len());
    }

    #[test]
    fn test_search_matches_assignee_case_insensitively() {
        let mut draft = TaskDraft::new("");
        draft.assignees = vec!["Alice Smith".to_string()];
        let with_alice = task("a", draft);
        let without = task("b", TaskDraft::new("Unrelated"));

        let criteria = FilterCriteria {
            search_term: Some("alice".to_string()),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter(&[with_alice, without], &criteria)), vec!["a"]);
    }

    #[test]
    fn test_search_covers_comments_stakeholders_and_dates() {
        let tasks = sample();
        let search = |term: &str| {
            let criteria = FilterCriteria {
                search_term: Some(term.to_string()),
                ..FilterCriteria::default()
            };
            ids(&filter(&tasks, &criteria)).into_iter().map(str::to_string).collect::<Vec<_>>()
        };

        assert_eq!(search("alice"), vec!["3"]);
        assert_eq!(search("bob"), vec!["2"]);
        assert_eq!(search("2024-06-07"), vec!["1"]);
        assert_eq!(search("2024-06"), vec!["1", "2"]);
        assert_eq!(search("PARSER"), vec!["1"]);
        assert!(search("nothing like this").is_empty());
    }

    #[test]
    fn test_status_filter() {
        let tasks = sample();
        let criteria = FilterCriteria {
            status: StatusFilter::Only(TaskStatus::Completed),
            ..FilterCriteria::default()
        };

        assert_eq!(ids(&filter(&tasks, &criteria)), vec!["2"]);
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!("in-progress".parse::<StatusFilter>().unwrap(), StatusFilter::Only(TaskStatus::InProgress));
        assert!("someday".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_start_date_range_requires_a_date_inside_it() {
        let mut before = TaskDraft::new("before");
        before.start_date = Some(date("2024-05-31"));
        let mut inside = TaskDraft::new("inside");
        inside.start_date = Some(date("2024-06-15"));
        let tasks = vec![task("none", TaskDraft::new("none")), task("before", before), task("inside", inside)];

        let criteria = FilterCriteria {
            start_date_range: DateRange::new(Some(date("2024-06-01")), Some(date("2024-06-30"))),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter(&tasks, &criteria)), vec!["inside"]);
    }

    #[test]
    fn test_open_ended_ranges_are_inclusive() {
        let range = DateRange::new(Some(date("2024-06-01")), None);
        assert!(range.admits(Some(date("2024-06-01"))));
        assert!(range.admits(Some(date("2099-01-01"))));
        assert!(!range.admits(Some(date("2024-05-31"))));
        assert!(!range.admits(None));

        let range = DateRange::new(None, Some(date("2024-06-30")));
        assert!(range.admits(Some(date("2024-06-30"))));
        assert!(!range.admits(Some(date("2024-07-01"))));

        assert!(DateRange::default().admits(None));
    }

    #[test]
    fn test_completion_range_and_axes_combine() {
        let tasks = sample();
        let criteria = FilterCriteria {
            search_term: Some("release".to_string()),
            status: StatusFilter::Only(TaskStatus::Completed),
            completion_date_range: DateRange::new(Some(date("2024-06-01")), Some(date("2024-06-01"))),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter(&tasks, &criteria)), vec!["2"]);

        let criteria = FilterCriteria {
            status: StatusFilter::Only(TaskStatus::InProgress),
            completion_date_range: DateRange::new(Some(date("2024-06-01")), None),
            ..FilterCriteria::default()
        };
        assert!(filter(&tasks, &criteria).is_empty());
    }

    #[test]
    fn test_filter_preserves_relative_order() {
        let tasks = sample();
        let criteria = FilterCriteria {
            search_term: Some("r".to_string()),
            ..FilterCriteria::default()
        };

        let result = filter(&tasks, &criteria);
        let positions: Vec<usize> = result
            .iter()
            .map(|t| tasks.iter().position(|original| original.id == t.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
