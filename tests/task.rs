#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use taskmaster::libs::task::{parse_date, parse_stored_date, split_names, Task, TaskDraft, TaskStatus, ValidationError};

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_status_transitions_keep_completion_date_in_step() {
        let today = date("2024-06-05");
        let mut draft = TaskDraft::new("Write docs");
        draft.status = TaskStatus::Completed;
        draft.actual_completion_date = Some(date("2024-06-01"));

        draft.set_status(TaskStatus::Todo, today);
        assert_eq!(draft.actual_completion_date, None);

        draft.set_status(TaskStatus::Completed, today);
        assert_eq!(draft.actual_completion_date, Some(today));

        draft.set_status(TaskStatus::Completed, date("2024-06-20"));
        assert_eq!(draft.actual_completion_date, Some(today));

        draft.set_status(TaskStatus::InProgress, today);
        assert_eq!(draft.actual_completion_date, None);
    }

    #[test]
    fn test_status_order_and_parsing() {
        assert!(TaskStatus::Todo < TaskStatus::InProgress);
        assert!(TaskStatus::InProgress < TaskStatus::Completed);
        assert_eq!(TaskStatus::default(), TaskStatus::Todo);

        assert_eq!("To Do".parse::<TaskStatus>().unwrap(), TaskStatus::Todo);
        assert_eq!("in_progress".parse::<TaskStatus>().unwrap(), TaskStatus::InProgress);
        assert_eq!("In Progress".parse::<TaskStatus>().unwrap(), TaskStatus::InProgress);
        assert_eq!("done".parse::<TaskStatus>().unwrap(), TaskStatus::Completed);
        assert!("blocked".parse::<TaskStatus>().is_err());
        assert_eq!(TaskStatus::InProgress.to_string(), "In Progress");
    }

    #[test]
    fn test_validation_rules() {
        let mut draft = TaskDraft::new("   ");
        assert_eq!(draft.validate(false), Err(ValidationError::MissingTitle));

        draft.title = "Plan".to_string();
        assert_eq!(draft.validate(true), Err(ValidationError::MissingDueDate));
        assert_eq!(draft.validate(false), Ok(()));

        draft.start_date = Some(date("2024-06-10"));
        draft.due_date = Some(date("2024-06-09"));
        assert_eq!(draft.validate(true), Err(ValidationError::StartAfterDue));

        draft.due_date = Some(date("2024-06-10"));
        assert_eq!(draft.validate(true), Ok(()));
    }

    #[test]
    fn test_normalized_trims_and_drops_blanks() {
        let mut draft = TaskDraft::new("  Plan sprint ");
        draft.description = Some("   ".to_string());
        draft.assignees = vec![" Alice ".to_string(), "".to_string()];
        draft.comments = Some(" note ".to_string());
        draft.actual_completion_date = Some(date("2024-06-01"));

        let draft = draft.normalized();
        assert_eq!(draft.title, "Plan sprint");
        assert_eq!(draft.description, None);
        assert_eq!(draft.assignees, vec!["Alice".to_string()]);
        assert_eq!(draft.comments, Some("note".to_string()));
        assert_eq!(draft.actual_completion_date, None);
    }

    #[test]
    fn test_parse_date_is_strict() {
        assert_eq!(parse_date("2024-06-03").unwrap(), date("2024-06-03"));
        assert!(parse_date("2024-6-3").is_err());
        assert!(parse_date("03/06/2024").is_err());
        assert!(parse_date("2024-02-30").is_err());
        assert_eq!(
            parse_date("nope"),
            Err(ValidationError::InvalidDate("nope".to_string()))
        );

        assert_eq!(parse_stored_date("2024-06-03T00:00:00.000Z").unwrap(), date("2024-06-03"));
        assert_eq!(parse_stored_date("2024-06-03 10:15:00").unwrap(), date("2024-06-03"));
    }

    #[test]
    fn test_split_names() {
        assert_eq!(split_names("Alice, Bob ,, "), vec!["Alice".to_string(), "Bob".to_string()]);
        assert!(split_names("").is_empty());
    }

    #[test]
    fn test_remote_document_deserializes() {
        let json = r#"{
            "_id": "665f1c2e9b1e8a0012345678",
            "title": "Prepare demo",
            "status": "In Progress",
            "startDate": "2024-06-03T00:00:00.000Z",
            "dueDate": "2024-06-07T00:00:00.000Z",
            "createdAt": "2024-06-01T09:30:00.000Z",
            "updatedAt": "2024-06-02T10:00:00.000Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();

        assert_eq!(task.id, "665f1c2e9b1e8a0012345678");
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.start_date, Some(date("2024-06-03")));
        assert_eq!(task.due_date, Some(date("2024-06-07")));
        assert!(task.assignees.is_empty());
        assert!(task.updated_at.is_some());
    }

    #[test]
    fn test_legacy_document_with_plain_id() {
        let json = r#"{
            "id": "local-1",
            "title": "Old task",
            "description": "",
            "status": "To Do",
            "assignees": ["Alice"],
            "dueDate": "2024-06-07",
            "actualCompletionDate": null,
            "createdAt": "2024-06-01T09:30:00Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();

        assert_eq!(task.id, "local-1");
        assert_eq!(task.assignees, vec!["Alice".to_string()]);
        assert_eq!(task.actual_completion_date, None);

        let written = serde_json::to_value(&task).unwrap();
        assert_eq!(written["_id"], "local-1");
        assert_eq!(written["dueDate"], "2024-06-07");
        assert!(written.get("actualCompletionDate").is_none());
    }
}
