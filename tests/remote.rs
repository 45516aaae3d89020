#[cfg(test)]
mod tests {
    use taskmaster::api::remote::{error_text, RemoteConfig, RemoteStore};
    use taskmaster::libs::repository::TaskRepository;
    use taskmaster::libs::task::{TaskDraft, ValidationError};

    fn unreachable_store() -> RemoteStore {
        RemoteStore::new(&RemoteConfig {
            api_url: "http://127.0.0.1:9".to_string(),
        })
    }

    #[test]
    fn test_error_text_prefers_error_field() {
        assert_eq!(
            error_text(r#"{"error":"Validation Error","message":"ignored"}"#),
            Some("Validation Error".to_string())
        );
        assert_eq!(error_text(r#"{"message":"Method not allowed"}"#), Some("Method not allowed".to_string()));
    }

    #[test]
    fn test_error_text_ignores_plain_bodies() {
        assert_eq!(error_text("Bad Request: Missing body"), None);
        assert_eq!(error_text(r#"{"error":"  "}"#), None);
    }

    #[tokio::test]
    async fn test_update_and_delete_are_unsupported() {
        let mut store = unreachable_store();

        let error = store.update("abc", TaskDraft::new("Edited")).await.unwrap_err();
        assert!(error.to_string().contains("does not support editing"));

        let error = store.delete("abc").await.unwrap_err();
        assert!(error.to_string().contains("does not support deleting"));
    }

    #[tokio::test]
    async fn test_create_validates_before_sending() {
        let mut store = unreachable_store();
        assert!(!store.requires_due_date());

        let error = store.create(TaskDraft::new(" ")).await.unwrap_err();
        assert_eq!(error.downcast_ref::<ValidationError>(), Some(&ValidationError::MissingTitle));
    }

    #[tokio::test]
    async fn test_unreachable_store_is_an_error() {
        let store = unreachable_store();

        let error = store.list().await.unwrap_err();
        assert!(error.to_string().contains("Remote task store request failed"));
    }
}
