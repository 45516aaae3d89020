//! Display implementation for taskmaster messages.
//!
//! Every user-facing sentence lives here, in one match over [`Message`].
//! Commands, repositories and clients build a `Message` and hand it to the
//! messaging macros; they never format user text themselves.
//!
//! The suggestion diagnostics are plain sentences on purpose: the suggestion
//! client returns them in place of a description, so they must read well when
//! shown as task text.
//!
//! ```rust
//! use taskmaster::libs::messages::Message;
//!
//! let message = Message::TaskCreated("Plan sprint".to_string());
//! assert_eq!(message.to_string(), "Task 'Plan sprint' created successfully");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created successfully", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated successfully", title),
            Message::TaskDeleted(title) => format!("Task '{}' deleted", title),
            Message::TaskNotFound(id) => format!("Task with ID {} not found.", id),
            Message::TaskIdAmbiguous(prefix, count) => {
                format!("ID prefix '{}' matches {} tasks; type more of the ID.", prefix, count)
            }
            Message::TaskInvalid(reason) => format!("Task not saved: {}", reason),
            Message::TasksNotFound => "No tasks found.".to_string(),
            Message::TasksHeader(shown, total) => format!("Tasks ({} of {}):", shown, total),
            Message::ConfirmDeleteTask(title) => format!("Are you sure you want to delete '{}'?", title),
            Message::CurrentTaskState => "Current task:".to_string(),
            Message::EditingTask(title) => format!("Editing task: {}", title),
            Message::NoChangesDetected => "No changes detected.".to_string(),

            // === CALENDAR MESSAGES ===
            Message::CalendarHeader(first, last) => format!("Showing: {} - {}", first, last),
            Message::CalendarDayEmpty => "No tasks for this day.".to_string(),
            Message::CalendarWindowEmpty(days) => format!("No tasks with start or due dates in this {}-day period.", days),

            // === SUGGESTION MESSAGES ===
            Message::SuggestApiKeyMissing => "API Key is not configured. Cannot generate description.".to_string(),
            Message::SuggestTitleMissing => "Please provide a task title to generate a description.".to_string(),
            Message::SuggestEmptyResponse => "No description generated. Try a more specific title or write one manually.".to_string(),
            Message::SuggestInvalidApiKey => "Error: The Gemini API key is invalid. Please check your configuration.".to_string(),
            Message::SuggestApiError => {
                "Failed to generate description due to an API error. Please try again later or write one manually.".to_string()
            }
            Message::SuggestedDescription => "Suggested description:".to_string(),
            Message::SuggestionRequestFailed(error) => format!("Error calling the suggestion API: {}", error),

            // === STORE MESSAGES ===
            Message::UsingLocalStore(path) => format!("Using local task store at {}", path),
            Message::UsingRemoteStore(url) => format!("Using remote task store at {}", url),
            Message::RemoteRequestFailed(error) => format!("Remote task store request failed: {}", error),
            Message::RemoteHttpStatus(status) => format!("HTTP error! status: {}", status),
            Message::RemoteUpdateUnsupported => "The remote task store does not support editing tasks yet.".to_string(),
            Message::RemoteDeleteUnsupported => "The remote task store does not support deleting tasks yet.".to_string(),

            // === EXPORT / IMPORT MESSAGES ===
            Message::ExportCompleted(count, destination) => format!("Exported {} task(s) to {}", count, destination),
            Message::ImportCompleted(count) => format!("Imported {} task(s).", count),
            Message::ImportSkipped(title, reason) => format!("Skipped '{}': {}", title, reason),
            Message::ImportEmpty => "Nothing to import.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed, defaults restored".to_string(),
            Message::ConfigModuleRemote => "Remote task store settings".to_string(),
            Message::ConfigModuleSuggest => "Description suggestion settings".to_string(),
            Message::ConfigModuleCalendar => "Calendar settings".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure (space to select, enter to confirm)".to_string(),
            Message::PromptRemoteApiUrl => "Enter the task store API URL".to_string(),
            Message::PromptSuggestApiKey => "Enter your Gemini API key".to_string(),
            Message::PromptSuggestModel => "Enter the text model name".to_string(),
            Message::PromptSuggestApiUrl => "Enter the Gemini API URL".to_string(),
            Message::PromptWindowLength => "Enter the number of days shown in the calendar".to_string(),
            Message::PromptTaskTitle => "Title".to_string(),
            Message::PromptTaskDescription => "Description".to_string(),
            Message::PromptTaskStatus => "Status".to_string(),
            Message::PromptTaskAssignees => "Assignees (comma separated)".to_string(),
            Message::PromptTaskStakeholders => "Stakeholders (comma separated)".to_string(),
            Message::PromptTaskStartDate => "Start date (YYYY-MM-DD)".to_string(),
            Message::PromptTaskDueDate => "Due date (YYYY-MM-DD)".to_string(),
            Message::PromptTaskCompletionDate => "Completion date (YYYY-MM-DD)".to_string(),
            Message::PromptTaskComments => "Comments".to_string(),
            Message::PromptUseSuggestion => "Use this description?".to_string(),
            Message::ConfirmTaskUpdate => "Save changes?".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed successfully".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
        };
        write!(f, "{}", text)
    }
}
