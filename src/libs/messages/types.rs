#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String), // title
    TaskUpdated(String), // title
    TaskDeleted(String), // title
    TaskNotFound(String), // id
    TaskIdAmbiguous(String, usize), // prefix, matches
    TaskInvalid(String),  // validation error
    TasksNotFound,
    TasksHeader(usize, usize), // shown, total
    ConfirmDeleteTask(String), // title
    CurrentTaskState,
    EditingTask(String), // title
    NoChangesDetected,

    // === CALENDAR MESSAGES ===
    CalendarHeader(String, String), // first day, last day
    CalendarDayEmpty,
    CalendarWindowEmpty(u32), // window length

    // === SUGGESTION MESSAGES ===
    SuggestApiKeyMissing,
    SuggestTitleMissing,
    SuggestEmptyResponse,
    SuggestInvalidApiKey,
    SuggestApiError,
    SuggestedDescription,
    SuggestionRequestFailed(String), // upstream error, logged only

    // === STORE MESSAGES ===
    UsingLocalStore(String),  // database path
    UsingRemoteStore(String), // api url
    RemoteRequestFailed(String),
    RemoteHttpStatus(u16),
    RemoteUpdateUnsupported,
    RemoteDeleteUnsupported,

    // === EXPORT / IMPORT MESSAGES ===
    ExportCompleted(usize, String), // count, destination
    ImportCompleted(usize),
    ImportSkipped(String, String), // title, reason
    ImportEmpty,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleRemote,
    ConfigModuleSuggest,
    ConfigModuleCalendar,

    // === PROMPTS ===
    PromptSelectModules,
    PromptRemoteApiUrl,
    PromptSuggestApiKey,
    PromptSuggestModel,
    PromptSuggestApiUrl,
    PromptWindowLength,
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskStatus,
    PromptTaskAssignees,
    PromptTaskStakeholders,
    PromptTaskStartDate,
    PromptTaskDueDate,
    PromptTaskCompletionDate,
    PromptTaskComments,
    PromptUseSuggestion,
    ConfirmTaskUpdate,

    // === GENERAL MESSAGES ===
    OperationCancelled,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseUpToDate,
}
