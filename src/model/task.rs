use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pipeline stage of a task on the kanban board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Parse a status keyword as it appears on the wire and on the CLI
    pub fn parse(s: &str) -> Option<TaskStatus> {
        match s {
            "todo" => Some(TaskStatus::Todo),
            "in-progress" => Some(TaskStatus::InProgress),
            "done" => Some(TaskStatus::Done),
            _ => None,
        }
    }

    /// Column heading for this status
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Todo => write!(f, "todo"),
            TaskStatus::InProgress => write!(f, "in-progress"),
            TaskStatus::Done => write!(f, "done"),
        }
    }
}

/// Day bucket of a task in the planner list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListSection {
    Today,
    Tomorrow,
    Later,
}

impl ListSection {
    pub fn parse(s: &str) -> Option<ListSection> {
        match s {
            "today" => Some(ListSection::Today),
            "tomorrow" => Some(ListSection::Tomorrow),
            "later" => Some(ListSection::Later),
            _ => None,
        }
    }

    /// Section heading for this bucket
    pub fn label(self) -> &'static str {
        match self {
            ListSection::Today => "Today",
            ListSection::Tomorrow => "Tomorrow",
            ListSection::Later => "Later",
        }
    }
}

impl std::fmt::Display for ListSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListSection::Today => write!(f, "today"),
            ListSection::Tomorrow => write!(f, "tomorrow"),
            ListSection::Later => write!(f, "later"),
        }
    }
}

/// Task priority flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Low,
}

impl Priority {
    pub fn parse(s: &str) -> Option<Priority> {
        match s {
            "high" => Some(Priority::High),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// A task record.
///
/// Field names serialize in camelCase so snapshots written by earlier
/// versions of the board load unchanged. The optional fields were added
/// after the first release; a stored collection missing them deserializes
/// with the fields absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    /// Owning project. Set at creation, never patched (see `TaskPatch`).
    pub project_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_section: Option<ListSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// Color tag (free-form, e.g. a hex value)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when creating a task
#[derive(Debug, Clone)]
pub struct NewTask {
    pub project_id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub list_section: Option<ListSection>,
    pub priority: Option<Priority>,
    pub color: Option<String>,
}

/// Partial update for a task. `id`, `project_id`, and `created_at` are
/// deliberately not part of this type: a task cannot be moved between
/// projects through the ordinary update path.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub list_section: Option<ListSection>,
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
    pub color: Option<String>,
}

impl Task {
    /// Create a task with a fresh id and the current timestamp
    pub fn new(input: NewTask) -> Self {
        Task {
            id: Uuid::new_v4().to_string(),
            project_id: input.project_id,
            title: input.title,
            description: input.description,
            status: input.status,
            list_section: input.list_section,
            completed: None,
            priority: input.priority,
            color: input.color,
            created_at: Utc::now(),
        }
    }

    /// Done-ness as the board understands it: the `completed` flag and
    /// `status == Done` are two representations of the same thing, and a
    /// task counts as done when either says so.
    pub fn is_done(&self) -> bool {
        self.completed == Some(true) || self.status == TaskStatus::Done
    }

    /// Day bucket with the read-time default: a task that has never been
    /// placed in a section belongs to Today.
    pub fn section(&self) -> ListSection {
        self.list_section.unwrap_or(ListSection::Today)
    }

    /// Merge a partial update into this task
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(section) = patch.list_section {
            self.list_section = Some(section);
        }
        if let Some(completed) = patch.completed {
            self.completed = Some(completed);
        }
        if let Some(priority) = patch.priority {
            self.priority = Some(priority);
        }
        if let Some(color) = patch.color {
            self.color = Some(color);
        }
    }
}
