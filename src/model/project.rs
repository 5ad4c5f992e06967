use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project record. Tasks reference projects by id; the reference is not
/// enforced, so a task can outlive its project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when creating a project
#[derive(Debug, Clone, Default)]
pub struct NewProject {
    pub name: String,
    pub description: String,
}

/// Partial update for a project. `id` and `created_at` are not patchable.
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Project {
    /// Create a project with a fresh id and the current timestamp
    pub fn new(input: NewProject) -> Self {
        Project {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            description: input.description,
            created_at: Utc::now(),
        }
    }

    /// Merge a partial update into this project
    pub fn apply(&mut self, patch: ProjectPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }
}
