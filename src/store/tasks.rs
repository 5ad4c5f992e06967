use crate::io::snapshot::Snapshots;
use crate::model::{NewTask, Task, TaskPatch, TaskStatus};

/// Snapshot key for the task collection
const KEY: &str = "tasks";

/// Owning store for the task collection.
///
/// Same contract as `ProjectStore`: prepend on add, full snapshot write
/// after every mutation, silent no-op on unknown ids. `add` performs no
/// existence check on the project id.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    snapshots: Snapshots,
}

impl TaskStore {
    /// Hydrate the store from its snapshot.
    pub fn open(snapshots: Snapshots) -> Self {
        let tasks = snapshots.read(KEY);
        TaskStore { tasks, snapshots }
    }

    /// Create a task and prepend it to the collection (newest first).
    /// Returns the created record.
    pub fn add(&mut self, input: NewTask) -> Task {
        let task = Task::new(input);
        self.tasks.insert(0, task.clone());
        self.flush();
        task
    }

    /// Merge a patch into the matching task. Unknown id is a no-op.
    /// The patch type cannot carry `project_id`, so a task never changes
    /// projects through this path.
    pub fn update(&mut self, id: &str, patch: TaskPatch) {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return;
        };
        task.apply(patch);
        self.flush();
    }

    /// Remove the matching task. Unknown id is a no-op.
    pub fn delete(&mut self, id: &str) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            self.flush();
        }
    }

    /// Set a task's pipeline status. Named convenience for kanban drops.
    pub fn move_status(&mut self, id: &str, status: TaskStatus) {
        self.update(id, TaskPatch {
            status: Some(status),
            ..Default::default()
        });
    }

    /// Flip a task between done and not-done, keeping the `completed` flag
    /// and the pipeline status in step. This is the only place both fields
    /// change together; everything that toggles done-ness goes through it.
    ///
    /// Un-completing sets the status to Todo even when the task was
    /// in-progress before completion; the intermediate stage is not
    /// remembered. Intentional current behavior.
    pub fn toggle_complete(&mut self, id: &str) {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return;
        };
        let next = !task.is_done();
        task.completed = Some(next);
        task.status = if next {
            TaskStatus::Done
        } else {
            TaskStatus::Todo
        };
        self.flush();
    }

    /// Tasks belonging to a project, in collection order (newest first).
    /// Returns cloned snapshots; readers never hold references into the
    /// owned collection across mutations.
    pub fn by_project(&self, project_id: &str) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.project_id == project_id)
            .cloned()
            .collect()
    }

    /// The whole collection, newest first.
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn flush(&self) {
        if let Err(e) = self.snapshots.write(KEY, &self.tasks) {
            eprintln!("warning: could not persist {}: {}", KEY, e);
        }
    }
}
