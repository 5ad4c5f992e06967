use crate::io::snapshot::Snapshots;
use crate::model::{NewProject, Project, ProjectPatch};

/// Snapshot key for the project collection
const KEY: &str = "projects";

/// Owning store for the project collection.
///
/// Every mutation rewrites the full snapshot. Mutations on an unknown id
/// are silent no-ops, never errors. Deleting a project does not touch the
/// task collection; tasks referencing it simply become orphans.
#[derive(Debug)]
pub struct ProjectStore {
    projects: Vec<Project>,
    snapshots: Snapshots,
}

impl ProjectStore {
    /// Hydrate the store from its snapshot.
    pub fn open(snapshots: Snapshots) -> Self {
        let projects = snapshots.read(KEY);
        ProjectStore {
            projects,
            snapshots,
        }
    }

    /// Create a project and prepend it to the collection (newest first).
    /// Returns the created record.
    pub fn add(&mut self, input: NewProject) -> Project {
        let project = Project::new(input);
        self.projects.insert(0, project.clone());
        self.flush();
        project
    }

    /// Merge a patch into the matching project. Unknown id is a no-op.
    pub fn update(&mut self, id: &str, patch: ProjectPatch) {
        let Some(project) = self.projects.iter_mut().find(|p| p.id == id) else {
            return;
        };
        project.apply(patch);
        self.flush();
    }

    /// Remove the matching project. Unknown id is a no-op.
    pub fn delete(&mut self, id: &str) {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        if self.projects.len() != before {
            self.flush();
        }
    }

    /// Current collection, newest first.
    pub fn list(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    // Persistence is best-effort: a failed snapshot write keeps the
    // in-memory collection authoritative for the rest of the process.
    fn flush(&self) {
        if let Err(e) = self.snapshots.write(KEY, &self.projects) {
            eprintln!("warning: could not persist {}: {}", KEY, e);
        }
    }
}
