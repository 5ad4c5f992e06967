pub mod projects;
pub mod tasks;

pub use projects::ProjectStore;
pub use tasks::TaskStore;

use std::path::Path;

use crate::io::snapshot::{SnapshotError, Snapshots};

/// Both collections plus their snapshot backing. There is one `Store` per
/// process; it is the only owner of the project and task collections, and
/// every consumer receives it as an explicit handle.
#[derive(Debug)]
pub struct Store {
    pub projects: ProjectStore,
    pub tasks: TaskStore,
}

impl Store {
    /// Open the store at the given data directory, hydrating both
    /// collections from their snapshots.
    pub fn open(dir: &Path) -> Result<Store, SnapshotError> {
        let snapshots = Snapshots::open(dir)?;
        Ok(Store {
            projects: ProjectStore::open(snapshots.clone()),
            tasks: TaskStore::open(snapshots),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NewProject, NewTask, TaskStatus};
    use tempfile::TempDir;

    #[test]
    fn open_hydrates_both_collections() {
        let tmp = TempDir::new().unwrap();

        {
            let mut store = Store::open(tmp.path()).unwrap();
            let project = store.projects.add(NewProject {
                name: "Acme".into(),
                description: String::new(),
            });
            store.tasks.add(NewTask {
                project_id: project.id.clone(),
                title: "First".into(),
                description: String::new(),
                status: TaskStatus::Todo,
                list_section: None,
                priority: None,
                color: None,
            });
        }

        let store = Store::open(tmp.path()).unwrap();
        assert_eq!(store.projects.list().len(), 1);
        assert_eq!(store.tasks.all().len(), 1);
        assert_eq!(store.projects.list()[0].name, "Acme");
    }
}
