//! Drag-and-drop reconciler.
//!
//! A two-state machine around the single in-flight dragged task: idle
//! (nothing dragged) or dragging (one task id held). Drops translate into
//! task store mutations; everything else is hover signaling for the
//! presentation layer.

use crate::model::{ListSection, TaskPatch, TaskStatus};
use crate::store::TaskStore;

/// Where a drop gesture landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// A kanban column; dropping moves the task to this status
    Column(TaskStatus),
    /// A day section; dropping re-buckets the task
    Section(ListSection),
}

/// Tracks the single in-flight drag.
///
/// There is no cancel transition: a drag aborted outside any target stays
/// active until the next `drag_start` or `drop_on`. Targets may clear
/// their own hover highlight on drag-leave, but the dragged task id is
/// kept.
#[derive(Debug, Default)]
pub struct DragDrop {
    dragged: Option<String>,
}

impl DragDrop {
    pub fn new() -> Self {
        DragDrop::default()
    }

    /// Begin dragging a task. Unconditional: a drag already in flight is
    /// silently replaced.
    pub fn drag_start(&mut self, task_id: &str) {
        self.dragged = Some(task_id.to_string());
    }

    /// Hover signal over a potential target. No state change; returns
    /// whether a drag is active so the target can render as droppable.
    pub fn drag_over(&self, _target: &DropTarget) -> bool {
        self.dragged.is_some()
    }

    /// Complete the gesture on a target. With a drag in flight, applies
    /// the target's mutation and returns to idle, reporting the moved
    /// task id. With no drag in flight, does nothing and mutates nothing.
    pub fn drop_on(&mut self, target: DropTarget, tasks: &mut TaskStore) -> Option<String> {
        let task_id = self.dragged.take()?;
        match target {
            DropTarget::Column(status) => tasks.move_status(&task_id, status),
            DropTarget::Section(section) => tasks.update(&task_id, TaskPatch {
                list_section: Some(section),
                ..Default::default()
            }),
        }
        Some(task_id)
    }

    /// The task currently being dragged, if any
    pub fn dragged_task(&self) -> Option<&str> {
        self.dragged.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::snapshot::Snapshots;
    use crate::model::{NewTask, Task};
    use tempfile::TempDir;

    fn store_with_task(dir: &std::path::Path, status: TaskStatus) -> (TaskStore, Task) {
        let mut store = TaskStore::open(Snapshots::open(dir).unwrap());
        let task = store.add(NewTask {
            project_id: "p-1".into(),
            title: "draggable".into(),
            description: String::new(),
            status,
            list_section: None,
            priority: None,
            color: None,
        });
        (store, task)
    }

    #[test]
    fn column_drop_moves_status_and_resets() {
        let tmp = TempDir::new().unwrap();
        let (mut store, task) = store_with_task(tmp.path(), TaskStatus::Todo);
        let mut dnd = DragDrop::new();

        dnd.drag_start(&task.id);
        assert_eq!(dnd.dragged_task(), Some(task.id.as_str()));

        let moved = dnd.drop_on(DropTarget::Column(TaskStatus::Done), &mut store);
        assert_eq!(moved.as_deref(), Some(task.id.as_str()));
        assert_eq!(store.get(&task.id).unwrap().status, TaskStatus::Done);
        assert!(dnd.dragged_task().is_none());
    }

    #[test]
    fn section_drop_rebuckets_and_resets() {
        let tmp = TempDir::new().unwrap();
        let (mut store, task) = store_with_task(tmp.path(), TaskStatus::Todo);
        let mut dnd = DragDrop::new();

        dnd.drag_start(&task.id);
        dnd.drop_on(DropTarget::Section(ListSection::Later), &mut store);

        let dropped = store.get(&task.id).unwrap();
        assert_eq!(dropped.list_section, Some(ListSection::Later));
        // A section drop does not touch the pipeline status
        assert_eq!(dropped.status, TaskStatus::Todo);
        assert!(dnd.dragged_task().is_none());
    }

    #[test]
    fn drop_with_no_drag_mutates_nothing() {
        let tmp = TempDir::new().unwrap();
        let (mut store, task) = store_with_task(tmp.path(), TaskStatus::Todo);
        let mut dnd = DragDrop::new();

        let moved = dnd.drop_on(DropTarget::Column(TaskStatus::Done), &mut store);
        assert!(moved.is_none());
        assert_eq!(store.get(&task.id).unwrap().status, TaskStatus::Todo);
    }

    #[test]
    fn drag_start_replaces_in_flight_drag() {
        let mut dnd = DragDrop::new();
        dnd.drag_start("first");
        dnd.drag_start("second");
        assert_eq!(dnd.dragged_task(), Some("second"));
    }

    #[test]
    fn drag_over_signals_without_state_change() {
        let mut dnd = DragDrop::new();
        assert!(!dnd.drag_over(&DropTarget::Column(TaskStatus::Todo)));

        dnd.drag_start("t-1");
        assert!(dnd.drag_over(&DropTarget::Section(ListSection::Today)));
        assert_eq!(dnd.dragged_task(), Some("t-1"));
    }

    #[test]
    fn aborted_drag_stays_active() {
        // No cancel transition: leaving every target keeps the drag in
        // flight, and the next drop still lands it.
        let tmp = TempDir::new().unwrap();
        let (mut store, task) = store_with_task(tmp.path(), TaskStatus::Todo);
        let mut dnd = DragDrop::new();

        dnd.drag_start(&task.id);
        // ... pointer wanders off every target ...
        assert_eq!(dnd.dragged_task(), Some(task.id.as_str()));

        dnd.drop_on(DropTarget::Column(TaskStatus::InProgress), &mut store);
        assert_eq!(store.get(&task.id).unwrap().status, TaskStatus::InProgress);
    }

    #[test]
    fn drop_on_unknown_task_resets_without_mutation() {
        // The dragged task may have been deleted mid-drag; the drop is
        // then a store-level no-op but still returns the machine to idle.
        let tmp = TempDir::new().unwrap();
        let (mut store, task) = store_with_task(tmp.path(), TaskStatus::Todo);
        let mut dnd = DragDrop::new();

        dnd.drag_start("deleted-task");
        let moved = dnd.drop_on(DropTarget::Column(TaskStatus::Done), &mut store);
        assert_eq!(moved.as_deref(), Some("deleted-task"));
        assert!(dnd.dragged_task().is_none());
        assert_eq!(store.get(&task.id).unwrap().status, TaskStatus::Todo);
    }
}
