//! Pure projections over a project's tasks.
//!
//! Both views partition the same input: every task lands in exactly one
//! kanban column and exactly one day section, and neither view mutates or
//! reorders the underlying collection.

use crate::model::{ListSection, Task, TaskStatus};

/// Kanban column order as rendered on the board
pub const COLUMN_ORDER: [TaskStatus; 3] =
    [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

/// Day section order as rendered in the planner list
pub const SECTION_ORDER: [ListSection; 3] =
    [ListSection::Today, ListSection::Tomorrow, ListSection::Later];

/// Tasks grouped by pipeline status
#[derive(Debug)]
pub struct KanbanView<'a> {
    pub todo: Vec<&'a Task>,
    pub in_progress: Vec<&'a Task>,
    pub done: Vec<&'a Task>,
}

impl<'a> KanbanView<'a> {
    /// Columns in fixed board order
    pub fn columns(&self) -> [(TaskStatus, &[&'a Task]); 3] {
        [
            (TaskStatus::Todo, self.todo.as_slice()),
            (TaskStatus::InProgress, self.in_progress.as_slice()),
            (TaskStatus::Done, self.done.as_slice()),
        ]
    }

    pub fn len(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Group tasks into the three kanban columns.
pub fn kanban(tasks: &[Task]) -> KanbanView<'_> {
    let mut view = KanbanView {
        todo: Vec::new(),
        in_progress: Vec::new(),
        done: Vec::new(),
    };
    for task in tasks {
        match task.status {
            TaskStatus::Todo => view.todo.push(task),
            TaskStatus::InProgress => view.in_progress.push(task),
            TaskStatus::Done => view.done.push(task),
        }
    }
    view
}

/// Tasks grouped by day bucket, absent sections defaulting to Today
#[derive(Debug)]
pub struct DayListView<'a> {
    pub today: Vec<&'a Task>,
    pub tomorrow: Vec<&'a Task>,
    pub later: Vec<&'a Task>,
}

impl<'a> DayListView<'a> {
    /// Sections in fixed planner order
    pub fn sections(&self) -> [(ListSection, &[&'a Task]); 3] {
        [
            (ListSection::Today, self.today.as_slice()),
            (ListSection::Tomorrow, self.tomorrow.as_slice()),
            (ListSection::Later, self.later.as_slice()),
        ]
    }

    pub fn section(&self, section: ListSection) -> &[&'a Task] {
        match section {
            ListSection::Today => &self.today,
            ListSection::Tomorrow => &self.tomorrow,
            ListSection::Later => &self.later,
        }
    }

    /// Tasks of one section under its visibility toggle. With
    /// `show_completed` off, done tasks are hidden from rendering; the
    /// underlying group is untouched. The toggle is per section and lives
    /// with the caller.
    pub fn visible(&self, section: ListSection, show_completed: bool) -> Vec<&'a Task> {
        self.section(section)
            .iter()
            .filter(|t| show_completed || !t.is_done())
            .copied()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.today.len() + self.tomorrow.len() + self.later.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Group tasks into the three day sections.
pub fn day_list(tasks: &[Task]) -> DayListView<'_> {
    let mut view = DayListView {
        today: Vec::new(),
        tomorrow: Vec::new(),
        later: Vec::new(),
    };
    for task in tasks {
        match task.section() {
            ListSection::Today => view.today.push(task),
            ListSection::Tomorrow => view.tomorrow.push(task),
            ListSection::Later => view.later.push(task),
        }
    }
    view
}
