use serde::Serialize;

use crate::model::{ListSection, Project, Task, TaskStatus};
use crate::view::{DayListView, KanbanView};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ColumnJson<'a> {
    pub status: TaskStatus,
    pub tasks: &'a [&'a Task],
}

#[derive(Serialize)]
pub struct BoardJson<'a> {
    pub project: &'a str,
    pub columns: Vec<ColumnJson<'a>>,
}

#[derive(Serialize)]
pub struct SectionJson<'a> {
    pub section: ListSection,
    pub tasks: Vec<&'a Task>,
}

#[derive(Serialize)]
pub struct AgendaJson<'a> {
    pub project: &'a str,
    pub sections: Vec<SectionJson<'a>>,
}

// ---------------------------------------------------------------------------
// Printing
// ---------------------------------------------------------------------------

/// Short form of a record id for text output
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

fn task_line(task: &Task) -> String {
    let mut line = format!("  {} {}", short_id(&task.id), task.title);
    if let Some(priority) = task.priority {
        line.push_str(&format!(" !{}", priority));
    }
    if task.is_done() {
        line.push_str(" (done)");
    }
    line
}

pub fn print_projects(projects: &[Project], json: bool) {
    if json {
        println!("{}", serde_json::to_string_pretty(projects).unwrap());
        return;
    }
    if projects.is_empty() {
        println!("no projects");
        return;
    }
    for project in projects {
        if project.description.is_empty() {
            println!("{} {}", short_id(&project.id), project.name);
        } else {
            println!(
                "{} {} — {}",
                short_id(&project.id),
                project.name,
                project.description
            );
        }
    }
}

pub fn print_board(project: &Project, view: &KanbanView, json: bool) {
    if json {
        let mut columns = Vec::new();
        for (status, tasks) in view.columns() {
            columns.push(ColumnJson { status, tasks });
        }
        let board = BoardJson {
            project: &project.id,
            columns,
        };
        println!("{}", serde_json::to_string_pretty(&board).unwrap());
        return;
    }

    println!("{}", project.name);
    for (status, tasks) in view.columns() {
        println!("\n{} ({})", status.label(), tasks.len());
        for task in tasks {
            println!("{}", task_line(task));
        }
    }
}

pub fn print_agenda(project: &Project, view: &DayListView, show_completed: bool, json: bool) {
    if json {
        let mut sections = Vec::new();
        for (section, _) in view.sections() {
            sections.push(SectionJson {
                section,
                tasks: view.visible(section, show_completed),
            });
        }
        let agenda = AgendaJson {
            project: &project.id,
            sections,
        };
        println!("{}", serde_json::to_string_pretty(&agenda).unwrap());
        return;
    }

    println!("{}", project.name);
    for (section, _) in view.sections() {
        let tasks = view.visible(section, show_completed);
        println!("\n{} ({})", section.label(), tasks.len());
        for task in tasks {
            println!("{}", task_line(task));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_id_truncates_uuids() {
        assert_eq!(short_id("0c32c0b1-5a4c-4dd2-9d94-8c8a0c6f7a01"), "0c32c0b1");
        assert_eq!(short_id("tiny"), "tiny");
    }
}
