use std::path::PathBuf;

use crate::cli::commands::*;
use crate::cli::output;
use crate::drag::{DragDrop, DropTarget};
use crate::io::snapshot;
use crate::model::{ListSection, NewProject, NewTask, Priority, ProjectPatch, TaskPatch, TaskStatus};
use crate::store::Store;
use crate::view;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let dir = match &cli.data_dir {
        Some(dir) => PathBuf::from(dir),
        None => snapshot::data_dir(),
    };
    let mut store = Store::open(&dir)?;
    let json = cli.json;

    match cli.command {
        Commands::Project(cmd) => cmd_project(cmd, &mut store, json),
        Commands::Add(args) => cmd_add(args, &mut store),
        Commands::Edit(args) => cmd_edit(args, &mut store),
        Commands::Rm(args) => cmd_rm(args, &mut store),
        Commands::Mv(args) => cmd_mv(args, &mut store),
        Commands::Plan(args) => cmd_plan(args, &mut store),
        Commands::Toggle(args) => cmd_toggle(args, &mut store),
        Commands::Board(args) => cmd_board(args, &store, json),
        Commands::Agenda(args) => cmd_agenda(args, &store, json),
    }
}

// ---------------------------------------------------------------------------
// Argument parsing helpers
// ---------------------------------------------------------------------------

fn parse_status(s: &str) -> Result<TaskStatus, String> {
    TaskStatus::parse(s).ok_or_else(|| format!("unknown status '{}' (todo, in-progress, done)", s))
}

fn parse_section(s: &str) -> Result<ListSection, String> {
    ListSection::parse(s).ok_or_else(|| format!("unknown section '{}' (today, tomorrow, later)", s))
}

fn parse_priority(s: &str) -> Result<Priority, String> {
    Priority::parse(s).ok_or_else(|| format!("unknown priority '{}' (high, low)", s))
}

// ---------------------------------------------------------------------------
// Project commands
// ---------------------------------------------------------------------------

fn cmd_project(
    cmd: ProjectCmd,
    store: &mut Store,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd.action {
        ProjectAction::Add { name, description } => {
            let project = store.projects.add(NewProject { name, description });
            println!("created project {} ({})", project.name, project.id);
        }
        ProjectAction::List => {
            output::print_projects(store.projects.list(), json);
        }
        ProjectAction::Edit {
            id,
            name,
            description,
        } => {
            store.projects.update(&id, ProjectPatch { name, description });
            println!("updated project {}", id);
        }
        ProjectAction::Rm { id } => {
            if store.projects.get(&id).is_none() {
                println!("no project {} (nothing to delete)", id);
                return Ok(());
            }
            // Deleting a project does not cascade; its tasks stay behind.
            let orphans = store.tasks.by_project(&id).len();
            store.projects.delete(&id);
            if orphans > 0 {
                println!("deleted project {} ({} tasks left in place)", id, orphans);
            } else {
                println!("deleted project {}", id);
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Task commands
// ---------------------------------------------------------------------------

fn cmd_add(args: AddArgs, store: &mut Store) -> Result<(), Box<dyn std::error::Error>> {
    let status = parse_status(&args.status)?;
    let list_section = args.section.as_deref().map(parse_section).transpose()?;
    let priority = args.priority.as_deref().map(parse_priority).transpose()?;

    // No existence check on the project id; the reference is unenforced.
    let task = store.tasks.add(NewTask {
        project_id: args.project_id,
        title: args.title,
        description: args.description,
        status,
        list_section,
        priority,
        color: args.color,
    });
    println!("created task {} ({})", task.title, task.id);
    Ok(())
}

fn cmd_edit(args: EditArgs, store: &mut Store) -> Result<(), Box<dyn std::error::Error>> {
    let status = args.status.as_deref().map(parse_status).transpose()?;
    let list_section = args.section.as_deref().map(parse_section).transpose()?;
    let priority = args.priority.as_deref().map(parse_priority).transpose()?;

    store.tasks.update(&args.id, TaskPatch {
        title: args.title,
        description: args.description,
        status,
        list_section,
        // Done-ness changes go through `toggle` so the completed flag and
        // the status cannot drift apart.
        completed: None,
        priority,
        color: args.color,
    });
    println!("updated task {}", args.id);
    Ok(())
}

fn cmd_rm(args: RmArgs, store: &mut Store) -> Result<(), Box<dyn std::error::Error>> {
    store.tasks.delete(&args.id);
    println!("deleted task {}", args.id);
    Ok(())
}

fn cmd_mv(args: MvArgs, store: &mut Store) -> Result<(), Box<dyn std::error::Error>> {
    let status = parse_status(&args.status)?;

    // A CLI move is a one-gesture drag: pick the task up, drop it on the
    // column.
    let mut dnd = DragDrop::new();
    dnd.drag_start(&args.id);
    dnd.drop_on(DropTarget::Column(status), &mut store.tasks);
    println!("moved task {} to {}", args.id, status);
    Ok(())
}

fn cmd_plan(args: PlanArgs, store: &mut Store) -> Result<(), Box<dyn std::error::Error>> {
    let section = parse_section(&args.section)?;

    let mut dnd = DragDrop::new();
    dnd.drag_start(&args.id);
    dnd.drop_on(DropTarget::Section(section), &mut store.tasks);
    println!("planned task {} for {}", args.id, section);
    Ok(())
}

fn cmd_toggle(args: ToggleArgs, store: &mut Store) -> Result<(), Box<dyn std::error::Error>> {
    store.tasks.toggle_complete(&args.id);
    match store.tasks.get(&args.id) {
        Some(task) if task.is_done() => println!("task {} done", args.id),
        Some(_) => println!("task {} reopened", args.id),
        None => println!("no task {} (nothing to toggle)", args.id),
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// View commands
// ---------------------------------------------------------------------------

fn cmd_board(args: BoardArgs, store: &Store, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let project = store
        .projects
        .get(&args.project_id)
        .ok_or_else(|| format!("project not found: {}", args.project_id))?;
    let tasks = store.tasks.by_project(&project.id);
    let board = view::kanban(&tasks);
    output::print_board(project, &board, json);
    Ok(())
}

fn cmd_agenda(
    args: AgendaArgs,
    store: &Store,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let project = store
        .projects
        .get(&args.project_id)
        .ok_or_else(|| format!("project not found: {}", args.project_id))?;
    let tasks = store.tasks.by_project(&project.id);
    let agenda = view::day_list(&tasks);
    output::print_agenda(project, &agenda, !args.hide_done, json);
    Ok(())
}
