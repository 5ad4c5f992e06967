use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sl", about = concat!("slate v", env!("CARGO_PKG_VERSION"), " - projects, kanban, day planning"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage projects
    Project(ProjectCmd),
    /// Add a task to a project
    Add(AddArgs),
    /// Edit task fields
    Edit(EditArgs),
    /// Delete a task
    Rm(RmArgs),
    /// Move a task to a kanban column
    Mv(MvArgs),
    /// Move a task to a day section
    Plan(PlanArgs),
    /// Toggle a task between done and not done
    Toggle(ToggleArgs),
    /// Show a project's kanban board
    Board(BoardArgs),
    /// Show a project's day-planner list
    Agenda(AgendaArgs),
}

// ---------------------------------------------------------------------------
// Project args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ProjectCmd {
    #[command(subcommand)]
    pub action: ProjectAction,
}

#[derive(Subcommand)]
pub enum ProjectAction {
    /// Create a project
    Add {
        /// Project name
        name: String,
        /// Project description
        #[arg(long, default_value = "")]
        description: String,
    },
    /// List all projects, newest first
    List,
    /// Edit project fields
    Edit {
        /// Project ID
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a project (its tasks are left in place)
    Rm {
        /// Project ID
        id: String,
    },
}

// ---------------------------------------------------------------------------
// Task args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Project the task belongs to
    pub project_id: String,
    /// Task title
    pub title: String,
    #[arg(long, default_value = "")]
    pub description: String,
    /// Initial status (todo, in-progress, done)
    #[arg(long, default_value = "todo")]
    pub status: String,
    /// Day section (today, tomorrow, later)
    #[arg(long)]
    pub section: Option<String>,
    /// Priority (high, low)
    #[arg(long)]
    pub priority: Option<String>,
    /// Color tag
    #[arg(long)]
    pub color: Option<String>,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task ID
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// New status (todo, in-progress, done)
    #[arg(long)]
    pub status: Option<String>,
    /// New day section (today, tomorrow, later)
    #[arg(long)]
    pub section: Option<String>,
    /// New priority (high, low)
    #[arg(long)]
    pub priority: Option<String>,
    /// New color tag
    #[arg(long)]
    pub color: Option<String>,
}

#[derive(Args)]
pub struct RmArgs {
    /// Task ID
    pub id: String,
}

#[derive(Args)]
pub struct MvArgs {
    /// Task ID
    pub id: String,
    /// Target column (todo, in-progress, done)
    pub status: String,
}

#[derive(Args)]
pub struct PlanArgs {
    /// Task ID
    pub id: String,
    /// Target section (today, tomorrow, later)
    pub section: String,
}

#[derive(Args)]
pub struct ToggleArgs {
    /// Task ID
    pub id: String,
}

// ---------------------------------------------------------------------------
// View args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct BoardArgs {
    /// Project ID
    pub project_id: String,
}

#[derive(Args)]
pub struct AgendaArgs {
    /// Project ID
    pub project_id: String,
    /// Hide tasks that are done
    #[arg(long)]
    pub hide_done: bool,
}
