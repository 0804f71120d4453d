//! CLI entry and dispatch.

use anyhow::Result;
use clap::Parser;
use tsk_core::task::{StatusFilter, TaskDraft, TaskPatch, TaskStatus};

mod commands;

#[derive(Parser)]
#[command(name = "tsk")]
#[command(version)]
#[command(about = "Local task tracker with role-gated mutations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log in with a username and password
    Login {
        #[arg(value_name = "USERNAME")]
        username: String,
        #[arg(value_name = "PASSWORD")]
        password: String,
    },

    /// Log out and clear the saved session
    Logout,

    /// Show the current session
    Whoami,

    /// List tasks, optionally filtered by status
    List {
        /// Status filter: All, "Not Started", "In Progress", or Completed
        #[arg(long, default_value = "All")]
        status: StatusFilter,
    },

    /// Create a new task (admin only)
    Create {
        /// Title for the task (must not be empty)
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Assignee for the task
        #[arg(long = "assigned-to", default_value = "")]
        assigned_to: String,

        #[arg(long, default_value = "Not Started")]
        status: TaskStatus,
    },

    /// Edit fields of an existing task
    Edit {
        /// The ID of the task to edit
        #[arg(value_name = "TASK_ID")]
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long = "assigned-to")]
        assigned_to: Option<String>,

        #[arg(long)]
        status: Option<TaskStatus>,
    },

    /// Mark a task as Completed
    Done {
        /// The ID of the task to complete
        #[arg(value_name = "TASK_ID")]
        id: String,
    },

    /// Delete a task
    Delete {
        /// The ID of the task to delete
        #[arg(value_name = "TASK_ID")]
        id: String,
    },
}

pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    dispatch(Cli::parse())
}

fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Login { username, password } => commands::auth::login(&username, &password),
        Commands::Logout => commands::auth::logout(),
        Commands::Whoami => commands::auth::whoami(),

        Commands::List { status } => commands::tasks::list(status),
        Commands::Create {
            title,
            description,
            assigned_to,
            status,
        } => commands::tasks::create(TaskDraft {
            title,
            description,
            assigned_to,
            status,
        }),
        Commands::Edit {
            id,
            title,
            description,
            assigned_to,
            status,
        } => commands::tasks::edit(
            &id,
            TaskPatch {
                title,
                description,
                assigned_to,
                status,
            },
        ),
        Commands::Done { id } => commands::tasks::done(&id),
        Commands::Delete { id } => commands::tasks::delete(&id),
    }
}
