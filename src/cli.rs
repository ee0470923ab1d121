//! CLI argument parsing for the task binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "task",
    about = "task is a CLI for managing your TODOs",
    version,
    after_help = "Logs are written to: ~/.local/share/taskbook/logs/task.log"
)]
pub struct Cli {
    /// Path to the task database file
    #[arg(short, long, global = true, default_value = "tasks.db")]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Add a new task to your TODO list
    Add {
        /// Task description (words are joined with single spaces)
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Mark a task on your TODO list as complete
    Do {
        /// Task id, as shown by `task list`
        id: u64,
    },

    /// List all of your incomplete tasks
    List,
}
