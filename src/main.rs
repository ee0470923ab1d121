//! task - a CLI for managing your TODOs.

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;
use taskbook::TaskStore;

mod cli;

use cli::{Cli, Command};

fn setup_logging() -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskbook")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("task.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    // One store handle per invocation, released on every exit path.
    let store = TaskStore::open(&cli.file).context("Failed to open task store")?;

    match cli.command {
        Command::Add { words } => {
            let description = words.join(" ");
            let id = store.add(&description).context("Failed to add task")?;
            info!("added task {id}");
            println!("Added {description:?} to your task list.");
        }

        Command::Do { id } => {
            let description = store.complete(id).context("Failed to complete task")?;
            info!("completed task {id}");
            println!("You have completed the {description:?} task.");
        }

        Command::List => {
            let tasks = store.list().context("Failed to list tasks")?;
            info!("listed {} task(s)", tasks.len());
            println!("You have the following tasks:");
            for (id, description) in tasks {
                println!("{}. {}", id.to_string().cyan(), description);
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    info!("Command: {:?}", std::env::args().collect::<Vec<_>>());

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
